//! 图核心模块
//!
//! 定义城市、里程边和只读里程图

mod city;
mod edge;
mod graph;
mod index;

pub use city::{City, CityId};
pub use edge::{Edge, Mileage};
pub use graph::{Graph, GraphBuilder};
pub use index::CityRegistry;
