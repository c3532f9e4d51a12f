pub mod algorithms;
pub mod config;
pub mod core;
pub mod edge;
pub mod error;
pub mod graph;
pub mod interner;
pub mod storage;
pub mod traits;

pub use self::core::*;
pub use algorithms::*;
pub use config::*;
pub use edge::*;
pub use error::*;
pub use graph::*;
pub use interner::*;
pub use storage::*;
pub use traits::*;
