pub mod colorings;
pub mod components;
pub mod cycles;
pub mod katz;
pub mod kruskal;
pub mod prim;
pub mod traversal;
pub mod union_find;

pub use colorings::*;
pub use components::*;
pub use cycles::*;
pub use katz::*;
pub use kruskal::*;
pub use prim::*;
pub use traversal::*;
pub use union_find::*;
