pub mod traits;

pub use traits::{Node, Sink};
