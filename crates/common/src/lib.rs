pub mod iter;
mod macros;

pub use iter::{MultiPeek, MultiPeekable};
