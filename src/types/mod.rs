pub mod error;
pub mod sequence;

pub use error::SeqError;
pub use sequence::{Iter, Sequence};
