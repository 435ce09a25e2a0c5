mod store;
mod types;

pub use store::{DictionaryError, DictionarySource, DictionaryStore, compare_shape};
pub use types::*;
