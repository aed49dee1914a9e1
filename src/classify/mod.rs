//! Classification merge, code assignment and the record store.
//!
//! Unlike the resolution engine, this module reads and writes external
//! state and inherits the store's consistency model.

pub mod codes;
pub mod merge;
pub mod store;

pub use codes::{derive_full_code, save_classification, split_code_path};
pub use merge::merge_classifications;
pub use store::{ClassificationStore, JsonFileStore, MemoryStore};
