pub mod json;

pub use crate::error::LoadError;
pub use json::{load_model, parse_model};
