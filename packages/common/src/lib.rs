//! # JsonTree Common
//!
//! Value-level building blocks shared by the editor and its hosts:
//! path parsing/serialization, path-addressed get/set, and runtime
//! data-type classification.

pub mod accessor;
pub mod data_type;
pub mod error;
pub mod path;

pub use data_type::{default_for, DataType};
pub use error::*;
pub use path::{child_path, Path, Segment};

// Re-export the value type so hosts do not need a direct serde_json dependency
pub use serde_json::{Map, Value};
