pub use serde::Serialize;
pub use std::error::Error;

pub use fnv::FnvHashSet as Set;

pub use log::{trace, debug, info, warn, error};

pub type Result<T, E = Box<dyn Error>> = std::result::Result<T, E>;

pub use std::io;
pub use std::path::{Path, PathBuf};

pub use json::Value;

/// A JSON object as loaded from disk, keys in file order.
pub type Object = json::Map<String, Value>;
