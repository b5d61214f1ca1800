pub mod prelude;
pub mod render;
pub mod clean;

pub use crate::clean::{run, Config};
