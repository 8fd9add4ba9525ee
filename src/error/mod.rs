pub mod types;

pub use types::{BlinkError, Result};
