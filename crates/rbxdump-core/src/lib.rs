pub mod config;
pub mod constants;
pub mod error;
pub mod instance;
pub mod naming;

pub use error::{Error, Result};
pub use instance::{Instance, Property};
