pub mod document;

pub use document::{load_file, load_str};
