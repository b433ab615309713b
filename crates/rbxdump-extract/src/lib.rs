pub mod extractor;
pub mod paths;

pub use extractor::Extractor;
pub use paths::unique_path;
