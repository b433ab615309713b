pub mod extract;
pub mod list;
