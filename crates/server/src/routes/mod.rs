pub mod catalog;
pub mod prompt;
pub mod system;
