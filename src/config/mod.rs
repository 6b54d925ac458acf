//! Environment configuration
//!
//! The resolver turns a selector into a [`Configuration`](crate::domain::Configuration);
//! the loader gathers that selector from the command line and config files.

pub mod loader;
pub mod resolver;

pub use loader::{load_selector, LoadError};
pub use resolver::resolve;
