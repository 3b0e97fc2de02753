pub mod community;
pub mod config;
pub mod events;
pub mod gallery;
pub mod site;
pub mod ticker;
pub mod tracing;
