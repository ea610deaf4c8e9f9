//! Core domain types for the video gallery: models, configuration, errors,
//! and the pure filename helpers shared by the pipeline and the API.

pub mod config;
pub mod error;
pub mod media;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
