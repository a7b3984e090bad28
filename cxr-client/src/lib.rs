//! Upload client for the CXR gateway.
//!
//! The controller drives the full upload-to-result flow: validate the
//! selected file, render a preview, call `/predict`, render the outcome
//! through an injected view, and cache the last result locally.

pub mod api;
pub mod cache;
pub mod config;
pub mod controller;
pub mod validate;
pub mod view;

pub use api::{ApiClient, ApiError};
pub use cache::{CachedResult, ResultCache};
pub use config::Config;
pub use controller::UploadController;
pub use validate::{validate_upload, ValidationError, MAX_UPLOAD_BYTES};
pub use view::{Badge, Preview, TerminalView, View};
