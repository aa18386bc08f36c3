//! REST client for the cognito-canvas workflow service.
//!
//! The editor is fully local; this crate is the one place a session touches
//! the network. It validates a draft's name locally, posts the draft to
//! `POST /api/workflows`, and returns the identifier the service assigned so
//! the UI can navigate to the saved workflow.

pub mod config;
pub mod error;
pub mod workflows;

pub use config::ClientConfig;
pub use error::ClientError;
pub use workflows::{CreatedWorkflow, WorkflowsClient};
