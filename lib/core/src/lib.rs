//! Core domain types and utilities for the cognito-canvas workspace.
//!
//! This crate provides the foundational ID types shared by the
//! cognito-canvas workflow tooling.

pub mod id;

pub use id::{EdgeId, NodeId, ParseIdError};
