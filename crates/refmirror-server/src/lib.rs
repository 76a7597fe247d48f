//! The refmirror webhook listener.
//!
//! Receives GitHub v3 push events, asks the mirror-discovery layer which
//! destinations must follow the change, and drives the replication
//! pipeline for each one, reporting what happened in the response body.
//!
//! # Modules
//!
//! - [`config`] — [`ServerConfig`] and the optional push credentials
//! - [`error`] — [`ServerError`] and its HTTP mapping
//! - [`event`] — the push-event payload model and response types
//! - [`handler`] — the webhook handler and [`AppState`]
//! - [`router`] — [`build_router`]
//! - [`server`] — [`MirrorServer`], bind-and-serve

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{AuthConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use event::{Commit, FailedPush, Identity, MirroredRef, PushEvent, PushOutcome, Repository};
pub use handler::AppState;
pub use router::build_router;
pub use server::MirrorServer;
