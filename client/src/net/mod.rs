//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request decoration and error mapping, `api` names the
//! endpoints, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
