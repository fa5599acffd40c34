//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns what is persisted in the browser; `auth` is the reactive
//! view of it that guards and components read from context.

pub mod auth;
pub mod session;
