//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, loading, API calls) and
//! delegates rendering details to `components`.

pub mod company;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod search;
pub mod signup;
