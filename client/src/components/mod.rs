//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards and chrome; pages own data loading and pass
//! callbacks down for actions.

pub mod company_card;
pub mod disclosure_card;
pub mod interest_card;
pub mod navbar;
