//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `decision` - The accumulated decision dataset (options, criteria, scores)
//! - `validation` - Pure semantic validators for raw user inputs
//! - `analysis` - Pure analysis services (scoring, edge cases, recommendation)
//! - `session` - Per-analysis session record and conversation stage machine

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod session;
pub mod validation;
