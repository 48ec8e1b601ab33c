//! URL handling module for Site-Sweep
//!
//! This module provides URL canonicalization and the scope predicate that
//! restricts traversal to the target domain.

mod normalize;
mod scope;

pub use normalize::normalize;
pub use scope::in_scope;
