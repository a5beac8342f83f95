// src/domain/validation/mod.rs
pub mod rules;
pub mod set;
pub mod violation;

pub use rules::{ParseError, RuleName, ValidationError, ValidatorConfig};
pub use set::ValidatorSet;
pub use violation::{Violation, Violations};
