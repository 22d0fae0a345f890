//! Pure building blocks shared by the rule sets: calendar arithmetic,
//! single-value rules and the failure accumulator.

pub mod calendar;
pub mod validation_engine;
pub mod validation_rules;
