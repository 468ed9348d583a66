//! Normalized error records.

mod detail;

pub use detail::{ErrorDetail, InputValue};
