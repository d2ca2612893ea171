//! Closed-form solvers for linear equations with one, two, or three
//! unknowns.
//!
//! ```rust
//! use cramer::EquationKind;
//!
//! // x + 0y = 3
//! // 0x + y = 5
//! let outcome = cramer::solve(
//!     EquationKind::TwoVariableSystem,
//!     &[1.0, 0.0, 3.0, 0.0, 1.0, 5.0],
//! )?;
//!
//! assert_eq!(cramer::format(&outcome), "x = 3.0000, y = 5.0000");
//! # Ok::<(), cramer::SolveError>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod format;
mod kind;
mod parse;
mod proptests;
mod solve;

pub use format::{format, format_error, format_with, render, FormatOptions};
pub use kind::{CoefficientVector, EquationKind, UnknownKind};
pub use parse::{parse_coefficients, parse_request, ParseError, RequestError};
pub use solve::{solve, solve_coefficients, Outcome, SolveError};
