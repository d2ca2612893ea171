//! Turning an [`Outcome`] into something a human can read.

use crate::{
    kind::VARIABLES,
    solve::{Outcome, SolveError},
};
use std::fmt::{self, Display, Formatter, Write};

/// Options controlling how an [`Outcome`] is rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FormatOptions {
    /// The number of digits printed after the decimal point.
    pub precision: usize,
}

impl FormatOptions {
    pub const DEFAULT_PRECISION: usize = 4;

    pub fn with_precision(precision: usize) -> Self {
        FormatOptions { precision }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions::with_precision(FormatOptions::DEFAULT_PRECISION)
    }
}

/// Render an [`Outcome`] using the default [`FormatOptions`].
///
/// A unique solution is written as `"x = 1.5000, y = -2.0000"`.
pub fn format(outcome: &Outcome) -> String {
    format_with(outcome, &FormatOptions::default())
}

/// Render an [`Outcome`] with explicit [`FormatOptions`].
///
/// Values are printed exactly as computed, so an overflowed solution shows up
/// as `inf` or `NaN`.
pub fn format_with(outcome: &Outcome, options: &FormatOptions) -> String {
    let mut buffer = String::new();
    write_outcome(&mut buffer, outcome, options)
        .expect("Writing to a String can't fail");

    buffer
}

/// The message shown when solving fails entirely.
pub fn format_error(error: &SolveError) -> String {
    format!("Error: {}", error)
}

/// Render the result of [`crate::solve()`] the way it would be shown to a
/// user, regardless of whether it succeeded.
pub fn render(result: &Result<Outcome, SolveError>) -> String {
    match result {
        Ok(outcome) => format(outcome),
        Err(e) => format_error(e),
    }
}

fn write_outcome<W: Write>(
    w: &mut W,
    outcome: &Outcome,
    options: &FormatOptions,
) -> fmt::Result {
    match outcome {
        Outcome::Unique(values) => {
            for (i, (name, value)) in VARIABLES.iter().zip(values).enumerate()
            {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write!(w, "{} = {:.*}", name, options.precision, value)?;
            }

            Ok(())
        },
        Outcome::NoSolution => w.write_str("No solution"),
        Outcome::InfiniteSolutions => w.write_str("Infinite solutions"),
        Outcome::Singular => {
            w.write_str("No unique solution (Singular matrix)")
        },
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = match f.precision() {
            Some(precision) => FormatOptions::with_precision(precision),
            None => FormatOptions::default(),
        };

        write_outcome(f, self, &options)
    }
}
