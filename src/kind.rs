//! The shapes of equation we know how to solve, and the layout of their
//! coefficients.

use crate::solve::SolveError;
use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    str::FromStr,
};

/// Which kind of equation (or system of equations) is being solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EquationKind {
    /// `a·x + b = 0`.
    SingleVariable,
    /// `a·x + b·y = c` and `d·x + e·y = f`.
    TwoVariableSystem,
    /// Three rows of `x`, `y`, `z` coefficients. The last coefficient in each
    /// row is also used as that row's right-hand side.
    ThreeVariableSystem,
}

const SINGLE_VARIABLE_ROLES: [&str; 2] =
    ["coefficient of x", "constant term"];

const TWO_VARIABLE_ROLES: [&str; 6] = [
    "coefficient of x in equation 1",
    "coefficient of y in equation 1",
    "right-hand side of equation 1",
    "coefficient of x in equation 2",
    "coefficient of y in equation 2",
    "right-hand side of equation 2",
];

const THREE_VARIABLE_ROLES: [&str; 9] = [
    "coefficient of x in equation 1",
    "coefficient of y in equation 1",
    "coefficient of z (and right-hand side) in equation 1",
    "coefficient of x in equation 2",
    "coefficient of y in equation 2",
    "coefficient of z (and right-hand side) in equation 2",
    "coefficient of x in equation 3",
    "coefficient of y in equation 3",
    "coefficient of z (and right-hand side) in equation 3",
];

/// The names of the unknowns, in the order their values are solved for.
pub(crate) const VARIABLES: [&str; 3] = ["x", "y", "z"];

impl EquationKind {
    pub const ALL: [EquationKind; 3] = [
        EquationKind::SingleVariable,
        EquationKind::TwoVariableSystem,
        EquationKind::ThreeVariableSystem,
    ];

    /// The number of coefficients this kind of equation expects.
    pub fn arity(self) -> usize { self.roles().len() }

    /// The number of unknowns being solved for.
    pub fn unknowns(self) -> usize {
        match self {
            EquationKind::SingleVariable => 1,
            EquationKind::TwoVariableSystem => 2,
            EquationKind::ThreeVariableSystem => 3,
        }
    }

    /// A description of what each coefficient position means, in the order
    /// the coefficients are expected.
    pub fn roles(self) -> &'static [&'static str] {
        match self {
            EquationKind::SingleVariable => &SINGLE_VARIABLE_ROLES,
            EquationKind::TwoVariableSystem => &TWO_VARIABLE_ROLES,
            EquationKind::ThreeVariableSystem => &THREE_VARIABLE_ROLES,
        }
    }

    /// The names of the unknowns, in solution order.
    pub fn variables(self) -> &'static [&'static str] {
        &VARIABLES[..self.unknowns()]
    }

    /// A short human-readable name, as used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            EquationKind::SingleVariable => "a single-variable equation",
            EquationKind::TwoVariableSystem => "a two-variable system",
            EquationKind::ThreeVariableSystem => "a three-variable system",
        }
    }
}

impl Display for EquationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EquationKind::SingleVariable => write!(f, "single"),
            EquationKind::TwoVariableSystem => write!(f, "two"),
            EquationKind::ThreeVariableSystem => write!(f, "three"),
        }
    }
}

/// The error returned when parsing an [`EquationKind`] fails.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownKind {
    pub text: String,
}

impl Display for UnknownKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" isn't an equation kind (expected 1, 2, 3, single, two, or three)",
            self.text
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for EquationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.to_ascii_lowercase().as_str() {
            "1" | "single" => Ok(EquationKind::SingleVariable),
            "2" | "two" => Ok(EquationKind::TwoVariableSystem),
            "3" | "three" => Ok(EquationKind::ThreeVariableSystem),
            _ => Err(UnknownKind {
                text: trimmed.to_string(),
            }),
        }
    }
}

/// A set of coefficients which has been checked against an [`EquationKind`].
///
/// Holding one of these means the length matches the kind's arity and every
/// value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientVector<'a> {
    kind: EquationKind,
    values: &'a [f64],
}

impl<'a> CoefficientVector<'a> {
    /// Check `values` against the layout `kind` expects.
    ///
    /// The values are never truncated or padded, any length other than
    /// [`EquationKind::arity()`] is a [`SolveError::ArityMismatch`].
    pub fn new(
        kind: EquationKind,
        values: &'a [f64],
    ) -> Result<Self, SolveError> {
        if values.len() != kind.arity() {
            return Err(SolveError::ArityMismatch {
                kind,
                expected: kind.arity(),
                found: values.len(),
            });
        }

        if let Some((index, &value)) =
            values.iter().enumerate().find(|(_, v)| !v.is_finite())
        {
            return Err(SolveError::NonFiniteCoefficient { index, value });
        }

        Ok(CoefficientVector { kind, values })
    }

    pub fn kind(&self) -> EquationKind { self.kind }

    pub fn values(&self) -> &'a [f64] { self.values }
}

impl<'a> Deref for CoefficientVector<'a> {
    type Target = [f64];

    fn deref(&self) -> &Self::Target { self.values }
}
