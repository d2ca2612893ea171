use crate::kind::{CoefficientVector, EquationKind};
use arrayvec::ArrayVec;
use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Solve an equation of the given `kind`, where `coefficients` are laid out
/// as described by [`EquationKind::roles()`].
///
/// Degenerate systems aren't errors, they come back as the corresponding
/// [`Outcome`] variant. The only failures are for coefficients which don't
/// fit the `kind`.
pub fn solve(
    kind: EquationKind,
    coefficients: &[f64],
) -> Result<Outcome, SolveError> {
    let coefficients =
        CoefficientVector::new(kind, coefficients).map_err(|e| {
            tracing::debug!(%kind, error = %e, "Rejected coefficients");
            e
        })?;

    Ok(solve_coefficients(&coefficients))
}

/// Solve a set of coefficients which have already been validated.
pub fn solve_coefficients(coefficients: &CoefficientVector<'_>) -> Outcome {
    let kind = coefficients.kind();

    let outcome = match kind {
        EquationKind::SingleVariable => {
            let [a, b] = [coefficients[0], coefficients[1]];
            solve_single_variable(a, b)
        },
        EquationKind::TwoVariableSystem => {
            let (a, b) = two_variable_system(coefficients);
            solve_2x2(a, b)
        },
        EquationKind::ThreeVariableSystem => {
            let (a, b) = three_variable_system(coefficients);
            solve_3x3(a, b)
        },
    };

    tracing::debug!(%kind, ?outcome, "Solved");

    outcome
}

/// The result of solving an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Exactly one solution, with a value for each unknown (`x`, then `y`,
    /// then `z`).
    Unique(ArrayVec<[f64; 3]>),
    NoSolution,
    /// Only reachable for [`EquationKind::SingleVariable`].
    InfiniteSolutions,
    /// The coefficient matrix has a determinant of zero. Only reachable for
    /// systems of equations.
    Singular,
}

impl Outcome {
    pub(crate) fn unique(values: &[f64]) -> Self {
        Outcome::Unique(values.iter().copied().collect())
    }

    /// The solution values, if there was a unique solution.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Outcome::Unique(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn is_unique(&self) -> bool { self.values().is_some() }
}

/// The ways a caller can misuse [`solve()`].
///
/// Degenerate systems are reported through [`Outcome`], not here.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The wrong number of coefficients were provided.
    ArityMismatch {
        kind: EquationKind,
        expected: usize,
        found: usize,
    },
    /// A coefficient was `NaN` or infinite.
    NonFiniteCoefficient { index: usize, value: f64 },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::ArityMismatch {
                kind,
                expected,
                found,
            } => write!(
                f,
                "{} needs {} coefficients but {} were provided",
                kind.description(),
                expected,
                found
            ),
            SolveError::NonFiniteCoefficient { index, value } => write!(
                f,
                "coefficient {} must be a finite number, found {}",
                index + 1,
                value
            ),
        }
    }
}

impl Error for SolveError {}

/// `a·x + b = 0`.
fn solve_single_variable(a: f64, b: f64) -> Outcome {
    if a == 0.0 {
        if b == 0.0 {
            Outcome::InfiniteSolutions
        } else {
            Outcome::NoSolution
        }
    } else {
        Outcome::unique(&[-b / a])
    }
}

fn two_variable_system(
    coefficients: &[f64],
) -> (Matrix2<f64>, Vector2<f64>) {
    let [a, b, c, d, e, f] = [
        coefficients[0],
        coefficients[1],
        coefficients[2],
        coefficients[3],
        coefficients[4],
        coefficients[5],
    ];

    (Matrix2::new(a, b, d, e), Vector2::new(c, f))
}

/// Build `A` and `B` for the three-variable system.
///
/// Note that `B` is the third column of `A`, so each row's `z` coefficient is
/// also its right-hand side.
fn three_variable_system(
    coefficients: &[f64],
) -> (Matrix3<f64>, Vector3<f64>) {
    let a = Matrix3::from_row_slice(&coefficients[..9]);
    let b = Vector3::new(coefficients[2], coefficients[5], coefficients[8]);

    (a, b)
}

/// Solve `A·X = B` for a 2x2 matrix using Cramer's rule.
///
/// ```text
/// x = det(A with column 0 replaced by B) / det(A)
/// y = det(A with column 1 replaced by B) / det(A)
/// ```
fn solve_2x2(a: Matrix2<f64>, b: Vector2<f64>) -> Outcome {
    let determinant = a.determinant();
    tracing::trace!(determinant, "Calculated the 2x2 determinant");

    if determinant == 0.0 {
        return Outcome::Singular;
    }

    let mut values = [0.0; 2];

    for (column, value) in values.iter_mut().enumerate() {
        let mut substituted = a;
        substituted.set_column(column, &b);
        *value = substituted.determinant() / determinant;
    }

    Outcome::unique(&values)
}

/// The 3x3 equivalent of [`solve_2x2()`], where determinants are calculated
/// using cofactor expansion along the first row.
fn solve_3x3(a: Matrix3<f64>, b: Vector3<f64>) -> Outcome {
    let determinant = a.determinant();
    tracing::trace!(determinant, "Calculated the 3x3 determinant");

    if determinant == 0.0 {
        return Outcome::Singular;
    }

    let mut values = [0.0; 3];

    for (column, value) in values.iter_mut().enumerate() {
        let mut substituted = a;
        substituted.set_column(column, &b);
        *value = substituted.determinant() / determinant;
    }

    Outcome::unique(&values)
}
