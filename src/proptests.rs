//! Property-based tests for the solvers.

#[cfg(test)]
mod tests {
    use crate::{format, solve, EquationKind, Outcome, SolveError};
    use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};
    use proptest::prelude::*;

    fn coefficient() -> impl Strategy<Value = f64> { -1000.0..1000.0 }

    fn non_zero_coefficient() -> impl Strategy<Value = f64> {
        prop_oneof![(-1000.0..-1e-3), (1e-3..1000.0)]
    }

    /// Is `A·X` close enough to `B`, relative to the size of the terms
    /// involved?
    fn residual_is_small(residual: f64, scale: f64) -> bool {
        residual.abs() <= 1e-6 * scale.max(1.0)
    }

    proptest! {
        #[test]
        fn single_variable_root(a in non_zero_coefficient(), b in coefficient()) {
            let got = solve(EquationKind::SingleVariable, &[a, b]).unwrap();

            prop_assert_eq!(got, Outcome::unique(&[-b / a]));
        }

        #[test]
        fn no_x_term_with_a_constant_has_no_solution(b in non_zero_coefficient()) {
            let got = solve(EquationKind::SingleVariable, &[0.0, b]).unwrap();

            prop_assert_eq!(got, Outcome::NoSolution);
        }

        #[test]
        fn two_variable_solutions_satisfy_both_equations(
            coefficients in prop::array::uniform6(coefficient()),
        ) {
            let [a, b, c, d, e, f] = coefficients;
            let matrix = Matrix2::new(a, b, d, e);
            // keep well away from singular matrices so the residual is
            // meaningful
            prop_assume!(matrix.determinant().abs() > 1.0);

            let got = solve(EquationKind::TwoVariableSystem, &coefficients).unwrap();
            let values = got.values().unwrap();
            let x = Vector2::new(values[0], values[1]);

            let residual = matrix * x - Vector2::new(c, f);
            let scale = matrix.amax() * x.amax();
            prop_assert!(residual_is_small(residual[0], scale), "{:?}", residual);
            prop_assert!(residual_is_small(residual[1], scale), "{:?}", residual);
        }

        #[test]
        fn proportional_rows_are_singular(
            row in prop::array::uniform3(-1000i32..1000),
            factor in -8i32..8,
        ) {
            // integers keep every product exact
            let [a, b, c] = [f64::from(row[0]), f64::from(row[1]), f64::from(row[2])];
            let factor = f64::from(factor);
            let coefficients = [a, b, c, a * factor, b * factor, c * factor];

            let got = solve(EquationKind::TwoVariableSystem, &coefficients).unwrap();

            prop_assert_eq!(got, Outcome::Singular);
        }

        #[test]
        fn three_variable_solutions_satisfy_every_equation(
            coefficients in prop::array::uniform9(coefficient()),
        ) {
            let matrix = Matrix3::from_row_slice(&coefficients);
            prop_assume!(matrix.determinant().abs() > 1.0);

            let got = solve(EquationKind::ThreeVariableSystem, &coefficients).unwrap();
            let values = got.values().unwrap();
            let x = Vector3::new(values[0], values[1], values[2]);
            let rhs = Vector3::new(coefficients[2], coefficients[5], coefficients[8]);

            let residual = matrix * x - rhs;
            let scale = matrix.amax() * x.amax();
            for i in 0..3 {
                prop_assert!(residual_is_small(residual[i], scale), "{:?}", residual);
            }
        }

        #[test]
        fn wrong_arity_is_always_reported(
            kind_index in 0usize..3,
            coefficients in prop::collection::vec(coefficient(), 0..12),
        ) {
            let kind = EquationKind::ALL[kind_index];
            prop_assume!(coefficients.len() != kind.arity());

            let got = solve(kind, &coefficients);

            prop_assert_eq!(
                got,
                Err(SolveError::ArityMismatch {
                    kind,
                    expected: kind.arity(),
                    found: coefficients.len(),
                })
            );
        }

        #[test]
        fn unique_solutions_label_every_unknown(
            kind_index in 0usize..3,
            coefficients in prop::collection::vec(coefficient(), 9),
        ) {
            let kind = EquationKind::ALL[kind_index];
            let got = solve(kind, &coefficients[..kind.arity()]).unwrap();

            if got.is_unique() {
                let rendered = format(&got);
                let labels: Vec<_> = rendered
                    .split(", ")
                    .map(|field| field.split(" = ").next().unwrap())
                    .collect();
                prop_assert_eq!(labels, kind.variables().to_vec());
            }
        }
    }
}
