use std::f64::consts::LN_10;

use super::model::{AbundanceTable, TransformedRow};
use super::LOG_HYDROGEN;

/// Convert one logarithmic abundance `X = log10(N_X / N_H) + 12` into the
/// linear ratio `A = N_X / N_H = 10^(X - 12)`.
///
/// The error follows from first-order Gaussian propagation with
/// `dA/dX = ln(10) * 10^(X - 12)`:
///
/// ```text
/// σ_A = sqrt((ln(10) * A)^2 * σ_X^2)
/// ```
pub fn transform_abundance(log_abundance: f64, log_abundance_error: f64) -> (f64, f64) {
    let ratio = ratio_to_hydrogen(log_abundance);
    (ratio, ratio_error(ratio, log_abundance_error))
}

fn ratio_to_hydrogen(log_abundance: f64) -> f64 {
    10f64.powf(log_abundance - LOG_HYDROGEN)
}

fn ratio_error(ratio: f64, log_abundance_error: f64) -> f64 {
    ((LN_10 * ratio).powi(2) * log_abundance_error.powi(2)).sqrt()
}

/// Map every row of the table to its ratio to hydrogen, keeping row order.
///
/// Missing values propagate: the ratio is missing when the abundance is,
/// and the error is missing when either the abundance or its error is.
pub fn transform_abundances(table: &AbundanceTable) -> Vec<TransformedRow> {
    table
        .iter()
        .map(|row| {
            let ratio = row.log_abundance.map(ratio_to_hydrogen);
            let error = ratio
                .zip(row.log_abundance_error)
                .map(|(a, sigma)| ratio_error(a, sigma));
            TransformedRow {
                atomic_number: row.atomic_number,
                element: row.element.clone(),
                ratio_to_hydrogen: ratio,
                ratio_to_hydrogen_error: error,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::data::model::AbundanceRow;

    fn row(z: u32, element: &str, x: Option<f64>, sigma: Option<f64>) -> AbundanceRow {
        AbundanceRow {
            atomic_number: z,
            element: element.to_string(),
            log_abundance: x,
            log_abundance_error: sigma,
        }
    }

    #[test]
    fn hydrogen_is_unity() {
        let (ratio, error) = transform_abundance(12.0, 0.05);
        assert_relative_eq!(ratio, 1.0);
        assert_relative_eq!(error, LN_10 * 0.05, max_relative = 1e-12);
        assert_relative_eq!(error, 0.115_129_254_6, max_relative = 1e-9);
    }

    #[test]
    fn error_is_never_negative() {
        let (_, error) = transform_abundance(7.5, -0.04);
        assert!(error > 0.0);
    }

    #[test]
    fn log_round_trip() {
        for x in [-2.0, 0.02, 1.05, 7.5, 8.69, 10.93, 12.0] {
            let (ratio, _) = transform_abundance(x, 0.1);
            assert_relative_eq!(ratio.log10() + LOG_HYDROGEN, x, epsilon = 1e-12);
        }
    }

    #[test]
    fn iron_matches_reference_values() {
        let (ratio, error) = transform_abundance(7.50, 0.04);
        assert_relative_eq!(ratio, 3.162_277_66e-5, max_relative = 1e-8);
        assert_relative_eq!(error, 2.912_565e-6, max_relative = 1e-6);
    }

    #[test]
    fn keeps_order_and_projects_columns() {
        let table = AbundanceTable::new(vec![
            row(26, "Fe", Some(7.50), Some(0.04)),
            row(1, "H", Some(12.0), Some(0.0)),
        ]);
        let out = transform_abundances(&table);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].element, "Fe");
        assert_eq!(out[0].atomic_number, 26);
        assert_eq!(out[1].element, "H");
        assert_eq!(out[1].ratio_to_hydrogen, Some(1.0));
        assert_eq!(out[1].ratio_to_hydrogen_error, Some(0.0));
    }

    #[test]
    fn table_and_scalar_paths_agree() {
        let table = AbundanceTable::new(vec![
            row(8, "O", Some(8.69), Some(0.05)),
            row(26, "Fe", Some(7.50), Some(0.04)),
        ]);
        for (out, input) in transform_abundances(&table).iter().zip(table.iter()) {
            let x = input.log_abundance.unwrap();
            let sigma = input.log_abundance_error.unwrap();
            let (ratio, error) = transform_abundance(x, sigma);
            assert_eq!(out.ratio_to_hydrogen, Some(ratio));
            assert_eq!(out.ratio_to_hydrogen_error, Some(error));
        }
    }

    #[test]
    fn missing_abundance_propagates() {
        let table = AbundanceTable::new(vec![
            row(43, "Tc", None, None),
            row(33, "As", None, Some(0.1)),
        ]);
        let out = transform_abundances(&table);
        for r in &out {
            assert_eq!(r.ratio_to_hydrogen, None);
            assert_eq!(r.ratio_to_hydrogen_error, None);
        }
    }

    #[test]
    fn missing_error_only_drops_error() {
        let table = AbundanceTable::new(vec![row(8, "O", Some(8.69), None)]);
        let out = transform_abundances(&table);
        let ratio = out[0].ratio_to_hydrogen.unwrap();
        assert_relative_eq!(ratio, 4.897_788e-4, max_relative = 1e-6);
        assert_eq!(out[0].ratio_to_hydrogen_error, None);
    }
}
