use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::MISSING_TOKEN;

// ---------------------------------------------------------------------------
// AbundanceRow – one row of Table 1
// ---------------------------------------------------------------------------

/// One element of the source table, in logarithmic notation
/// `X = log10(N_X / N_H) + 12`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbundanceRow {
    /// Accepts `26` as well as `26.0`; anything non-integral is rejected.
    #[serde(rename = "Z", deserialize_with = "whole_number")]
    pub atomic_number: u32,
    pub element: String,
    /// Photospheric abundance; `None` for elements without a measurement.
    #[serde(rename = "alpha_phot", deserialize_with = "sentinel_as_missing")]
    pub log_abundance: Option<f64>,
    #[serde(rename = "alpha_phot_err", deserialize_with = "sentinel_as_missing")]
    pub log_abundance_error: Option<f64>,
}

// ---------------------------------------------------------------------------
// AbundanceTable – the loaded table
// ---------------------------------------------------------------------------

/// Rows in file order. Atomic numbers are not required to be sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbundanceTable {
    pub rows: Vec<AbundanceRow>,
}

impl AbundanceTable {
    pub fn new(rows: Vec<AbundanceRow>) -> Self {
        AbundanceTable { rows }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AbundanceRow> {
        self.rows.iter()
    }
}

// ---------------------------------------------------------------------------
// TransformedRow – one row of the output table
// ---------------------------------------------------------------------------

/// Linear number density ratio `N_X / N_H` with its propagated error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedRow {
    #[serde(rename = "Z")]
    pub atomic_number: u32,
    pub element: String,
    #[serde(rename = "x_to_H", serialize_with = "missing_as_sentinel")]
    pub ratio_to_hydrogen: Option<f64>,
    #[serde(rename = "x_to_H_err", serialize_with = "missing_as_sentinel")]
    pub ratio_to_hydrogen_error: Option<f64>,
}

// ---------------------------------------------------------------------------
// ElementRatioResult – outcome of a ratio calculation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ElementRatioResult {
    /// `"numerator/denominator"`.
    pub label: String,
    pub ratio: f64,
    pub ratio_error: f64,
}

impl fmt::Display for ElementRatioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} +/- {}",
            self.label,
            two_decimals(self.ratio),
            two_decimals(self.ratio_error)
        )
    }
}

/// `{:.2}`, except NaN reads `nan` like `inf` does.
fn two_decimals(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}

// -- Sentinel (de)serialization helpers --

fn sentinel_as_missing<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if cell.is_empty() || cell == MISSING_TOKEN {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("'{cell}' is not a number")))
}

fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if let Ok(z) = cell.parse::<u32>() {
        return Ok(z);
    }
    match cell.parse::<f64>() {
        Ok(z) if z.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&z) => Ok(z as u32),
        _ => Err(serde::de::Error::custom(format!(
            "atomic number '{cell}' is not a whole number"
        ))),
    }
}

fn missing_as_sentinel<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_str(MISSING_TOKEN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_result_display_rounds_to_two_decimals() {
        let result = ElementRatioResult {
            label: "O/Fe".to_string(),
            ratio: 15.488_166,
            ratio_error: 2.204,
        };
        assert_eq!(result.to_string(), "O/Fe = 15.49 +/- 2.20");
    }

    #[test]
    fn tiny_ratios_display_as_zero() {
        let result = ElementRatioResult {
            label: "Fe/H".to_string(),
            ratio: 3.162e-5,
            ratio_error: 2.91e-6,
        };
        assert_eq!(result.to_string(), "Fe/H = 0.00 +/- 0.00");
    }

    #[test]
    fn undefined_ratios_display_in_lowercase() {
        let result = ElementRatioResult {
            label: "Fe/Tc".to_string(),
            ratio: f64::INFINITY,
            ratio_error: f64::NAN,
        };
        assert_eq!(result.to_string(), "Fe/Tc = inf +/- nan");
    }

    #[test]
    fn table_len_tracks_rows() {
        let table = AbundanceTable::new(vec![AbundanceRow {
            atomic_number: 1,
            element: "H".to_string(),
            log_abundance: Some(12.0),
            log_abundance_error: Some(0.0),
        }]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert!(AbundanceTable::default().is_empty());
    }
}
