//! Resistor catalogs: the purchasable values available to the search.
//!
//! A [`Catalog`] is an ordered, immutable list of resistance values in ohms.
//! The order matters: the search enumerates triples in catalog order and
//! breaks score ties in favor of the earliest triple, so two catalogs with
//! the same values in a different order can report different (equally good)
//! winners.

use std::fs;
use std::path::Path;

use crate::error::{Result, VoltfitError};

/// The standard E-series values stocked for this project, in ohms.
///
/// A subset of the E12/E24 series between 470 and 10k, matching what is
/// actually in the parts drawer.
const E_SERIES: [f64; 20] = [
    470.0, 510.0, 560.0, 680.0, 820.0, 1000.0, 1200.0, 1500.0, 1800.0, 2200.0, 2700.0, 3000.0,
    3300.0, 3900.0, 4700.0, 5100.0, 5600.0, 6800.0, 8200.0, 10000.0,
];

/// An ordered set of allowed resistance values, immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    values: Vec<f64>,
}

impl Catalog {
    /// The built-in catalog of 20 standard E-series values (470 to 10k).
    pub fn e_series() -> Self {
        Self {
            values: E_SERIES.to_vec(),
        }
    }

    /// Build a catalog from explicit values, preserving their order.
    ///
    /// Rejects empty catalogs and any value that is not strictly positive;
    /// the transfer function divides by every resistance.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(VoltfitError::EmptyCatalog);
        }
        for &value in &values {
            if !(value > 0.0) {
                return Err(VoltfitError::NonPositiveResistance { value });
            }
        }
        Ok(Self { values })
    }

    /// Parse a catalog from text: one value per line, `#` comments and
    /// blank lines ignored.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut values = Vec::new();
        for line in text.lines() {
            let line = match line.split_once('#') {
                Some((before, _)) => before.trim(),
                None => line.trim(),
            };
            if line.is_empty() {
                continue;
            }
            values.push(parse_ohms(line)?);
        }
        Self::from_values(values)
    }

    /// Load a catalog from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| VoltfitError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(&text)
    }

    /// The values in catalog order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the catalog.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the catalog is empty (never true for a validated catalog).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the values in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// Parse a resistance value with an optional engineering suffix.
///
/// Accepts plain numbers (`470`, `8.2e3`) and suffixed values (`10k`,
/// `4.7k`, `1M`). Suffixes: p, n, u/µ, m, k/K, M, G.
pub fn parse_ohms(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(VoltfitError::invalid_value(text, "empty value"));
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&text[..text.len() - last.len_utf8()], mult)
            } else {
                (text, 1.0)
            }
        }
        None => (text, 1.0),
    };

    num_str
        .parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|_| VoltfitError::invalid_value(text, "not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_ohms_suffixes() {
        assert_relative_eq!(parse_ohms("10k").unwrap(), 10_000.0);
        assert_relative_eq!(parse_ohms("4.7k").unwrap(), 4_700.0);
        assert_relative_eq!(parse_ohms("1M").unwrap(), 1_000_000.0);
        assert_relative_eq!(parse_ohms("470").unwrap(), 470.0);
        assert_relative_eq!(parse_ohms("8.2e3").unwrap(), 8_200.0);
    }

    #[test]
    fn test_parse_ohms_rejects_garbage() {
        assert!(parse_ohms("").is_err());
        assert!(parse_ohms("abc").is_err());
        assert!(parse_ohms("10x").is_err());
    }

    #[test]
    fn test_e_series_catalog() {
        let catalog = Catalog::e_series();
        assert_eq!(catalog.len(), 20);
        assert_relative_eq!(catalog.values()[0], 470.0);
        assert_relative_eq!(catalog.values()[19], 10_000.0);
    }

    #[test]
    fn test_from_values_validation() {
        assert!(matches!(
            Catalog::from_values(vec![]),
            Err(VoltfitError::EmptyCatalog)
        ));
        assert!(matches!(
            Catalog::from_values(vec![1000.0, 0.0]),
            Err(VoltfitError::NonPositiveResistance { .. })
        ));
        assert!(matches!(
            Catalog::from_values(vec![-470.0]),
            Err(VoltfitError::NonPositiveResistance { .. })
        ));
        assert!(Catalog::from_values(vec![1000.0]).is_ok());
    }

    #[test]
    fn test_from_text() {
        let catalog = Catalog::from_text("# parts drawer\n470\n1k\n\n8.2k # spares\n").unwrap();
        assert_eq!(catalog.values(), &[470.0, 1_000.0, 8_200.0]);
    }

    #[test]
    fn test_from_text_bad_line() {
        assert!(Catalog::from_text("470\nnope\n").is_err());
    }
}
