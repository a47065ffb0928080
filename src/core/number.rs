use crate::core::catalog::Catalog;
use crate::utils::error::{HelperError, Result};

const UNITS: [(i64, &str); 3] = [(1_000_000_000, "b"), (1_000_000, "m"), (1_000, "k")];

/// Abbreviates a count for display: `1500` → `"1.5k"`, `150000` → `"150k"`.
///
/// Values below a thousand are rendered unchanged.
pub fn small_count(value: i64, catalog: &Catalog) -> Result<String> {
    if value < 0 {
        return Err(HelperError::NegativeValue {
            field: "count".to_string(),
            value: value.to_string(),
        });
    }
    if value == 0 {
        return Ok("0".to_string());
    }

    for (divisor, unit) in UNITS {
        let quotient = value / divisor;
        let remainder = value % divisor;
        if quotient == 0 {
            continue;
        }
        let unit = catalog.gettext(unit);
        if quotient.to_string().len() > 2 || remainder == 0 {
            return Ok(format!("{}{}", quotient, unit));
        }
        return Ok(format!("{:.1}{}", value as f64 / divisor as f64, unit));
    }

    Ok(value.to_string())
}

pub fn num_digits(value: i64) -> usize {
    value.to_string().len()
}

/// Integer subtraction of two template values.
pub fn subtract(value: &str, amount: &str) -> Result<i64> {
    let parse = |raw: &str| {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| HelperError::InvalidNumber {
                value: raw.to_string(),
            })
    };
    Ok(parse(value)? - parse(amount)?)
}
