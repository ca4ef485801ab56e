//! Lenient number parsing for the command line.

use crate::{
    prelude::*,
    quantity::{power::Milliwatts, voltage::Volts},
};

/// Readings below this are taken as volts, otherwise as millivolts.
const MAX_VOLTS_READING: f64 = 20.0;

/// Parse a decimal number, accepting a decimal comma and digit-group spaces: `1 234,5`.
pub fn decimal(raw: &str) -> Result<f64> {
    let normalized: String = raw
        .chars()
        .filter(|char_| !char_.is_whitespace())
        .map(|char_| if char_ == ',' { '.' } else { char_ })
        .collect();
    let value: f64 = normalized.parse().with_context(|| format!("`{raw}` is not a number"))?;
    ensure!(value.is_finite(), "`{raw}` is not a finite number");
    Ok(value)
}

/// Whole non-negative number, `14` or `14,0` alike.
#[expect(clippy::cast_possible_truncation)]
#[expect(clippy::cast_sign_loss)]
pub fn count(raw: &str) -> Result<u32> {
    let value = decimal(raw)?;
    ensure!(
        value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value),
        "`{raw}` is not a whole non-negative number",
    );
    Ok(value as u32)
}

pub fn quantity<T: From<f64>>(raw: &str) -> Result<T> {
    decimal(raw).map(T::from)
}

pub fn watts(raw: &str) -> Result<Milliwatts> {
    decimal(raw).map(Milliwatts::from_watts)
}

/// Percentage converted into a `0.0..=1.0` fraction.
pub fn percent(raw: &str) -> Result<f64> {
    decimal(raw).map(|percent| percent / 100.0)
}

/// Voltage in either volts or millivolts, guessed from the magnitude.
pub fn voltage(raw: &str) -> Result<Volts> {
    let value = decimal(raw)?;
    if value < MAX_VOLTS_READING {
        debug!(value, "treating the reading as volts");
        Ok(Volts::new(value))
    } else {
        Ok(Volts::from_millivolts(value))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_decimal() {
        assert_abs_diff_eq!(decimal("0.162").unwrap(), 0.162);
        assert_abs_diff_eq!(decimal("0,15").unwrap(), 0.15);
        assert_abs_diff_eq!(decimal(" 1 234,5 ").unwrap(), 1234.5);
        assert!(decimal("abc").is_err());
        assert!(decimal("").is_err());
        assert!(decimal("NaN").is_err());
        assert!(decimal("inf").is_err());
        assert!(decimal("-infinity").is_err());
    }

    #[test]
    fn test_count() {
        assert_eq!(count("14").unwrap(), 14);
        assert_eq!(count(" 14,0 ").unwrap(), 14);
        assert_eq!(count("1 000").unwrap(), 1000);
        assert!(count("1,5").is_err());
        assert!(count("-3").is_err());
    }

    #[test]
    fn test_percent() {
        assert_abs_diff_eq!(percent("20").unwrap(), 0.2);
        assert_abs_diff_eq!(percent("2,5").unwrap(), 0.025);
    }

    #[test]
    fn test_watts() {
        assert_abs_diff_eq!(watts("0,15").unwrap().get(), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_voltage() {
        assert_abs_diff_eq!(voltage("4.17").unwrap().get(), 4.17);
        assert_abs_diff_eq!(voltage("4170").unwrap().get(), 4.17, epsilon = 1e-12);
        assert_abs_diff_eq!(voltage("3600").unwrap().to_millivolts(), 3600.0, epsilon = 1e-9);
        assert!(voltage("NaN").is_err());
    }
}
