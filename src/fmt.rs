use std::fmt::{Debug, Display, Formatter};

use crate::quantity::time::Hours;

/// Fraction displayed as a percentage.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Human-readable duration: `X h Y min (~H h)`, plus days for anything over a day.
pub struct FormattedDuration(pub Hours);

impl Display for FormattedDuration {
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_infinite() {
            return write!(f, "∞");
        }
        let total_hours = self.0.get();
        let mut hours = total_hours.trunc() as u64;
        let mut minutes = ((total_hours - total_hours.trunc()) * 60.0).round() as u64;
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }
        write!(f, "{hours} h {minutes} min (~{total_hours:.2} h)")?;
        if self.0 >= Hours::ONE_DAY {
            write!(f, " (~{:.2} days)", self.0.to_days())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(FormattedPercentage(0.123_45).to_string(), "12.3%");
    }

    #[test]
    fn test_short_duration() {
        assert_eq!(FormattedDuration(Hours::new(1.5)).to_string(), "1 h 30 min (~1.50 h)");
    }

    #[test]
    fn test_minutes_carry_over() {
        assert_eq!(FormattedDuration(Hours::new(2.999)).to_string(), "3 h 0 min (~3.00 h)");
    }

    #[test]
    fn test_long_duration() {
        assert_eq!(
            FormattedDuration(Hours::new(48.25)).to_string(),
            "48 h 15 min (~48.25 h) (~2.01 days)"
        );
    }

    #[test]
    fn test_infinite_duration() {
        assert_eq!(FormattedDuration(Hours::INFINITY).to_string(), "∞");
    }
}
