
//! Rendering of the final numeric result.

/// Formats a result value. Whole numbers render with no decimal point
/// and no trailing zeros (`4.0` is `"4"`, and `-0.0` normalizes to
/// `"0"`); everything else uses the standard shortest round-trip
/// decimal rendering of `f64`.
pub fn format_value(value: f64) -> String {
  if value.is_finite() && value == value.trunc() && value.abs() < i64::MAX as f64 {
    (value as i64).to_string()
  } else {
    value.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_whole_numbers() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(4.0), "4");
    assert_eq!(format_value(-5.0), "-5");
    assert_eq!(format_value(1000000.0), "1000000");
  }

  #[test]
  fn test_fractional_numbers() {
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(-0.25), "-0.25");
    assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
  }

  #[test]
  fn test_negative_zero() {
    assert_eq!(format_value(-0.0), "0");
  }

  #[test]
  fn test_idempotent_on_whole_values() {
    let once = format_value(4.0);
    let twice = format_value(once.parse().unwrap());
    assert_eq!(once, twice);
  }
}
