//! Display formatting: en-US digit grouping and magnitude-based unit switching.

use pondforge_schemas::{environment::Measurement, units::LITERS_PER_M3};

/// Placeholder shown for values that cannot be computed yet.
pub const NOT_AVAILABLE: &str = "—";

/// Formats with digit grouping and exactly `decimals` fraction digits.
/// Rounding follows std's `{:.N}`: the exact binary value is rounded to
/// nearest with ties to even, so `2.675` (stored just below) gives `2.67`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats with digit grouping and up to two fraction digits, trimming
/// trailing zeros (`1234.5` -> `"1,234.5"`, `14.0` -> `"14"`).
pub fn format_number(value: f64) -> String {
    let fixed = format_fixed(value, 2);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format_fixed(value, decimals),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Picks g, kg or t for a mass given in grams.
pub fn mass_from_grams(grams: f64) -> Measurement<f64> {
    if grams < 1000.0 {
        Measurement::new(grams, "g")
    } else if grams < 1_000_000.0 {
        Measurement::new(grams / 1000.0, "kg")
    } else {
        Measurement::new(grams / 1_000_000.0, "t")
    }
}

/// Picks L or m³ for a volume given in litres.
pub fn volume_from_liters(liters: f64) -> Measurement<f64> {
    if liters < LITERS_PER_M3 {
        Measurement::new(liters, "L")
    } else {
        Measurement::new(liters / LITERS_PER_M3, "m³")
    }
}

pub fn format_measurement(measurement: &Measurement<f64>, decimals: usize) -> String {
    format!("{} {}", format_fixed(measurement.value, decimals), measurement.unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_fixed(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_fixed(999.0, 0), "999");
        assert_eq!(format_fixed(2.675, 2), "2.67");
        assert_eq!(format_fixed(1000.0, 0), "1,000");
        assert_eq!(format_fixed(-2500.5, 1), "-2,500.5");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
    }

    #[test]
    fn number_format_trims_trailing_zeros() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(8.376), "8.38");
    }

    #[test]
    fn mass_switches_units_by_magnitude() {
        assert_eq!(mass_from_grams(800.0), Measurement::new(800.0, "g"));
        assert_eq!(mass_from_grams(2500.0), Measurement::new(2.5, "kg"));
        assert_eq!(mass_from_grams(3_000_000.0), Measurement::new(3.0, "t"));
    }

    #[test]
    fn volume_switches_to_cubic_meters() {
        assert_eq!(volume_from_liters(999.0).unit, "L");
        assert_eq!(volume_from_liters(7500.0), Measurement::new(7.5, "m³"));
        assert_eq!(format_measurement(&volume_from_liters(7500.0), 1), "7.5 m³");
    }

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(format_optional(None, 2), "—");
        assert_eq!(format_optional(Some(0.0), 1), "0.0");
    }
}
