//! Magnitude formatting for dashboard metric displays.

/// Unit tiers in scaling order: base units, thousands, millions.
const UNITS: [&str; 3] = ["", "mil", "milhões"];

/// Render a non-negative value under the smallest sufficient unit.
///
/// While the value is at least 1000 and a further tier remains, it is divided
/// by 1000 and the next label applies. Once the ladder is exhausted the final
/// label is used regardless of remaining magnitude, so a value in the
/// trillions still prints under "milhões" with a numeral of 1000 or more.
///
/// The output is `"{prefix} {value:.2} {unit}"`. Prefix and unit may be
/// empty strings; the surrounding spaces appear either way.
///
/// # Example
///
/// ```
/// use labdados_sdk::format_magnitude;
/// assert_eq!(format_magnitude(1500.0, "R$"), "R$ 1.50 mil");
/// ```
pub fn format_magnitude(value: f64, prefix: &str) -> String {
    let mut value = value;
    for unit in UNITS {
        if value < 1000.0 {
            return format!("{} {:.2} {}", prefix, value, unit);
        }
        value /= 1000.0;
    }
    format!("{} {:.2} {}", prefix, value, UNITS[UNITS.len() - 1])
}
