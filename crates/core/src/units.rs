//! Raw value tokens to CSS literals on the `0.25rem` spacing scale.

/// Which viewport dimension `screen` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

const SCALE_STEP_REM: f64 = 0.25;

/// Resolves a sizing token (`4`, `px`, `full`, `screen`, `1/2`, `auto`).
///
/// `negative` prefixes the value with `-`; callers whose property has no
/// negative form pass `false`. Zero and `auto` never carry a sign.
pub fn length(token: &str, negative: bool, axis: Axis) -> Option<String> {
    let value = match token {
        "0" => return Some("0".to_string()),
        "auto" => return Some("auto".to_string()),
        "px" => "1px".to_string(),
        "full" => "100%".to_string(),
        "screen" => match axis {
            Axis::Width => "100vw".to_string(),
            Axis::Height => "100vh".to_string(),
        },
        _ => {
            if let Some(percent) = fraction(token) {
                format!("{}%", format_number(percent))
            } else {
                let steps = number(token)?;
                if steps == 0.0 {
                    return Some("0".to_string());
                }
                format!("{}rem", format_number(steps * SCALE_STEP_REM))
            }
        }
    };

    Some(signed(value, negative))
}

/// Spacing tokens: the scale plus `px`. Viewport and percentage keywords
/// are rejected.
pub fn spacing(token: &str, negative: bool) -> Option<String> {
    match token {
        "auto" | "full" | "screen" => None,
        _ if fraction(token).is_some() => None,
        _ => length(token, negative, Axis::Width),
    }
}

/// Parses `n/d` into a percentage, computed as `(n / d) * 100`.
pub fn fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    if !is_integer(numerator) || !is_integer(denominator) {
        return None;
    }
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some((numerator / denominator) * 100.0)
}

/// Parses an unsigned decimal token such as `4` or `2.5`.
pub fn number(token: &str) -> Option<f64> {
    if token.is_empty() || token.starts_with('.') || token.ends_with('.') {
        return None;
    }
    let mut seen_dot = false;
    for ch in token.chars() {
        if ch == '.' {
            if seen_dot {
                return None;
            }
            seen_dot = true;
            continue;
        }
        if !ch.is_ascii_digit() {
            return None;
        }
    }
    token.parse::<f64>().ok()
}

pub fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

/// Shortest decimal that round-trips, without trailing zeros.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

pub fn signed(value: String, negative: bool) -> String {
    if negative && value != "0" && value != "auto" {
        format!("-{}", value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, format_number, fraction, length, spacing};

    #[test]
    fn scales_numeric_tokens_by_quarter_rem() {
        assert_eq!(length("4", false, Axis::Width).as_deref(), Some("1rem"));
        assert_eq!(length("2", false, Axis::Width).as_deref(), Some("0.5rem"));
        assert_eq!(length("11", false, Axis::Width).as_deref(), Some("2.75rem"));
        assert_eq!(length("0.5", false, Axis::Width).as_deref(), Some("0.125rem"));
        assert_eq!(length("64", false, Axis::Height).as_deref(), Some("16rem"));
    }

    #[test]
    fn resolves_keywords() {
        assert_eq!(length("0", true, Axis::Width).as_deref(), Some("0"));
        assert_eq!(length("px", false, Axis::Width).as_deref(), Some("1px"));
        assert_eq!(length("px", true, Axis::Width).as_deref(), Some("-1px"));
        assert_eq!(length("full", false, Axis::Width).as_deref(), Some("100%"));
        assert_eq!(length("auto", true, Axis::Width).as_deref(), Some("auto"));
        assert_eq!(length("screen", false, Axis::Width).as_deref(), Some("100vw"));
        assert_eq!(length("screen", false, Axis::Height).as_deref(), Some("100vh"));
    }

    #[test]
    fn resolves_fractions_as_percentages() {
        assert_eq!(length("4/5", false, Axis::Width).as_deref(), Some("80%"));
        assert_eq!(length("1/2", true, Axis::Width).as_deref(), Some("-50%"));
        assert_eq!(
            length("1/3", false, Axis::Width).as_deref(),
            Some("33.33333333333333%")
        );
        assert_eq!(fraction("1/0"), None);
        assert_eq!(fraction("a/2"), None);
    }

    #[test]
    fn negates_scaled_values() {
        assert_eq!(length("16", true, Axis::Width).as_deref(), Some("-4rem"));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(length("big", false, Axis::Width), None);
        assert_eq!(length("1.2.3", false, Axis::Width), None);
        assert_eq!(length("", false, Axis::Width), None);
        assert_eq!(spacing("full", false), None);
        assert_eq!(spacing("1/2", false), None);
        assert_eq!(spacing("auto", false), None);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.75), "0.75");
    }
}
