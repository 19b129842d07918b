use super::{Candidate, Declarations, ResolvedProperty, lookup, plain};
use crate::units::{self, Axis};

// Translate and skew names carry a doubled hyphen before the axis; scale
// names do not.
const TRANSLATE_X: &str = "--transform-translate--x";
const TRANSLATE_Y: &str = "--transform-translate--y";
const ROTATE: &str = "--transform-rotate";
const SKEW_X: &str = "--transform-skew--x";
const SKEW_Y: &str = "--transform-skew--y";
const SCALE_X: &str = "--transform-scale-x";
const SCALE_Y: &str = "--transform-scale-y";

pub(super) fn transform(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token {
        None => {
            let composed = format!(
                "translateX(var({})) translateY(var({})) rotate(var({})) skewX(var({})) skewY(var({})) scaleX(var({})) scaleY(var({}))",
                TRANSLATE_X, TRANSLATE_Y, ROTATE, SKEW_X, SKEW_Y, SCALE_X, SCALE_Y
            );
            Some(ResolvedProperty::Plain(
                Declarations::new()
                    .with(TRANSLATE_X, "0")
                    .with(TRANSLATE_Y, "0")
                    .with(ROTATE, "0")
                    .with(SKEW_X, "0")
                    .with(SKEW_Y, "0")
                    .with(SCALE_X, "1")
                    .with(SCALE_Y, "1")
                    .with("transform", composed),
            ))
        }
        Some("none") => plain("transform", "none"),
        Some(_) => None,
    }
}

const ORIGINS: &[&str] = &[
    "center",
    "top",
    "top-right",
    "right",
    "bottom-right",
    "bottom",
    "bottom-left",
    "left",
    "top-left",
];

pub(super) fn origin(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if !ORIGINS.contains(&token) {
        return None;
    }
    plain("transform-origin", token.replace('-', " "))
}

fn percent_factor(token: &str) -> Option<String> {
    if !units::is_integer(token) {
        return None;
    }
    let percent = token.parse::<u32>().ok()?;
    Some(units::format_number(f64::from(percent) / 100.0))
}

pub(super) fn scale(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    let (properties, raw): (&[&str], &str) = match token.split_once('-') {
        Some(("x", raw)) => (&[SCALE_X], raw),
        Some(("y", raw)) => (&[SCALE_Y], raw),
        Some(_) => return None,
        None => (&[SCALE_X, SCALE_Y], token),
    };
    let factor = percent_factor(raw)?;
    Some(ResolvedProperty::Plain(
        properties
            .iter()
            .map(|property| (*property, factor.as_str()))
            .collect(),
    ))
}

fn degrees(token: &str, negative: bool) -> Option<String> {
    let value = units::number(token)?;
    if value == 0.0 {
        return Some("0".to_string());
    }
    Some(units::signed(
        format!("{}deg", units::format_number(value)),
        negative,
    ))
}

pub(super) fn rotate(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain(ROTATE, degrees(candidate.token?, candidate.negative)?)
}

pub(super) fn translate(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let (property, axis, raw) = match candidate.token?.split_once('-')? {
        ("x", raw) => (TRANSLATE_X, Axis::Width, raw),
        ("y", raw) => (TRANSLATE_Y, Axis::Height, raw),
        _ => return None,
    };
    if raw == "auto" || raw == "screen" {
        return None;
    }
    plain(property, units::length(raw, candidate.negative, axis)?)
}

pub(super) fn skew(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let (property, raw) = match candidate.token?.split_once('-')? {
        ("x", raw) => (SKEW_X, raw),
        ("y", raw) => (SKEW_Y, raw),
        _ => return None,
    };
    plain(property, degrees(raw, candidate.negative)?)
}

const TRANSITION_PROPERTIES: &[(&str, &str)] = &[
    ("none", "none"),
    ("all", "all"),
    ("colors", "background-color, border-color, color, fill, stroke"),
    ("opacity", "opacity"),
    ("shadow", "box-shadow"),
    ("transform", "transform"),
];

const DEFAULT_TRANSITION: &str =
    "background-color, border-color, color, fill, stroke, opacity, box-shadow, transform";

pub(super) fn transition(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token {
        None => plain("transition-property", DEFAULT_TRANSITION),
        Some(token) => plain("transition-property", lookup(TRANSITION_PROPERTIES, token)?),
    }
}

/// `duration-N` and `delay-N`, in milliseconds.
pub(super) fn timing(candidate: &Candidate<'_>, property: &str) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if !units::is_integer(token) {
        return None;
    }
    plain(property, format!("{}ms", token))
}

const EASINGS: &[(&str, &str)] = &[
    ("linear", "linear"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
];

pub(super) fn ease(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain(
        "transition-timing-function",
        lookup(EASINGS, candidate.token?)?,
    )
}
