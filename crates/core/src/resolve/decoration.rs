use super::{Candidate, Declarations, ResolvedProperty, SIBLINGS, lookup, plain};
use crate::{tables, units};

const BACKGROUND_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

const BACKGROUND_REPEATS: &[(&str, &str)] = &[
    ("repeat", "repeat"),
    ("no-repeat", "no-repeat"),
    ("repeat-x", "repeat-x"),
    ("repeat-y", "repeat-y"),
    ("repeat-round", "round"),
    ("repeat-space", "space"),
];

pub(super) fn background(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    match token {
        "fixed" | "local" | "scroll" => return plain("background-attachment", token),
        "auto" | "cover" | "contain" => return plain("background-size", token),
        _ => {}
    }
    if BACKGROUND_POSITIONS.contains(&token) {
        return plain("background-position", token.replace('-', " "));
    }
    if let Some(repeat) = lookup(BACKGROUND_REPEATS, token) {
        return plain("background-repeat", repeat);
    }
    plain("background-color", tables::color(token)?)
}

fn border_width(token: &str) -> Option<String> {
    match token {
        "0" => Some("0".to_string()),
        "2" | "4" | "8" => Some(format!("{}px", token)),
        _ => None,
    }
}

fn border_side(side: &str) -> Option<&'static str> {
    match side {
        "t" => Some("border-top-width"),
        "r" => Some("border-right-width"),
        "b" => Some("border-bottom-width"),
        "l" => Some("border-left-width"),
        _ => None,
    }
}

pub(super) fn border(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let Some(token) = candidate.token else {
        return plain("border-width", "1px");
    };
    if let Some(width) = border_width(token) {
        return plain("border-width", width);
    }
    if let Some(property) = border_side(token) {
        return plain(property, "1px");
    }
    if let Some((side, width)) = token.split_once('-') {
        if let Some(property) = border_side(side) {
            return plain(property, border_width(width)?);
        }
    }
    match token {
        "solid" | "dashed" | "dotted" | "double" | "none" => plain("border-style", token),
        "collapse" | "separate" => plain("border-collapse", token),
        _ => plain("border-color", tables::color(token)?),
    }
}

const RADII: &[(&str, &str)] = &[
    ("none", "0"),
    ("sm", "0.125rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("full", "9999px"),
];

const DEFAULT_RADIUS: &str = "0.25rem";

fn radius_corners(side: &str) -> Option<&'static [&'static str]> {
    let corners: &'static [&'static str] = match side {
        "t" => &["top-left", "top-right"],
        "r" => &["top-right", "bottom-right"],
        "b" => &["bottom-right", "bottom-left"],
        "l" => &["top-left", "bottom-left"],
        "tl" => &["top-left"],
        "tr" => &["top-right"],
        "br" => &["bottom-right"],
        "bl" => &["bottom-left"],
        _ => return None,
    };
    Some(corners)
}

pub(super) fn rounded(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let Some(token) = candidate.token else {
        return plain("border-radius", DEFAULT_RADIUS);
    };
    if let Some(radius) = lookup(RADII, token) {
        return plain("border-radius", radius);
    }
    let (side, radius) = match token.split_once('-') {
        Some((side, size)) => (side, lookup(RADII, size)?),
        None => (token, DEFAULT_RADIUS),
    };
    Some(ResolvedProperty::Plain(
        radius_corners(side)?
            .iter()
            .map(|corner| (format!("border-{}-radius", corner), radius))
            .collect(),
    ))
}

/// Borders between children, built like `space-*`: widths land on every
/// child after the first and `--divide-*-reverse` flips the side.
pub(super) fn divide(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    let (axis, raw) = match token {
        "x" | "y" => (token, None),
        _ => match token.split_once('-') {
            Some((axis @ ("x" | "y"), raw)) => (axis, Some(raw)),
            _ => {
                let color = tables::color(token)?;
                return Some(ResolvedProperty::Compound(
                    Declarations::new().with("border-color", color),
                    SIBLINGS.to_string(),
                ));
            }
        },
    };

    let reverse = format!("--divide-{}-reverse", axis);
    if raw == Some("reverse") {
        return Some(ResolvedProperty::Compound(
            Declarations::new().with(reverse, "1"),
            SIBLINGS.to_string(),
        ));
    }

    let width = match raw {
        None => "1px".to_string(),
        Some(raw @ ("0" | "2" | "4" | "8")) => format!("{}px", raw),
        Some(_) => return None,
    };
    let leading = format!("calc({} * calc(1 - var({})))", width, reverse);
    let trailing = format!("calc({} * var({}))", width, reverse);
    let declarations = if axis == "y" {
        Declarations::new()
            .with(reverse.as_str(), "0")
            .with("border-top-width", leading)
            .with("border-bottom-width", trailing)
    } else {
        Declarations::new()
            .with(reverse.as_str(), "0")
            .with("border-right-width", trailing)
            .with("border-left-width", leading)
    };
    Some(ResolvedProperty::Compound(declarations, SIBLINGS.to_string()))
}

const SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    (
        "md",
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    ),
    ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)"),
    ("outline", "0 0 0 3px rgba(66, 153, 225, 0.5)"),
    ("none", "none"),
];

const DEFAULT_SHADOW: &str = "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)";

pub(super) fn shadow(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token {
        None => plain("box-shadow", DEFAULT_SHADOW),
        Some(token) => plain("box-shadow", lookup(SHADOWS, token)?),
    }
}

pub(super) fn opacity(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if !units::is_integer(token) {
        return None;
    }
    let percent = token.parse::<u32>().ok()?;
    if percent > 100 {
        return None;
    }
    plain("opacity", units::format_number(f64::from(percent) / 100.0))
}
