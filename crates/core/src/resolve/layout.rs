use super::{Candidate, Declarations, ResolvedProperty, lookup, plain, same_value};
use crate::units;

pub(super) fn box_sizing(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "border" => plain("box-sizing", "border-box"),
        "content" => plain("box-sizing", "content-box"),
        _ => None,
    }
}

const INLINE_DISPLAYS: &[(&str, &str)] = &[
    ("block", "inline-block"),
    ("flex", "inline-flex"),
    ("grid", "inline-grid"),
    ("table", "inline-table"),
];

const TABLE_DISPLAYS: &[(&str, &str)] = &[
    ("caption", "table-caption"),
    ("cell", "table-cell"),
    ("column", "table-column"),
    ("column-group", "table-column-group"),
    ("footer-group", "table-footer-group"),
    ("header-group", "table-header-group"),
    ("row-group", "table-row-group"),
    ("row", "table-row"),
];

pub(super) fn display(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let value = match (candidate.identifier, candidate.token) {
        ("block", None) => "block",
        ("inline", None) => "inline",
        ("inline", Some(token)) => lookup(INLINE_DISPLAYS, token)?,
        ("table", None) => "table",
        ("table", Some(layout @ ("auto" | "fixed"))) => {
            return plain("table-layout", layout);
        }
        ("table", Some(token)) => lookup(TABLE_DISPLAYS, token)?,
        ("flow", Some("root")) => "flow-root",
        ("contents", None) => "contents",
        ("hidden", None) => "none",
        _ => return None,
    };
    plain("display", value)
}

pub(super) fn float(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        side @ ("right" | "left" | "none") => plain("float", side),
        _ => None,
    }
}

pub(super) fn clearfix(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token.is_some() {
        return None;
    }
    Some(ResolvedProperty::Compound(
        Declarations::new()
            .with("content", "\"\"")
            .with("display", "table")
            .with("clear", "both"),
        ":after".to_string(),
    ))
}

pub(super) fn clear(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        side @ ("left" | "right" | "both" | "none") => plain("clear", side),
        _ => None,
    }
}

/// `object-*` is `object-fit` for fit keywords and `object-position`
/// otherwise.
pub(super) fn object(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        fit @ ("contain" | "cover" | "fill" | "none" | "scale-down") => plain("object-fit", fit),
        position @ ("bottom" | "center" | "left" | "left-bottom" | "left-top" | "right"
        | "right-bottom" | "right-top" | "top") => {
            plain("object-position", position.replace('-', " "))
        }
        _ => None,
    }
}

pub(super) fn overflow(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    let (property, value) = match token.split_once('-') {
        Some(("x", value)) => ("overflow-x", value),
        Some(("y", value)) => ("overflow-y", value),
        _ => ("overflow", token),
    };
    match value {
        "auto" | "hidden" | "visible" | "scroll" => plain(property, value),
        _ => None,
    }
}

pub(super) fn scrolling(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        value @ ("touch" | "auto") => plain("-webkit-overflow-scrolling", value),
        _ => None,
    }
}

pub(super) fn overscroll(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    let (property, value) = match token.split_once('-') {
        Some(("x", value)) => ("overscroll-behavior-x", value),
        Some(("y", value)) => ("overscroll-behavior-y", value),
        _ => ("overscroll-behavior", token),
    };
    match value {
        "auto" | "contain" | "none" => plain(property, value),
        _ => None,
    }
}

pub(super) fn position(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token.is_some() {
        return None;
    }
    if candidate.identifier == "sticky" {
        return Some(ResolvedProperty::Plain(
            Declarations::new()
                .with("position", "-webkit-sticky")
                .with("position", "sticky"),
        ));
    }
    plain("position", candidate.identifier)
}

/// Offsets only ever resolve to `0` or `auto`: any token containing a `0`
/// is zero, everything else is `auto`.
pub(super) fn inset(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    let (properties, raw): (&[&str], &str) = match candidate.identifier {
        "inset" => match token.split_once('-') {
            Some(("x", raw)) => (&["right", "left"], raw),
            Some(("y", raw)) => (&["top", "bottom"], raw),
            _ => (&["top", "right", "bottom", "left"], token),
        },
        "top" => (&["top"], token),
        "right" => (&["right"], token),
        "bottom" => (&["bottom"], token),
        "left" => (&["left"], token),
        _ => return None,
    };
    let value = if raw.contains('0') { "0" } else { "auto" };
    let value = units::signed(value.to_string(), candidate.negative);
    same_value(
        properties.iter().map(|property| property.to_string()).collect(),
        &value,
    )
}

pub(super) fn visibility(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match (candidate.identifier, candidate.token) {
        ("visible", None) => plain("visibility", "visible"),
        ("invisible", None) => plain("visibility", "hidden"),
        _ => None,
    }
}

pub(super) fn z_index(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "auto" => plain("z-index", "auto"),
        value if units::is_integer(value) => plain(
            "z-index",
            units::signed(value.to_string(), candidate.negative),
        ),
        _ => None,
    }
}
