use super::{Candidate, Declarations, ResolvedProperty, lookup, plain};
use crate::units;

const FLEX_SHORTHANDS: &[(&str, &str)] = &[
    ("1", "1 1 0%"),
    ("auto", "1 1 auto"),
    ("initial", "0 1 auto"),
    ("none", "none"),
];

const FLEX_DIRECTIONS: &[(&str, &str)] = &[
    ("row", "row"),
    ("row-reverse", "row-reverse"),
    ("col", "column"),
    ("col-reverse", "column-reverse"),
];

const FLEX_WRAPS: &[(&str, &str)] = &[
    ("wrap", "wrap"),
    ("wrap-reverse", "wrap-reverse"),
    ("no-wrap", "nowrap"),
];

pub(super) fn flex(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let Some(token) = candidate.token else {
        return plain("display", "flex");
    };
    if let Some(direction) = lookup(FLEX_DIRECTIONS, token) {
        return plain("flex-direction", direction);
    }
    if let Some(wrap) = lookup(FLEX_WRAPS, token) {
        return plain("flex-wrap", wrap);
    }
    if let Some(shorthand) = lookup(FLEX_SHORTHANDS, token) {
        return plain("flex", shorthand);
    }
    match token {
        "grow" => plain("flex-grow", "1"),
        "grow-0" => plain("flex-grow", "0"),
        "shrink" => plain("flex-shrink", "1"),
        "shrink-0" => plain("flex-shrink", "0"),
        _ => None,
    }
}

const ALIGN_ITEMS: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("baseline", "baseline"),
    ("stretch", "stretch"),
];

const DISTRIBUTION: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
];

const ALIGN_SELF: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("stretch", "stretch"),
];

const JUSTIFY_ITEMS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("start", "start"),
    ("end", "end"),
    ("center", "center"),
    ("stretch", "stretch"),
];

pub(super) fn align_items(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("align-items", lookup(ALIGN_ITEMS, candidate.token?)?)
}

pub(super) fn align_content(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("align-content", lookup(DISTRIBUTION, candidate.token?)?)
}

pub(super) fn align_self(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("align-self", lookup(ALIGN_SELF, candidate.token?)?)
}

pub(super) fn justify(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if let Some(items) = token.strip_prefix("items-") {
        return plain("justify-items", lookup(JUSTIFY_ITEMS, items)?);
    }
    if let Some(own) = token.strip_prefix("self-") {
        return plain("justify-self", lookup(JUSTIFY_ITEMS, own)?);
    }
    plain("justify-content", lookup(DISTRIBUTION, token)?)
}

pub(super) fn order(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "first" => plain("order", "-9999"),
        "last" => plain("order", "9999"),
        "none" => plain("order", "0"),
        value if units::is_integer(value) => plain("order", value),
        _ => None,
    }
}

const GRID_FLOWS: &[(&str, &str)] = &[
    ("row", "row"),
    ("col", "column"),
    ("row-dense", "row dense"),
    ("col-dense", "column dense"),
];

/// `grid` alone is a display value; every other form carries a
/// `-`-delimited sub-token (`cols-3`, `flow-row`).
pub(super) fn grid(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let Some(token) = candidate.token else {
        return plain("display", "grid");
    };
    let (kind, value) = token.split_once('-')?;
    match kind {
        "cols" => plain("grid-template-columns", grid_template(value)?),
        "rows" => plain("grid-template-rows", grid_template(value)?),
        "flow" => plain("grid-auto-flow", lookup(GRID_FLOWS, value)?),
        _ => None,
    }
}

fn grid_template(value: &str) -> Option<String> {
    if value == "none" {
        return Some("none".to_string());
    }
    if !units::is_integer(value) {
        return None;
    }
    Some(format!("repeat({}, minmax(0, 1fr))", value))
}

/// `col-*` / `row-*` placement: `span-N`, `span-full`, `start-N`, `end-N`.
pub(super) fn grid_line(candidate: &Candidate<'_>, property: &str) -> Option<ResolvedProperty> {
    let (kind, value) = candidate.token?.split_once('-')?;
    match (kind, value) {
        ("span", "full") => plain(property, "1 / -1"),
        ("span", count) if units::is_integer(count) => {
            plain(property, format!("span {} / span {}", count, count))
        }
        ("start" | "end", "auto") => plain(&format!("{}-{}", property, kind), "auto"),
        ("start" | "end", line) if units::is_integer(line) => {
            plain(&format!("{}-{}", property, kind), line)
        }
        _ => None,
    }
}

/// Emits the legacy `grid-*gap` name first, then the standard one.
pub(super) fn gap(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    let (properties, raw) = match token.split_once('-') {
        Some(("x", raw)) => (["grid-column-gap", "column-gap"], raw),
        Some(("y", raw)) => (["grid-row-gap", "row-gap"], raw),
        _ => (["grid-gap", "gap"], token),
    };
    let value = units::spacing(raw, false)?;
    Some(ResolvedProperty::Plain(
        properties
            .iter()
            .map(|property| (*property, value.as_str()))
            .collect::<Declarations>(),
    ))
}
