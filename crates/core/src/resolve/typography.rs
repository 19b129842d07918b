use super::{Candidate, Declarations, ResolvedProperty, lookup, plain};
use crate::{tables, units};

const FONT_SIZES: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "4rem"),
];

const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify"];

/// `text-*` is a font size, an alignment or a color, tried in that order.
pub(super) fn text(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if let Some(size) = lookup(FONT_SIZES, token) {
        return plain("font-size", size);
    }
    if TEXT_ALIGNS.contains(&token) {
        return plain("text-align", token);
    }
    plain("color", tables::color(token)?)
}

const FONT_WEIGHTS: &[(&str, &str)] = &[
    ("hairline", "100"),
    ("thin", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

const FONT_FAMILIES: &[(&str, &str)] = &[
    (
        "sans",
        "system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, \"Noto Sans\", sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\"",
    ),
    (
        "serif",
        "Georgia, Cambria, \"Times New Roman\", Times, serif",
    ),
    (
        "mono",
        "Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace",
    ),
];

pub(super) fn font(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if let Some(weight) = lookup(FONT_WEIGHTS, token) {
        return plain("font-weight", weight);
    }
    plain("font-family", lookup(FONT_FAMILIES, token)?)
}

pub(super) fn italic(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token {
        None => plain("font-style", "italic"),
        Some(_) => None,
    }
}

/// `not-italic` and `not-sr-only`.
pub(super) fn negated(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "italic" => plain("font-style", "normal"),
        "sr-only" => Some(ResolvedProperty::Plain(
            Declarations::new()
                .with("position", "static")
                .with("width", "auto")
                .with("height", "auto")
                .with("padding", "0")
                .with("margin", "0")
                .with("overflow", "visible")
                .with("clip", "auto")
                .with("white-space", "normal"),
        )),
        _ => None,
    }
}

pub(super) fn screen_reader(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token != Some("only") {
        return None;
    }
    Some(ResolvedProperty::Plain(
        Declarations::new()
            .with("position", "absolute")
            .with("width", "1px")
            .with("height", "1px")
            .with("padding", "0")
            .with("margin", "-1px")
            .with("overflow", "hidden")
            .with("clip", "rect(0, 0, 0, 0)")
            .with("white-space", "nowrap")
            .with("border-width", "0"),
    ))
}

pub(super) fn text_transform(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token.is_some() {
        return None;
    }
    plain("text-transform", candidate.identifier)
}

pub(super) fn normal_case(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "case" => plain("text-transform", "none"),
        _ => None,
    }
}

pub(super) fn underline(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token {
        None => plain("text-decoration", "underline"),
        Some(_) => None,
    }
}

pub(super) fn line_through(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "through" => plain("text-decoration", "line-through"),
        _ => None,
    }
}

pub(super) fn no_underline(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "underline" => plain("text-decoration", "none"),
        _ => None,
    }
}

const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

pub(super) fn leading(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let token = candidate.token?;
    if let Some(height) = lookup(LINE_HEIGHTS, token) {
        return plain("line-height", height);
    }
    if !units::is_integer(token) {
        return None;
    }
    plain("line-height", units::spacing(token, false)?)
}

const LETTER_SPACINGS: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

pub(super) fn tracking(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("letter-spacing", lookup(LETTER_SPACINGS, candidate.token?)?)
}

const WHITESPACES: &[(&str, &str)] = &[
    ("normal", "normal"),
    ("no-wrap", "nowrap"),
    ("pre", "pre"),
    ("pre-line", "pre-line"),
    ("pre-wrap", "pre-wrap"),
];

pub(super) fn whitespace(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("white-space", lookup(WHITESPACES, candidate.token?)?)
}

pub(super) fn word_break(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "normal" => Some(ResolvedProperty::Plain(
            Declarations::new()
                .with("word-break", "normal")
                .with("overflow-wrap", "normal"),
        )),
        "words" => plain("overflow-wrap", "break-word"),
        "all" => plain("word-break", "break-all"),
        _ => None,
    }
}

pub(super) fn truncate(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token.is_some() {
        return None;
    }
    Some(ResolvedProperty::Plain(
        Declarations::new()
            .with("overflow", "hidden")
            .with("text-overflow", "ellipsis")
            .with("white-space", "nowrap"),
    ))
}

pub(super) fn antialiased(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token.is_some() {
        return None;
    }
    Some(ResolvedProperty::Plain(
        Declarations::new()
            .with("-webkit-font-smoothing", "antialiased")
            .with("-moz-osx-font-smoothing", "grayscale"),
    ))
}

pub(super) fn subpixel(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    if candidate.token != Some("antialiased") {
        return None;
    }
    Some(ResolvedProperty::Plain(
        Declarations::new()
            .with("-webkit-font-smoothing", "auto")
            .with("-moz-osx-font-smoothing", "auto"),
    ))
}

pub(super) fn list(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        kind @ ("none" | "disc" | "decimal") => plain("list-style-type", kind),
        position @ ("inside" | "outside") => plain("list-style-position", position),
        _ => None,
    }
}

pub(super) fn placeholder(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let color = tables::color(candidate.token?)?;
    Some(ResolvedProperty::Compound(
        Declarations::new().with("color", color),
        "::placeholder".to_string(),
    ))
}
