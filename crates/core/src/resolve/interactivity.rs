use super::{Candidate, ResolvedProperty, plain};

pub(super) fn cursor(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        value @ ("auto" | "default" | "pointer" | "wait" | "text" | "move" | "not-allowed") => {
            plain("cursor", value)
        }
        _ => None,
    }
}

pub(super) fn select(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        value @ ("none" | "text" | "all" | "auto") => plain("user-select", value),
        _ => None,
    }
}

pub(super) fn pointer_events(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "events-none" => plain("pointer-events", "none"),
        "events-auto" => plain("pointer-events", "auto"),
        _ => None,
    }
}

pub(super) fn resize(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token {
        None => plain("resize", "both"),
        Some("none") => plain("resize", "none"),
        Some("y") => plain("resize", "vertical"),
        Some("x") => plain("resize", "horizontal"),
        Some(_) => None,
    }
}

pub(super) fn appearance(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "none" => plain("appearance", "none"),
        _ => None,
    }
}

pub(super) fn outline(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token? {
        "none" => plain("outline", "0"),
        _ => None,
    }
}
