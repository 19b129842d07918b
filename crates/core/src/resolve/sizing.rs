use super::{Candidate, ResolvedProperty, lookup, plain};
use crate::tables;
use crate::units::{self, Axis};

/// Width and height have no negative form; the sign is dropped.
pub(super) fn height(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("height", units::length(candidate.token?, false, Axis::Height)?)
}

pub(super) fn width(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    plain("width", units::length(candidate.token?, false, Axis::Width)?)
}

const MIN_HEIGHTS: &[(&str, &str)] = &[("0", "0"), ("full", "100%"), ("screen", "100vh")];

const MIN_WIDTHS: &[(&str, &str)] = &[("0", "0"), ("full", "100%")];

const MAX_HEIGHTS: &[(&str, &str)] = &[("full", "100%"), ("screen", "100vh")];

const MAX_WIDTHS: &[(&str, &str)] = &[
    ("none", "none"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("full", "100%"),
];

pub(super) fn min_size(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token?.split_once('-')? {
        ("h", token) => plain("min-height", lookup(MIN_HEIGHTS, token)?),
        ("w", token) => plain("min-width", lookup(MIN_WIDTHS, token)?),
        _ => None,
    }
}

pub(super) fn max_size(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    match candidate.token?.split_once('-')? {
        ("h", token) => plain("max-height", lookup(MAX_HEIGHTS, token)?),
        ("w", token) => {
            if let Some(screen) = token.strip_prefix("screen-") {
                let size = tables::media_query(screen)?.size?;
                return plain("max-width", size);
            }
            plain("max-width", lookup(MAX_WIDTHS, token)?)
        }
        _ => None,
    }
}
