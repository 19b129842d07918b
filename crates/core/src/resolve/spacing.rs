use super::{Candidate, Declarations, ResolvedProperty, SIBLINGS, edge_properties, same_value};
use crate::units;

/// Padding has no negative form; the sign is dropped.
pub(super) fn padding(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let edge = candidate.identifier.strip_prefix('p')?;
    let value = units::spacing(candidate.token?, false)?;
    same_value(edge_properties("padding", edge)?, &value)
}

pub(super) fn margin(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let edge = candidate.identifier.strip_prefix('m')?;
    let value = match candidate.token? {
        "auto" => "auto".to_string(),
        token => units::spacing(token, candidate.negative)?,
    };
    same_value(edge_properties("margin", edge)?, &value)
}

/// Gaps between children: the margin lands on every child after the first
/// and `--space-*-reverse` flips which side it is applied to.
pub(super) fn space(candidate: &Candidate<'_>) -> Option<ResolvedProperty> {
    let (axis, raw) = candidate.token?.split_once('-')?;
    if axis != "x" && axis != "y" {
        return None;
    }
    let reverse = format!("--space-{}-reverse", axis);
    if raw == "reverse" {
        return Some(ResolvedProperty::Compound(
            Declarations::new().with(reverse, "1"),
            SIBLINGS.to_string(),
        ));
    }

    let value = units::spacing(raw, candidate.negative)?;
    let leading = format!("calc({} * calc(1 - var({})))", value, reverse);
    let trailing = format!("calc({} * var({}))", value, reverse);
    let declarations = match axis {
        "y" => Declarations::new()
            .with(reverse.as_str(), "0")
            .with("margin-top", leading)
            .with("margin-bottom", trailing),
        "x" => Declarations::new()
            .with(reverse.as_str(), "0")
            .with("margin-right", trailing)
            .with("margin-left", leading),
        _ => return None,
    };
    Some(ResolvedProperty::Compound(declarations, SIBLINGS.to_string()))
}
