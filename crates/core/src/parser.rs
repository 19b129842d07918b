//! Class-name parsing: modifier prefixes, nesting scope and base dispatch.

use log::{debug, warn};

use crate::resolve::{self, Candidate, ResolvedProperty};
use crate::tables::{MediaQuery, Modifier};
use crate::tree::{Layout, Rule, Sheet};

const SEPARATOR: char = ':';

/// A class name split into its modifiers and base token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassName<'a> {
    /// Media scopes to descend into, outermost first.
    pub media: Vec<&'static MediaQuery>,
    pub prefix: String,
    pub suffix: String,
    pub base: &'a str,
}

impl<'a> ClassName<'a> {
    /// Splits `class_name` at every `:`. Repeated modifiers are ignored and
    /// unknown ones are reported and dropped.
    pub fn parse(class_name: &'a str) -> Self {
        let mut parsed = ClassName::default();
        let mut consumed: Vec<&str> = Vec::new();
        let mut rest = class_name;

        while let Some((modifier, remainder)) = rest.split_once(SEPARATOR) {
            rest = remainder;
            if consumed.contains(&modifier) {
                continue;
            }
            consumed.push(modifier);

            match Modifier::lookup(modifier) {
                Some(Modifier::PseudoClass(pseudo)) => {
                    parsed.prefix.push_str(pseudo.prefix);
                    parsed.suffix.push_str(pseudo.suffix);
                }
                Some(Modifier::MediaQuery(query)) => parsed.media.push(query),
                None => warn!(
                    "unknown modifier `{}` in class `{}`",
                    modifier, class_name
                ),
            }
        }

        parsed.base = rest;
        parsed
    }
}

/// Escapes the characters of a class name that are not valid unescaped in
/// a class selector.
pub fn escape_class(class_name: &str) -> String {
    let mut escaped = String::with_capacity(class_name.len() + 4);
    for ch in class_name.chars() {
        match ch {
            ':' | '/' | '.' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Parses one class name and records its rule in `sheet`.
pub(crate) fn compile_class(sheet: &mut Sheet, class_name: &str, layout: Layout) {
    if !sheet.seen.insert(class_name.to_string()) {
        return;
    }

    let parsed = ClassName::parse(class_name);
    let mut scope = &mut sheet.tree;
    for query in &parsed.media {
        scope = scope.scope_mut(query, layout);
    }

    let candidate = Candidate::parse(parsed.base);
    if candidate.identifier == "container" {
        debug!("deferring container class `{}`", class_name);
        sheet.additions.insert(class_name.to_string());
        return;
    }

    let (declarations, compound) = match resolve::resolve(&candidate) {
        ResolvedProperty::Plain(declarations) => (declarations, String::new()),
        ResolvedProperty::Compound(declarations, compound) => (declarations, compound),
        ResolvedProperty::Unresolved => {
            warn!("no utility matches class `{}`", class_name);
            return;
        }
    };

    let selector = class_selector(&parsed, class_name, &compound);
    let level = scope.level();
    scope.insert(
        class_name,
        Rule::leaf(&selector, &declarations, level, layout),
    );
}

fn class_selector(parsed: &ClassName<'_>, class_name: &str, compound: &str) -> String {
    format!(
        "{}.{}{}{}",
        parsed.prefix,
        escape_class(class_name),
        parsed.suffix,
        compound
    )
}

#[cfg(test)]
mod tests {
    use super::{ClassName, compile_class, escape_class};
    use crate::tree::{Body, Layout, Sheet};

    #[test]
    fn escapes_separators_slashes_and_dots() {
        assert_eq!(escape_class("sm:m-4"), "sm\\:m-4");
        assert_eq!(escape_class("w-1/2"), "w-1\\/2");
        assert_eq!(escape_class("p-0.5"), "p-0\\.5");
        assert_eq!(escape_class("mt-4"), "mt-4");
    }

    #[test]
    fn collects_affixes_and_scopes_in_order() {
        let parsed = ClassName::parse("md:dark:group-hover:focus:text-red-500");
        let names: Vec<_> = parsed.media.iter().map(|query| query.name).collect();
        assert_eq!(names, ["md", "dark"]);
        assert_eq!(parsed.prefix, ".group:hover ");
        assert_eq!(parsed.suffix, ":focus");
        assert_eq!(parsed.base, "text-red-500");
    }

    #[test]
    fn drops_repeated_and_unknown_modifiers() {
        let parsed = ClassName::parse("hover:hover:tablet:p-4");
        assert_eq!(parsed.suffix, ":hover");
        assert!(parsed.media.is_empty());
        assert_eq!(parsed.base, "p-4");

        let parsed = ClassName::parse("sm:sm:m-2");
        assert_eq!(parsed.media.len(), 1);
    }

    #[test]
    fn compiles_into_the_innermost_scope() {
        let layout = Layout::new(false);
        let mut sheet = Sheet::default();
        compile_class(&mut sheet, "sm:hover:p-4", layout);

        let scope = match &sheet.tree().get("sm").expect("sm scope").body {
            Body::Scope(scope) => scope,
            Body::Declarations(_) => panic!("sm should be a scope"),
        };
        let rule = scope.get("sm:hover:p-4").expect("rule in sm scope");
        assert_eq!(rule.preamble, "  .sm\\:hover\\:p-4:hover {\n");
        assert_eq!(
            rule.body,
            Body::Declarations("    padding: 1rem;\n".to_string())
        );
        assert_eq!(rule.postamble, "  }\n");
    }

    #[test]
    fn defers_container_classes() {
        let layout = Layout::new(false);
        let mut sheet = Sheet::default();
        compile_class(&mut sheet, "container", layout);
        compile_class(&mut sheet, "md:container", layout);
        compile_class(&mut sheet, "container", layout);

        let additions: Vec<_> = sheet.additions().collect();
        assert_eq!(additions, ["container", "md:container"]);
        assert!(sheet.tree().get("container").is_none());
    }

    #[test]
    fn unresolved_classes_produce_no_rule() {
        let layout = Layout::new(false);
        let mut sheet = Sheet::default();
        compile_class(&mut sheet, "bogus-utility", layout);
        compile_class(&mut sheet, "hover:", layout);
        assert!(sheet.tree().is_empty());
    }
}
