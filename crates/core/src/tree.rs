//! Nested rule trees and their rendering to stylesheet text.

use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

use crate::parser::escape_class;
use crate::resolve::Declarations;
use crate::tables::{self, MediaQuery};

const CONTAINER: &str = "container";

/// Whitespace policy. Minified output drops indentation and line breaks and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    minified: bool,
}

impl Layout {
    pub fn new(minified: bool) -> Self {
        Self { minified }
    }

    pub fn is_minified(&self) -> bool {
        self.minified
    }

    pub fn indent(&self, level: usize) -> String {
        if self.minified {
            String::new()
        } else {
            "  ".repeat(level)
        }
    }

    pub fn newline(&self) -> &'static str {
        if self.minified { "" } else { "\n" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Declarations(String),
    Scope(RuleTree),
}

/// One selector block or one `@media` block. `preamble` opens the construct
/// that `postamble` closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub preamble: String,
    pub body: Body,
    pub postamble: String,
}

impl Rule {
    pub fn leaf(
        selector: &str,
        declarations: &Declarations,
        level: usize,
        layout: Layout,
    ) -> Self {
        let indent = layout.indent(level);
        Self {
            preamble: format!("{}{} {{{}", indent, selector, layout.newline()),
            body: Body::Declarations(
                declarations.render(&layout.indent(level + 1), layout.newline()),
            ),
            postamble: format!("{}}}{}", indent, layout.newline()),
        }
    }

    fn scope(query: &MediaQuery, level: usize, layout: Layout) -> Self {
        let indent = layout.indent(level);
        Self {
            preamble: format!("{}{} {{{}", indent, query.at_rule(), layout.newline()),
            body: Body::Scope(RuleTree::nested(level + 1)),
            postamble: format!("{}}}{}", indent, layout.newline()),
        }
    }
}

/// Rules keyed by raw class name (or media-query name for scopes), in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTree {
    level: usize,
    rules: IndexMap<String, Rule>,
}

impl RuleTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn nested(level: usize) -> Self {
        Self {
            level,
            rules: IndexMap::new(),
        }
    }

    /// Nesting depth of the rules held by this tree.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Inserts `rule` unless `key` is already present. Returns whether the
    /// rule was inserted.
    pub fn insert(&mut self, key: &str, rule: Rule) -> bool {
        if self.rules.contains_key(key) {
            return false;
        }
        self.rules.insert(key.to_string(), rule);
        true
    }

    /// The child scope for `query`, created on first use.
    pub fn scope_mut(&mut self, query: &MediaQuery, layout: Layout) -> &mut RuleTree {
        let level = self.level;
        let rule = self
            .rules
            .entry(query.name.to_string())
            .or_insert_with(|| Rule::scope(query, level, layout));
        if let Body::Declarations(_) = rule.body {
            *rule = Rule::scope(query, level, layout);
        }
        match &mut rule.body {
            Body::Scope(tree) => tree,
            Body::Declarations(_) => unreachable!("scope rule installed above"),
        }
    }

    fn existing_scope_mut(&mut self, key: &str) -> Option<&mut RuleTree> {
        match &mut self.rules.get_mut(key)?.body {
            Body::Scope(tree) => Some(tree),
            Body::Declarations(_) => None,
        }
    }

    /// Moves media-query scopes after every other rule, at every depth,
    /// keeping relative order on both sides.
    fn hoist_media_queries(&mut self) {
        let rules = std::mem::take(&mut self.rules);
        let (media, plain): (Vec<_>, Vec<_>) = rules
            .into_iter()
            .partition(|(key, _)| tables::media_query(key).is_some());
        self.rules = plain.into_iter().chain(media).collect();

        for rule in self.rules.values_mut() {
            if let Body::Scope(tree) = &mut rule.body {
                tree.hoist_media_queries();
            }
        }
    }

    fn render_into(&self, out: &mut String) {
        for rule in self.rules.values() {
            match &rule.body {
                Body::Declarations(declarations) => {
                    out.push_str(&rule.preamble);
                    out.push_str(declarations);
                    out.push_str(&rule.postamble);
                }
                Body::Scope(tree) => {
                    let mut inner = String::new();
                    tree.render_into(&mut inner);
                    if inner.is_empty() {
                        continue;
                    }
                    out.push_str(&rule.preamble);
                    out.push_str(&inner);
                    out.push_str(&rule.postamble);
                }
            }
        }
    }
}

/// State of one output partition: its rules plus the class names whose
/// expansion waits until render time.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub(crate) tree: RuleTree,
    pub(crate) additions: IndexSet<String>,
    pub(crate) seen: HashSet<String>,
}

impl Sheet {
    pub fn tree(&self) -> &RuleTree {
        &self.tree
    }

    /// Class names recorded for deferred `container` expansion.
    pub fn additions(&self) -> impl Iterator<Item = &str> {
        self.additions.iter().map(String::as_str)
    }

    pub fn render(&self, layout: Layout) -> String {
        let mut tree = self.tree.clone();
        if !self.additions.is_empty() {
            expand_containers(&mut tree, &self.additions, layout);
        }
        tree.hoist_media_queries();

        let mut out = String::new();
        tree.render_into(&mut out);
        out
    }
}

/// Adds the shared `width: 100%` container rule, plus a `max-width` rule in
/// each breakpoint scope that other classes already opened.
fn expand_containers(tree: &mut RuleTree, names: &IndexSet<String>, layout: Layout) {
    let level = tree.level();
    tree.insert(
        CONTAINER,
        container_rule(
            names,
            &Declarations::new().with("width", "100%"),
            level,
            layout,
        ),
    );

    for (query, size) in tables::breakpoints() {
        let Some(scope) = tree.existing_scope_mut(query.name) else {
            continue;
        };
        let level = scope.level();
        scope.insert(
            CONTAINER,
            container_rule(
                names,
                &Declarations::new().with("max-width", size),
                level,
                layout,
            ),
        );
    }
}

fn container_rule(
    names: &IndexSet<String>,
    declarations: &Declarations,
    level: usize,
    layout: Layout,
) -> Rule {
    let separator = format!(",{}{}", layout.newline(), layout.indent(level));
    let selector = names
        .iter()
        .map(|name| format!(".{}", escape_class(name)))
        .collect::<Vec<_>>()
        .join(&separator);
    Rule::leaf(&selector, declarations, level, layout)
}

#[cfg(test)]
mod tests {
    use super::{Body, Layout, Rule, RuleTree, Sheet};
    use crate::resolve::Declarations;
    use crate::tables::media_query;

    fn leaf(tree: &mut RuleTree, key: &str, property: &str, layout: Layout) {
        let level = tree.level();
        tree.insert(
            key,
            Rule::leaf(
                &format!(".{}", key),
                &Declarations::new().with(property, "0"),
                level,
                layout,
            ),
        );
    }

    #[test]
    fn builds_balanced_leaf_rules() {
        let rule = Rule::leaf(
            ".p-4",
            &Declarations::new().with("padding", "1rem"),
            1,
            Layout::new(false),
        );
        assert_eq!(rule.preamble, "  .p-4 {\n");
        assert_eq!(rule.body, Body::Declarations("    padding: 1rem;\n".to_string()));
        assert_eq!(rule.postamble, "  }\n");
    }

    #[test]
    fn insert_keeps_first_rule_for_a_key() {
        let layout = Layout::new(true);
        let mut tree = RuleTree::new();
        leaf(&mut tree, "a", "margin", layout);
        assert!(!tree.insert(
            "a",
            Rule::leaf(".a", &Declarations::new().with("padding", "0"), 0, layout)
        ));
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.get("a").map(|rule| rule.body.clone()),
            Some(Body::Declarations("margin: 0;".to_string()))
        );
    }

    #[test]
    fn scopes_are_shared_and_nested_one_level_deeper() {
        let layout = Layout::new(false);
        let sm = media_query("sm").expect("sm breakpoint");
        let mut tree = RuleTree::new();
        tree.scope_mut(sm, layout);
        let nested = tree.scope_mut(sm, layout);
        assert_eq!(nested.level(), 1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn media_scopes_render_after_plain_rules_at_every_depth() {
        let layout = Layout::new(true);
        let md = media_query("md").expect("md breakpoint");
        let dark = media_query("dark").expect("dark feature");
        let mut sheet = Sheet::default();
        {
            let scope = sheet.tree.scope_mut(md, layout);
            let inner = scope.scope_mut(dark, layout);
            leaf(inner, "c", "color", layout);
            leaf(scope, "b", "margin", layout);
        }
        leaf(&mut sheet.tree, "a", "padding", layout);

        assert_eq!(
            sheet.render(layout),
            concat!(
                ".a {padding: 0;}",
                "@media (min-width: 768px) {",
                ".b {margin: 0;}",
                "@media (prefers-color-scheme: dark) {.c {color: 0;}}",
                "}"
            )
        );
    }

    #[test]
    fn empty_scopes_render_nothing() {
        let layout = Layout::new(false);
        let mut sheet = Sheet::default();
        sheet
            .tree
            .scope_mut(media_query("lg").expect("lg breakpoint"), layout);
        assert_eq!(sheet.render(layout), "");
        assert_eq!(Sheet::default().render(layout), "");
    }

    #[test]
    fn rendering_does_not_mutate_the_sheet() {
        let layout = Layout::new(false);
        let mut sheet = Sheet::default();
        sheet.additions.insert("container".to_string());
        let first = sheet.render(layout);
        assert_eq!(first, sheet.render(layout));
        assert!(sheet.tree().is_empty());
    }
}
