//! Class-name candidates found in page and script sources.

use std::collections::HashSet;

const CLASS_ATTRIBUTES: [&str; 2] = ["class", "className"];
const CLASS_HELPERS: [&str; 3] = ["clsx", "classnames", "cx"];

/// How a source file is searched for class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `class="..."` attributes only.
    Markup,
    /// String literals and class helper calls.
    Script,
    /// Attributes and string literals.
    Other,
}

impl SourceKind {
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("html" | "htm" | "vue" | "svelte" | "astro") => SourceKind::Markup,
            Some("js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs") => SourceKind::Script,
            _ => SourceKind::Other,
        }
    }
}

/// Class names in `text`, de-duplicated in first-seen order.
pub fn extract_classes(text: &str) -> Vec<String> {
    extract_classes_from(text, SourceKind::Other)
}

pub fn extract_classes_from(text: &str, kind: SourceKind) -> Vec<String> {
    let lists = match kind {
        SourceKind::Markup => class_attributes(text),
        SourceKind::Script => {
            let mut lists = string_literals(text);
            lists.extend(helper_object_keys(text));
            lists
        }
        SourceKind::Other => {
            let mut lists = class_attributes(text);
            lists.extend(string_literals(text));
            lists
        }
    };

    let mut seen = HashSet::new();
    let mut classes = Vec::new();
    for list in &lists {
        for class_name in list.split_whitespace() {
            if is_class_name(class_name) && seen.insert(class_name) {
                classes.push(class_name.to_string());
            }
        }
    }
    classes
}

fn is_class_name(token: &str) -> bool {
    token.chars().any(|ch| ch.is_ascii_alphabetic())
        && token
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '/' | '.'))
}

/// Byte cursor over source text. Every delimiter it stops on is ASCII, so
/// slicing at the cursor position stays on a char boundary.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Reads up to the closing `quote`; the opening one is already consumed.
    fn quoted(&mut self, quote: char) -> String {
        let mut value = String::new();
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => {
                    if let Some(escaped) = self.bump() {
                        value.push(escaped);
                    }
                }
                _ if ch == quote => break,
                _ => value.push(ch),
            }
        }
        value
    }

    /// Static pieces of a template literal; `${...}` splits pieces.
    fn template(&mut self) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();
        while let Some(ch) = self.bump() {
            match ch {
                '`' => break,
                '\\' => {
                    if let Some(escaped) = self.bump() {
                        current.push(escaped);
                    }
                }
                '$' if self.eat('{') => {
                    pieces.push(std::mem::take(&mut current));
                    self.pos -= 1;
                    self.balanced('{', '}');
                }
                _ => current.push(ch),
            }
        }
        pieces.push(current);
        pieces.retain(|piece| !piece.trim().is_empty());
        pieces
    }

    /// Text between `open` at the cursor and its matching `close`, skipping
    /// over quoted strings.
    fn balanced(&mut self, open: char, close: char) -> &'a str {
        if !self.eat(open) {
            return "";
        }
        let start = self.pos;
        let mut depth = 1usize;
        while let Some(ch) = self.peek() {
            match ch {
                '"' | '\'' => {
                    self.bump();
                    self.quoted(ch);
                    continue;
                }
                '`' => {
                    self.bump();
                    self.template();
                    continue;
                }
                _ if ch == open => depth += 1,
                _ if ch == close => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = &self.text[start..self.pos];
                        self.bump();
                        return inner;
                    }
                }
                _ => {}
            }
            self.bump();
        }
        &self.text[start..]
    }
}

fn string_literals(text: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut cursor = Cursor::at(text, 0);
    while let Some(ch) = cursor.bump() {
        match ch {
            '"' | '\'' => {
                let value = cursor.quoted(ch);
                if !value.is_empty() {
                    literals.push(value);
                }
            }
            '`' => literals.extend(cursor.template()),
            _ => {}
        }
    }
    literals
}

fn class_attributes(text: &str) -> Vec<String> {
    let mut values = Vec::new();
    for attribute in CLASS_ATTRIBUTES {
        for (start, _) in text.match_indices(attribute) {
            let end = start + attribute.len();
            if !is_word_boundary(text, start, end, is_attribute_char) {
                continue;
            }
            let mut cursor = Cursor::at(text, end);
            cursor.skip_whitespace();
            if !cursor.eat('=') {
                continue;
            }
            cursor.skip_whitespace();
            match cursor.peek() {
                Some(quote @ ('"' | '\'')) => {
                    cursor.bump();
                    values.push(cursor.quoted(quote));
                }
                Some('{') => values.extend(string_literals(cursor.balanced('{', '}'))),
                Some(_) => {
                    let rest = &text[cursor.pos..];
                    let len = rest
                        .find(|ch: char| ch.is_whitespace() || ch == '>')
                        .unwrap_or(rest.len());
                    values.push(rest[..len].to_string());
                }
                None => {}
            }
        }
    }
    values
}

/// Unquoted object keys passed to `clsx`-style helpers, e.g. the `flex` in
/// `clsx({ flex: enabled })`. Quoted keys are picked up as string literals.
fn helper_object_keys(text: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for helper in CLASS_HELPERS {
        for (start, _) in text.match_indices(helper) {
            let end = start + helper.len();
            if !is_word_boundary(text, start, end, is_identifier_char) {
                continue;
            }
            let mut cursor = Cursor::at(text, end);
            cursor.skip_whitespace();
            if cursor.peek() != Some('(') {
                continue;
            }
            let arguments = cursor.balanced('(', ')');
            keys.extend(object_keys(arguments));
        }
    }
    keys
}

fn object_keys(arguments: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut cursor = Cursor::at(arguments, 0);
    while let Some(ch) = cursor.peek() {
        match ch {
            '{' => {
                let body = cursor.balanced('{', '}');
                keys.extend(
                    top_level_segments(body)
                        .into_iter()
                        .filter_map(shorthand_or_named_key),
                );
            }
            '"' | '\'' => {
                cursor.bump();
                cursor.quoted(ch);
            }
            '`' => {
                cursor.bump();
                cursor.template();
            }
            _ => {
                cursor.bump();
            }
        }
    }
    keys
}

fn top_level_segments(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut cursor = Cursor::at(body, 0);
    let mut start = 0;
    while let Some(ch) = cursor.peek() {
        match ch {
            '"' | '\'' => {
                cursor.bump();
                cursor.quoted(ch);
            }
            '`' => {
                cursor.bump();
                cursor.template();
            }
            '{' => {
                cursor.balanced('{', '}');
            }
            '(' => {
                cursor.balanced('(', ')');
            }
            '[' => {
                cursor.balanced('[', ']');
            }
            ',' => {
                segments.push(&body[start..cursor.pos]);
                cursor.bump();
                start = cursor.pos;
            }
            _ => {
                cursor.bump();
            }
        }
    }
    segments.push(&body[start..]);
    segments
}

fn shorthand_or_named_key(segment: &str) -> Option<String> {
    let segment = segment.trim();
    let len = segment
        .find(|ch: char| !is_identifier_char(ch))
        .unwrap_or(segment.len());
    if len == 0 {
        return None;
    }
    let rest = segment[len..].trim_start();
    if rest.is_empty() || rest.starts_with(':') {
        Some(segment[..len].to_string())
    } else {
        None
    }
}

fn is_word_boundary(text: &str, start: usize, end: usize, inner: fn(char) -> bool) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(inner) && !after.is_some_and(inner)
}

fn is_attribute_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

#[cfg(test)]
mod tests {
    use super::{SourceKind, extract_classes, extract_classes_from};

    #[test]
    fn reads_class_attributes() {
        let classes = extract_classes(r#"<div class="p-4 sm:m-2 w-1/2"></div>"#);
        assert_eq!(classes, ["p-4", "sm:m-2", "w-1/2"]);
    }

    #[test]
    fn ignores_attributes_that_only_contain_the_word_class() {
        let classes = extract_classes_from(
            r#"<div data-class="p-2" subclass="m-2" class = 'flex'></div>"#,
            SourceKind::Markup,
        );
        assert_eq!(classes, ["flex"]);
    }

    #[test]
    fn deduplicates_in_first_seen_order() {
        let classes = extract_classes(
            r#"<p class="text-center block"></p><p class="block hover:underline"></p>"#,
        );
        assert_eq!(classes, ["text-center", "block", "hover:underline"]);
    }

    #[test]
    fn reads_jsx_class_name_expressions() {
        let classes = extract_classes_from(
            r#"<div className={active ? "bg-blue-500" : `bg-gray-100 ${extra}`} />"#,
            SourceKind::Markup,
        );
        assert_eq!(classes, ["bg-blue-500", "bg-gray-100"]);
    }

    #[test]
    fn reads_script_literals_and_helper_keys() {
        let source = r#"
            const button = clsx("px-4 py-2", { flex: inline, "text-white": dark });
            const link = cx({ underline, 'font-bold': strong });
        "#;
        let classes = extract_classes_from(source, SourceKind::Script);
        for expected in ["px-4", "py-2", "text-white", "font-bold", "flex", "underline"] {
            assert!(
                classes.contains(&expected.to_string()),
                "missing {}",
                expected
            );
        }
        assert!(!classes.contains(&"inline".to_string()));
    }

    #[test]
    fn rejects_tokens_that_cannot_be_class_names() {
        let classes = extract_classes(r#"<a class="123 {{ }} m-4 a=b">"#);
        assert_eq!(classes, ["m-4"]);
    }

    #[test]
    fn picks_source_kind_from_extension() {
        assert_eq!(SourceKind::from_extension(Some("html")), SourceKind::Markup);
        assert_eq!(SourceKind::from_extension(Some("tsx")), SourceKind::Script);
        assert_eq!(SourceKind::from_extension(Some("md")), SourceKind::Other);
        assert_eq!(SourceKind::from_extension(None), SourceKind::Other);
    }
}
