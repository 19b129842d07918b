//! Fixed lookup tables: class-name modifiers and the color palette.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoClass {
    pub name: &'static str,
    /// Text placed before the class selector, e.g. `.group:hover `.
    pub prefix: &'static str,
    /// Text placed right after the class selector, e.g. `:hover`.
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQuery {
    pub name: &'static str,
    pub condition: &'static str,
    /// Breakpoint width. Media features such as `dark` have none.
    pub size: Option<&'static str>,
}

impl MediaQuery {
    pub fn at_rule(&self) -> String {
        format!("@media {}", self.condition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    PseudoClass(&'static PseudoClass),
    MediaQuery(&'static MediaQuery),
}

impl Modifier {
    pub fn lookup(name: &str) -> Option<Self> {
        pseudo_class(name)
            .map(Modifier::PseudoClass)
            .or_else(|| media_query(name).map(Modifier::MediaQuery))
    }
}

pub const PSEUDO_CLASSES: &[PseudoClass] = &[
    pseudo("hover", "", ":hover"),
    pseudo("focus", "", ":focus"),
    pseudo("active", "", ":active"),
    pseudo("visited", "", ":visited"),
    pseudo("disabled", "", ":disabled"),
    pseudo("checked", "", ":checked"),
    pseudo("focus-within", "", ":focus-within"),
    pseudo("focus-visible", "", ":focus-visible"),
    pseudo("first", "", ":first-child"),
    pseudo("last", "", ":last-child"),
    pseudo("odd", "", ":nth-child(odd)"),
    pseudo("even", "", ":nth-child(even)"),
    pseudo("group-hover", ".group:hover ", ""),
    pseudo("group-focus", ".group:focus ", ""),
];

/// Breakpoints first, smallest to largest, then media features.
pub const MEDIA_QUERIES: &[MediaQuery] = &[
    breakpoint("sm", "(min-width: 640px)", "640px"),
    breakpoint("md", "(min-width: 768px)", "768px"),
    breakpoint("lg", "(min-width: 1024px)", "1024px"),
    breakpoint("xl", "(min-width: 1280px)", "1280px"),
    breakpoint("2xl", "(min-width: 1536px)", "1536px"),
    feature("dark", "(prefers-color-scheme: dark)"),
    feature("light", "(prefers-color-scheme: light)"),
    feature("motion-safe", "(prefers-reduced-motion: no-preference)"),
    feature("motion-reduce", "(prefers-reduced-motion: reduce)"),
    feature("print", "print"),
];

const fn pseudo(name: &'static str, prefix: &'static str, suffix: &'static str) -> PseudoClass {
    PseudoClass {
        name,
        prefix,
        suffix,
    }
}

const fn breakpoint(
    name: &'static str,
    condition: &'static str,
    size: &'static str,
) -> MediaQuery {
    MediaQuery {
        name,
        condition,
        size: Some(size),
    }
}

const fn feature(name: &'static str, condition: &'static str) -> MediaQuery {
    MediaQuery {
        name,
        condition,
        size: None,
    }
}

pub fn pseudo_class(name: &str) -> Option<&'static PseudoClass> {
    PSEUDO_CLASSES.iter().find(|entry| entry.name == name)
}

pub fn media_query(name: &str) -> Option<&'static MediaQuery> {
    MEDIA_QUERIES.iter().find(|entry| entry.name == name)
}

pub fn breakpoints() -> impl Iterator<Item = (&'static MediaQuery, &'static str)> {
    MEDIA_QUERIES
        .iter()
        .filter_map(|query| query.size.map(|size| (query, size)))
}

const SHADES: [&str; 9] = ["100", "200", "300", "400", "500", "600", "700", "800", "900"];

const PALETTE: &[(&str, [&str; 9])] = &[
    (
        "gray",
        [
            "#f7fafc", "#edf2f7", "#e2e8f0", "#cbd5e0", "#a0aec0", "#718096", "#4a5568",
            "#2d3748", "#1a202c",
        ],
    ),
    (
        "red",
        [
            "#fff5f5", "#fed7d7", "#feb2b2", "#fc8181", "#f56565", "#e53e3e", "#c53030",
            "#9b2c2c", "#742a2a",
        ],
    ),
    (
        "orange",
        [
            "#fffaf0", "#feebc8", "#fbd38d", "#f6ad55", "#ed8936", "#dd6b20", "#c05621",
            "#9c4221", "#7b341e",
        ],
    ),
    (
        "yellow",
        [
            "#fffff0", "#fefcbf", "#faf089", "#f6e05e", "#ecc94b", "#d69e2e", "#b7791f",
            "#975a16", "#744210",
        ],
    ),
    (
        "green",
        [
            "#f0fff4", "#c6f6d5", "#9ae6b4", "#68d391", "#48bb78", "#38a169", "#2f855a",
            "#276749", "#22543d",
        ],
    ),
    (
        "teal",
        [
            "#e6fffa", "#b2f5ea", "#81e6d9", "#4fd1c5", "#38b2ac", "#319795", "#2c7a7b",
            "#285e61", "#234e52",
        ],
    ),
    (
        "blue",
        [
            "#ebf8ff", "#bee3f8", "#90cdf4", "#63b3ed", "#4299e1", "#3182ce", "#2b6cb0",
            "#2c5282", "#2a4365",
        ],
    ),
    (
        "indigo",
        [
            "#ebf4ff", "#c3dafe", "#a3bffa", "#7f9cf5", "#667eea", "#5a67d8", "#4c51bf",
            "#434190", "#3c366b",
        ],
    ),
    (
        "purple",
        [
            "#faf5ff", "#e9d8fd", "#d6bcfa", "#b794f4", "#9f7aea", "#805ad5", "#6b46c1",
            "#553c9a", "#44337a",
        ],
    ),
    (
        "pink",
        [
            "#fff5f7", "#fed7e2", "#fbb6ce", "#f687b3", "#ed64a6", "#d53f8c", "#b83280",
            "#97266d", "#702459",
        ],
    ),
];

/// Resolves a palette token such as `red-500` or `white` to its CSS color.
pub fn color(token: &str) -> Option<&'static str> {
    match token {
        "transparent" => Some("transparent"),
        "current" => Some("currentColor"),
        "black" => Some("#000"),
        "white" => Some("#fff"),
        _ => {
            let (family, shade) = token.rsplit_once('-')?;
            let index = SHADES.iter().position(|candidate| *candidate == shade)?;
            PALETTE
                .iter()
                .find(|(name, _)| *name == family)
                .map(|(_, hexes)| hexes[index])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Modifier, breakpoints, color, media_query};

    #[test]
    fn resolves_palette_colors() {
        assert_eq!(color("red-500"), Some("#f56565"));
        assert_eq!(color("gray-100"), Some("#f7fafc"));
        assert_eq!(color("pink-900"), Some("#702459"));
        assert_eq!(color("current"), Some("currentColor"));
        assert_eq!(color("white"), Some("#fff"));
    }

    #[test]
    fn rejects_unknown_colors() {
        assert_eq!(color("red-550"), None);
        assert_eq!(color("magenta-500"), None);
        assert_eq!(color("red"), None);
    }

    #[test]
    fn looks_up_modifiers() {
        assert!(matches!(
            Modifier::lookup("hover"),
            Some(Modifier::PseudoClass(entry)) if entry.suffix == ":hover"
        ));
        assert!(matches!(
            Modifier::lookup("group-hover"),
            Some(Modifier::PseudoClass(entry)) if entry.prefix == ".group:hover "
        ));
        assert!(matches!(
            Modifier::lookup("md"),
            Some(Modifier::MediaQuery(entry)) if entry.size == Some("768px")
        ));
        assert_eq!(Modifier::lookup("tablet"), None);
    }

    #[test]
    fn media_features_have_no_breakpoint_size() {
        let dark = media_query("dark").expect("dark is a media feature");
        assert_eq!(dark.size, None);
        assert_eq!(dark.at_rule(), "@media (prefers-color-scheme: dark)");
        let names: Vec<_> = breakpoints().map(|(query, _)| query.name).collect();
        assert_eq!(names, ["sm", "md", "lg", "xl", "2xl"]);
    }
}
