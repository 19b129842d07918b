//! Property resolver bank.
//!
//! A base token such as `mt-4` is split into an identifier (`mt`) and a
//! value token (`4`). The identifier is parsed once into a [`Utility`] and
//! dispatched to the resolver for that family.

mod decoration;
mod flexbox;
mod interactivity;
mod layout;
mod sizing;
mod spacing;
mod transform;
mod typography;

/// Ordered `property: value` pairs of one rule body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(String, String)>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.push((property.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// One declaration per line, each prefixed with `indent`.
    pub fn render(&self, indent: &str, newline: &str) -> String {
        let mut out = String::new();
        for (property, value) in self.iter() {
            out.push_str(indent);
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
            out.push_str(newline);
        }
        out
    }
}

impl<P, V> FromIterator<(P, V)> for Declarations
where
    P: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedProperty {
    /// Declarations for the plain class selector.
    Plain(Declarations),
    /// Declarations plus text appended to the class selector, such as a
    /// pseudo-element or a sibling combinator.
    Compound(Declarations, String),
    Unresolved,
}

/// A base token after modifier and sign stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub identifier: &'a str,
    pub token: Option<&'a str>,
    pub negative: bool,
}

impl<'a> Candidate<'a> {
    /// Splits `base` (already stripped of modifiers) at its first `-`.
    pub fn parse(base: &'a str) -> Self {
        let (negative, base) = match base.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, base),
        };
        let (identifier, token) = match base.split_once('-') {
            Some((identifier, token)) => (identifier, Some(token)),
            None => (base, None),
        };
        Self {
            identifier,
            token,
            negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    BoxSizing,
    Display,
    Float,
    Clearfix,
    Clear,
    Object,
    Overflow,
    Scrolling,
    Overscroll,
    Position,
    Inset,
    Visibility,
    ZIndex,
    Space,
    Flex,
    AlignItems,
    AlignContent,
    AlignSelf,
    Justify,
    Order,
    Grid,
    GridColumn,
    GridRow,
    Gap,
    Padding,
    Margin,
    Height,
    Width,
    MinSize,
    MaxSize,
    Background,
    Text,
    Font,
    Italic,
    Negated,
    TextTransform,
    NormalCase,
    Underline,
    Line,
    NoDecoration,
    Leading,
    Tracking,
    Whitespace,
    WordBreak,
    Truncate,
    Antialiased,
    Subpixel,
    List,
    ScreenReader,
    Placeholder,
    Border,
    Rounded,
    Divide,
    Shadow,
    Opacity,
    Transform,
    Origin,
    Scale,
    Rotate,
    Translate,
    Skew,
    Transition,
    Duration,
    Delay,
    Ease,
    Cursor,
    Select,
    Pointer,
    Resize,
    Appearance,
    Outline,
}

impl Utility {
    pub fn parse(identifier: &str) -> Option<Self> {
        let utility = match identifier {
            "box" => Utility::BoxSizing,
            "block" | "inline" | "table" | "flow" | "contents" | "hidden" => Utility::Display,
            "float" => Utility::Float,
            "clearfix" => Utility::Clearfix,
            "clear" => Utility::Clear,
            "object" => Utility::Object,
            "overflow" => Utility::Overflow,
            "scrolling" => Utility::Scrolling,
            "overscroll" => Utility::Overscroll,
            "static" | "fixed" | "absolute" | "relative" | "sticky" => Utility::Position,
            "inset" | "top" | "right" | "bottom" | "left" => Utility::Inset,
            "visible" | "invisible" => Utility::Visibility,
            "z" => Utility::ZIndex,
            "space" => Utility::Space,
            "flex" => Utility::Flex,
            "items" => Utility::AlignItems,
            "content" => Utility::AlignContent,
            "self" => Utility::AlignSelf,
            "justify" => Utility::Justify,
            "order" => Utility::Order,
            "grid" => Utility::Grid,
            "col" => Utility::GridColumn,
            "row" => Utility::GridRow,
            "gap" => Utility::Gap,
            "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" => Utility::Padding,
            "m" | "mx" | "my" | "mt" | "mr" | "mb" | "ml" => Utility::Margin,
            "h" => Utility::Height,
            "w" => Utility::Width,
            "min" => Utility::MinSize,
            "max" => Utility::MaxSize,
            "bg" => Utility::Background,
            "text" => Utility::Text,
            "font" => Utility::Font,
            "italic" => Utility::Italic,
            "not" => Utility::Negated,
            "uppercase" | "lowercase" | "capitalize" => Utility::TextTransform,
            "normal" => Utility::NormalCase,
            "underline" => Utility::Underline,
            "line" => Utility::Line,
            "no" => Utility::NoDecoration,
            "leading" => Utility::Leading,
            "tracking" => Utility::Tracking,
            "whitespace" => Utility::Whitespace,
            "break" => Utility::WordBreak,
            "truncate" => Utility::Truncate,
            "antialiased" => Utility::Antialiased,
            "subpixel" => Utility::Subpixel,
            "list" => Utility::List,
            "sr" => Utility::ScreenReader,
            "placeholder" => Utility::Placeholder,
            "border" => Utility::Border,
            "rounded" => Utility::Rounded,
            "divide" => Utility::Divide,
            "shadow" => Utility::Shadow,
            "opacity" => Utility::Opacity,
            "transform" => Utility::Transform,
            "origin" => Utility::Origin,
            "scale" => Utility::Scale,
            "rotate" => Utility::Rotate,
            "translate" => Utility::Translate,
            "skew" => Utility::Skew,
            "transition" => Utility::Transition,
            "duration" => Utility::Duration,
            "delay" => Utility::Delay,
            "ease" => Utility::Ease,
            "cursor" => Utility::Cursor,
            "select" => Utility::Select,
            "pointer" => Utility::Pointer,
            "resize" => Utility::Resize,
            "appearance" => Utility::Appearance,
            "outline" => Utility::Outline,
            _ => return None,
        };
        Some(utility)
    }
}

/// Resolves one candidate to its declarations.
pub fn resolve(candidate: &Candidate<'_>) -> ResolvedProperty {
    let Some(utility) = Utility::parse(candidate.identifier) else {
        return ResolvedProperty::Unresolved;
    };
    let resolved = match utility {
        Utility::BoxSizing => layout::box_sizing(candidate),
        Utility::Display => layout::display(candidate),
        Utility::Float => layout::float(candidate),
        Utility::Clearfix => layout::clearfix(candidate),
        Utility::Clear => layout::clear(candidate),
        Utility::Object => layout::object(candidate),
        Utility::Overflow => layout::overflow(candidate),
        Utility::Scrolling => layout::scrolling(candidate),
        Utility::Overscroll => layout::overscroll(candidate),
        Utility::Position => layout::position(candidate),
        Utility::Inset => layout::inset(candidate),
        Utility::Visibility => layout::visibility(candidate),
        Utility::ZIndex => layout::z_index(candidate),
        Utility::Space => spacing::space(candidate),
        Utility::Flex => flexbox::flex(candidate),
        Utility::AlignItems => flexbox::align_items(candidate),
        Utility::AlignContent => flexbox::align_content(candidate),
        Utility::AlignSelf => flexbox::align_self(candidate),
        Utility::Justify => flexbox::justify(candidate),
        Utility::Order => flexbox::order(candidate),
        Utility::Grid => flexbox::grid(candidate),
        Utility::GridColumn => flexbox::grid_line(candidate, "grid-column"),
        Utility::GridRow => flexbox::grid_line(candidate, "grid-row"),
        Utility::Gap => flexbox::gap(candidate),
        Utility::Padding => spacing::padding(candidate),
        Utility::Margin => spacing::margin(candidate),
        Utility::Height => sizing::height(candidate),
        Utility::Width => sizing::width(candidate),
        Utility::MinSize => sizing::min_size(candidate),
        Utility::MaxSize => sizing::max_size(candidate),
        Utility::Background => decoration::background(candidate),
        Utility::Text => typography::text(candidate),
        Utility::Font => typography::font(candidate),
        Utility::Italic => typography::italic(candidate),
        Utility::Negated => typography::negated(candidate),
        Utility::TextTransform => typography::text_transform(candidate),
        Utility::NormalCase => typography::normal_case(candidate),
        Utility::Underline => typography::underline(candidate),
        Utility::Line => typography::line_through(candidate),
        Utility::NoDecoration => typography::no_underline(candidate),
        Utility::Leading => typography::leading(candidate),
        Utility::Tracking => typography::tracking(candidate),
        Utility::Whitespace => typography::whitespace(candidate),
        Utility::WordBreak => typography::word_break(candidate),
        Utility::Truncate => typography::truncate(candidate),
        Utility::Antialiased => typography::antialiased(candidate),
        Utility::Subpixel => typography::subpixel(candidate),
        Utility::List => typography::list(candidate),
        Utility::ScreenReader => typography::screen_reader(candidate),
        Utility::Placeholder => typography::placeholder(candidate),
        Utility::Border => decoration::border(candidate),
        Utility::Rounded => decoration::rounded(candidate),
        Utility::Divide => decoration::divide(candidate),
        Utility::Shadow => decoration::shadow(candidate),
        Utility::Opacity => decoration::opacity(candidate),
        Utility::Transform => transform::transform(candidate),
        Utility::Origin => transform::origin(candidate),
        Utility::Scale => transform::scale(candidate),
        Utility::Rotate => transform::rotate(candidate),
        Utility::Translate => transform::translate(candidate),
        Utility::Skew => transform::skew(candidate),
        Utility::Transition => transform::transition(candidate),
        Utility::Duration => transform::timing(candidate, "transition-duration"),
        Utility::Delay => transform::timing(candidate, "transition-delay"),
        Utility::Ease => transform::ease(candidate),
        Utility::Cursor => interactivity::cursor(candidate),
        Utility::Select => interactivity::select(candidate),
        Utility::Pointer => interactivity::pointer_events(candidate),
        Utility::Resize => interactivity::resize(candidate),
        Utility::Appearance => interactivity::appearance(candidate),
        Utility::Outline => interactivity::outline(candidate),
    };
    resolved.unwrap_or(ResolvedProperty::Unresolved)
}

/// Selector text that targets every child after the first.
pub(crate) const SIBLINGS: &str = " > :not(template) ~ :not(template)";

fn plain(property: &str, value: impl Into<String>) -> Option<ResolvedProperty> {
    Some(ResolvedProperty::Plain(
        Declarations::new().with(property, value),
    ))
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Properties covered by a side suffix: `x` is right and left, `y` is top
/// and bottom, an empty suffix is the shorthand itself.
fn edge_properties(base: &str, edge: &str) -> Option<Vec<String>> {
    let sides: &[&str] = match edge {
        "" => return Some(vec![base.to_string()]),
        "x" => &["right", "left"],
        "y" => &["top", "bottom"],
        "t" => &["top"],
        "r" => &["right"],
        "b" => &["bottom"],
        "l" => &["left"],
        _ => return None,
    };
    Some(
        sides
            .iter()
            .map(|side| format!("{}-{}", base, side))
            .collect(),
    )
}

fn same_value(properties: Vec<String>, value: &str) -> Option<ResolvedProperty> {
    Some(ResolvedProperty::Plain(
        properties
            .into_iter()
            .map(|property| (property, value.to_string()))
            .collect(),
    ))
}
