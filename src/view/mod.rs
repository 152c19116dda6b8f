//! Declarative render tree for the greeting screen.
//!
//! A view describes *what* to show; turning the tree into cells is the
//! backend's job (see `ui`). Colors are carried as [`StyleToken`]s and
//! resolved against the active theme at draw time, so the glyph tint follows
//! whatever theme the system is currently wearing.

use serde::Serialize;

/// Uniform inset applied by the `.padding()` modifier, in terminal cells.
pub const DEFAULT_PADDING: u16 = 2;

/// Default gap between stacked children, in rows.
pub const DEFAULT_SPACING: u16 = 0;

/// Named system glyph for the greeting icon (nerd-font pencil).
pub const PENCIL_GLYPH: &str = "\u{f03eb}";

/// Anything that can describe itself as a render tree.
///
/// One required method, no state. Implementations must be deterministic:
/// calling `body()` twice yields structurally equal trees.
pub trait View {
    fn body(&self) -> Node;
}

/// A node in the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Stack(StackNode),
    Icon(IconNode),
    Text(TextNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Vertical,
    #[allow(dead_code)]
    Horizontal, // No horizontal views yet
}

/// Layout container. Spacing separates the children from each other;
/// padding insets the container from its surroundings and never leaks
/// onto the children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackNode {
    pub direction: Direction,
    pub spacing: u16,
    pub padding: u16,
    pub children: Vec<Node>,
}

impl StackNode {
    /// A vertical stack with default spacing and no padding.
    pub fn vertical(children: Vec<Node>) -> Self {
        Self {
            direction: Direction::Vertical,
            spacing: DEFAULT_SPACING,
            padding: 0,
            children,
        }
    }

    /// Apply the platform-default uniform inset around the container.
    pub fn padding(mut self) -> Self {
        self.padding = DEFAULT_PADDING;
        self
    }
}

/// Scale variants for system glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphScale {
    #[allow(dead_code)]
    Small,
    Medium,
    Large,
}

/// Color slots resolved against the active theme when the tree is drawn.
/// The tree itself never holds a literal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    /// The theme accent. Follows system theme changes.
    Tint,
    /// The default text color.
    Foreground,
}

/// A named system glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconNode {
    pub glyph: String,
    pub scale: GlyphScale,
    pub color: StyleToken,
}

impl IconNode {
    pub fn system(glyph: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            scale: GlyphScale::Medium,
            color: StyleToken::Foreground,
        }
    }

    pub fn scale(mut self, scale: GlyphScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn foreground(mut self, color: StyleToken) -> Self {
        self.color = color;
        self
    }
}

impl From<IconNode> for Node {
    fn from(icon: IconNode) -> Self {
        Node::Icon(icon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Regular,
    #[allow(dead_code)]
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontDesign {
    Default,
    Serif,
    #[allow(dead_code)]
    Monospaced,
}

/// Requested typography. The cell grid can only approximate weight; size
/// and family are the terminal emulator's to resolve, but the request is
/// carried in the tree (and shows up in `--dump`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSpec {
    pub size: u16,
    pub weight: FontWeight,
    pub design: FontDesign,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 13,
            weight: FontWeight::Regular,
            design: FontDesign::Default,
        }
    }
}

/// A run of static text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub content: String,
    pub font: FontSpec,
    pub color: StyleToken,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: FontSpec::default(),
            color: StyleToken::Foreground,
        }
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

/// The one screen this program shows: a tinted pencil glyph over
/// "Hello, world!", stacked vertically inside default padding.
pub struct Greeting;

impl View for Greeting {
    fn body(&self) -> Node {
        Node::Stack(
            StackNode::vertical(vec![
                IconNode::system(PENCIL_GLYPH)
                    .scale(GlyphScale::Large)
                    .foreground(StyleToken::Tint)
                    .into(),
                TextNode::new("Hello, world!")
                    .font(FontSpec {
                        size: 50,
                        weight: FontWeight::Light,
                        design: FontDesign::Serif,
                    })
                    .into(),
            ])
            .padding(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting_stack() -> StackNode {
        match Greeting.body() {
            Node::Stack(stack) => stack,
            other => panic!("greeting root is not a stack: {:?}", other),
        }
    }

    #[test]
    fn body_is_idempotent() {
        assert_eq!(Greeting.body(), Greeting.body());
    }

    #[test]
    fn text_content_is_exact() {
        let stack = greeting_stack();
        let Node::Text(text) = &stack.children[1] else {
            panic!("second child is not text");
        };
        assert_eq!(text.content, "Hello, world!");
    }

    #[test]
    fn text_font_matches_requested_typography() {
        let stack = greeting_stack();
        let Node::Text(text) = &stack.children[1] else {
            panic!("second child is not text");
        };
        assert_eq!(text.font.size, 50);
        assert_eq!(text.font.weight, FontWeight::Light);
        assert_eq!(text.font.design, FontDesign::Serif);
        assert_eq!(text.color, StyleToken::Foreground);
    }

    #[test]
    fn icon_is_large_and_tinted_by_token() {
        let stack = greeting_stack();
        let Node::Icon(icon) = &stack.children[0] else {
            panic!("first child is not an icon");
        };
        assert_eq!(icon.glyph, PENCIL_GLYPH);
        assert_eq!(icon.scale, GlyphScale::Large);
        // Tint token, not a literal color: resolution happens at draw time.
        assert_eq!(icon.color, StyleToken::Tint);
    }

    #[test]
    fn padding_sits_on_the_container_only() {
        let stack = greeting_stack();
        assert_eq!(stack.padding, DEFAULT_PADDING);
        assert_eq!(stack.spacing, DEFAULT_SPACING);
        assert_eq!(stack.children.len(), 2);
        // Children are leaves; no nested container carries its own inset.
        for child in &stack.children {
            assert!(!matches!(child, Node::Stack(_)));
        }
    }

    #[test]
    fn tree_serializes_for_dump() {
        let json = serde_json::to_value(Greeting.body()).unwrap();
        assert_eq!(json["kind"], "stack");
        assert_eq!(json["children"][1]["content"], "Hello, world!");
        assert_eq!(json["children"][0]["scale"], "large");
    }
}
