//! Terminal backend: walks a render tree into ratatui widgets.
//!
//! The tree stays declarative; this module owns every mapping from view
//! values to cells. Style tokens are resolved against the theme here, at
//! draw time, so a theme change on the next frame recolors the glyph
//! without the view knowing.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::view::{Direction, FontWeight, GlyphScale, IconNode, Node, StackNode, TextNode, View};

/// Entry point the event loop calls once per frame.
pub fn draw(f: &mut Frame, view: &impl View, theme: &Theme) {
    let area = f.area();
    draw_in(f, view, theme, area);
}

/// Draw a view into an explicit region (the preview harness reserves a
/// footer row for itself).
pub fn draw_in(f: &mut Frame, view: &impl View, theme: &Theme, area: Rect) {
    render_node(f, &view.body(), theme, area);
}

fn render_node(f: &mut Frame, node: &Node, theme: &Theme, area: Rect) {
    match node {
        Node::Stack(stack) => render_stack(f, stack, theme, area),
        Node::Icon(icon) => {
            let paragraph =
                Paragraph::new(Line::from(icon_span(icon, theme))).alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }
        Node::Text(text) => {
            let paragraph =
                Paragraph::new(Line::from(text_span(text, theme))).alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }
    }
}

fn render_stack(f: &mut Frame, stack: &StackNode, theme: &Theme, area: Rect) {
    // Padding belongs to the container: inset once here, children render
    // into the inner area untouched.
    let block = Block::default().padding(Padding::uniform(stack.padding));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = stack_lines(stack, theme);
    let height = lines.len() as u16;
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    let target = Rect::new(inner.x, top, inner.width, height.min(inner.height));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, target);
}

/// Flatten a stack into rows. Children sit on consecutive rows separated
/// only by `spacing` blank rows; a nested stack contributes its children's
/// rows in place.
fn stack_lines(stack: &StackNode, theme: &Theme) -> Vec<Line<'static>> {
    match stack.direction {
        Direction::Vertical => {
            let mut lines = Vec::new();
            for (i, child) in stack.children.iter().enumerate() {
                if i > 0 {
                    for _ in 0..stack.spacing {
                        lines.push(Line::default());
                    }
                }
                match child {
                    Node::Stack(inner) => lines.extend(stack_lines(inner, theme)),
                    Node::Icon(icon) => lines.push(Line::from(icon_span(icon, theme))),
                    Node::Text(text) => lines.push(Line::from(text_span(text, theme))),
                }
            }
            lines
        }
        Direction::Horizontal => {
            let mut spans = Vec::new();
            for (i, child) in stack.children.iter().enumerate() {
                if i > 0 && stack.spacing > 0 {
                    spans.push(Span::raw(" ".repeat(stack.spacing as usize)));
                }
                match child {
                    Node::Stack(inner) => {
                        spans.extend(stack_lines(inner, theme).into_iter().flat_map(|l| l.spans))
                    }
                    Node::Icon(icon) => spans.push(icon_span(icon, theme)),
                    Node::Text(text) => spans.push(text_span(text, theme)),
                }
            }
            vec![Line::from(spans)]
        }
    }
}

fn icon_span(icon: &IconNode, theme: &Theme) -> Span<'static> {
    let mut style = Style::default().fg(theme.resolve(icon.color));
    // The cell grid cannot scale a glyph; Large maps to the heavy variant.
    if icon.scale == GlyphScale::Large {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(icon.glyph.clone(), style)
}

fn text_span(text: &TextNode, theme: &Theme) -> Span<'static> {
    let mut style = Style::default().fg(theme.resolve(text.color));
    // Weight is the only part of the font the grid can approximate; point
    // size and family resolution stay with the terminal emulator.
    style = match text.font.weight {
        FontWeight::Light => style.add_modifier(Modifier::DIM),
        FontWeight::Regular => style,
        FontWeight::Bold => style.add_modifier(Modifier::BOLD),
    };
    Span::styled(text.content.clone(), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Greeting, DEFAULT_PADDING, PENCIL_GLYPH};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;
    use ratatui::Terminal;

    const WIDTH: u16 = 30;
    const HEIGHT: u16 = 9;

    fn buffer_for(theme: &Theme) -> Buffer {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &Greeting, theme)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..WIDTH).map(|x| buf.cell((x, y)).unwrap().symbol()).collect()
    }

    fn find_glyph(buf: &Buffer) -> (u16, u16) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if buf.cell((x, y)).unwrap().symbol() == PENCIL_GLYPH {
                    return (x, y);
                }
            }
        }
        panic!("glyph not rendered");
    }

    fn find_text_row(buf: &Buffer) -> u16 {
        (0..HEIGHT)
            .find(|&y| row_text(buf, y).contains("Hello, world!"))
            .expect("text not rendered")
    }

    #[test]
    fn renders_the_exact_greeting() {
        let buf = buffer_for(&Theme::default());
        let y = find_text_row(&buf);
        assert_eq!(row_text(&buf, y).trim(), "Hello, world!");
    }

    #[test]
    fn glyph_takes_the_default_accent() {
        let theme = Theme::default();
        let buf = buffer_for(&theme);
        let (x, y) = find_glyph(&buf);
        let cell = buf.cell((x, y)).unwrap();
        assert_eq!(cell.fg, Color::Blue);
        // Large scale renders as the heavy glyph variant.
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn accent_change_recolors_glyph_only() {
        let blue = Theme::default();
        let mut red = Theme::default();
        red.accent = Color::Red;

        let buf_blue = buffer_for(&blue);
        let buf_red = buffer_for(&red);

        let (x, y) = find_glyph(&buf_red);
        assert_eq!(buf_red.cell((x, y)).unwrap().fg, Color::Red);
        assert_eq!(buf_blue.cell((x, y)).unwrap().fg, Color::Blue);

        // Text row is untouched by the accent: same content, still on the
        // default foreground.
        let text_y = find_text_row(&buf_red);
        assert_eq!(row_text(&buf_red, text_y), row_text(&buf_blue, text_y));
        let text_x = row_text(&buf_red, text_y).find('H').unwrap() as u16;
        assert_eq!(buf_red.cell((text_x, text_y)).unwrap().fg, Color::Reset);
    }

    #[test]
    fn light_weight_renders_dim() {
        let buf = buffer_for(&Theme::default());
        let y = find_text_row(&buf);
        let x = row_text(&buf, y).find('H').unwrap() as u16;
        let cell = buf.cell((x, y)).unwrap();
        assert!(cell.modifier.contains(Modifier::DIM));
        assert!(!cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn children_stay_adjacent_inside_the_padded_container() {
        let buf = buffer_for(&Theme::default());
        let (_, glyph_y) = find_glyph(&buf);
        let text_y = find_text_row(&buf);
        // Default stack spacing: the rows touch, no matter the outer pad.
        assert_eq!(text_y, glyph_y + 1);
    }

    #[test]
    fn padding_insets_the_container_not_the_children() {
        let buf = buffer_for(&Theme::default());
        // The padded band around the container stays blank.
        for y in 0..DEFAULT_PADDING {
            assert_eq!(row_text(&buf, y).trim(), "");
            assert_eq!(row_text(&buf, HEIGHT - 1 - y).trim(), "");
        }
        let (glyph_x, glyph_y) = find_glyph(&buf);
        assert!(glyph_x >= DEFAULT_PADDING);
        assert!(glyph_y >= DEFAULT_PADDING);
    }

    #[test]
    fn horizontal_stack_joins_children_on_one_row() {
        let stack = StackNode {
            direction: Direction::Horizontal,
            spacing: 1,
            padding: 0,
            children: vec![
                TextNode::new("left").into(),
                TextNode::new("right").into(),
            ],
        };
        let lines = stack_lines(&stack, &Theme::default());
        assert_eq!(lines.len(), 1);
        let joined: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, "left right");
    }

    #[test]
    fn drawing_twice_yields_identical_buffers() {
        let theme = Theme::default();
        assert_eq!(buffer_for(&theme), buffer_for(&theme));
    }
}
