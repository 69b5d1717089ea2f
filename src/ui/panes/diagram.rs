//! Diagram pane: the selected transcript entry

use crate::transcript::Entry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the selected diagram with vertical scrolling
pub fn render_diagram_pane(
    frame: &mut Frame,
    area: Rect,
    entry: Option<&Entry>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match entry {
        Some(entry) => format!(" {} ", entry.title),
        None => " Diagram ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(entry) = entry else {
        let paragraph = Paragraph::new("(no diagram selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let lines = entry.lines();

    // Clamp scroll offset only if content exceeds visible area
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(style_line(line, entry.failed)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Color addresses and `UNUSED` markers; error entries are drawn in red
fn style_line(line: &str, failed: bool) -> Line<'static> {
    if failed {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ));
    }

    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find("0x") {
        let end = rest[start..]
            .find(|c: char| !c.is_ascii_hexdigit() && c != 'x')
            .map_or(rest.len(), |len| start + len);
        spans.push(plain(&rest[..start]));
        spans.push(Span::styled(
            rest[start..end].to_string(),
            Style::default().fg(DEFAULT_THEME.address),
        ));
        rest = &rest[end..];
    }
    spans.push(plain(rest));

    Line::from(spans)
}

fn plain(text: &str) -> Span<'static> {
    let color = if text.contains("UNUSED") {
        DEFAULT_THEME.comment
    } else if text.contains('[') && text.contains("struct]") {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.fg
    };
    Span::styled(text.to_string(), Style::default().fg(color))
}
