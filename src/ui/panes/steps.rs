//! Step list pane: one line per captured diagram

use crate::transcript::Transcript;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the step list, keeping the selected step in view
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    selected: usize,
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

    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if transcript.is_empty() {
        let list = List::new(vec![
            ListItem::new("(nothing captured)").style(Style::default().fg(DEFAULT_THEME.comment))
        ])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }

    let items: Vec<ListItem> = transcript
        .entries
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, entry)| {
            let number_style = if entry.failed {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let mut title_style = Style::default().fg(DEFAULT_THEME.fg);
            if index == selected {
                title_style = title_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", index + 1), number_style),
                Span::styled(entry.title.clone(), title_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
