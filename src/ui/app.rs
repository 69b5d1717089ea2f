//! Viewer state and keyboard event loop

use crate::transcript::Transcript;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Lines moved by PgUp/PgDn
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Steps,
    Diagram,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::Diagram,
            FocusedPane::Diagram => FocusedPane::Steps,
        }
    }
}

/// The main application state
pub struct App {
    pub transcript: Transcript,

    /// Index of the entry shown in the diagram pane
    pub selected: usize,

    pub focused_pane: FocusedPane,

    /// Diagram scroll offset per entry, so stepping back restores the view
    pub diagram_scroll: FxHashMap<usize, usize>,
    pub steps_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
}

impl App {
    pub fn new(transcript: Transcript) -> Self {
        let status_message = match transcript.failures() {
            0 => format!("{} diagrams", transcript.len()),
            n => format!("{} diagrams, {} failed", transcript.len(), n),
        };
        App {
            transcript,
            selected: 0,
            focused_pane: FocusedPane::Diagram,
            diagram_scroll: FxHashMap::default(),
            steps_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[0]);

        super::panes::render_steps_pane(
            frame,
            columns[0],
            &self.transcript,
            self.selected,
            self.focused_pane == FocusedPane::Steps,
            &mut self.steps_scroll,
        );

        let scroll = self.diagram_scroll.entry(self.selected).or_insert(0);
        super::panes::render_diagram_pane(
            frame,
            columns[1],
            self.transcript.get(self.selected),
            self.focused_pane == FocusedPane::Diagram,
            scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            self.transcript.len(),
            self.transcript
                .get(self.selected)
                .is_some_and(|entry| entry.failed),
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => self.select(self.selected.saturating_sub(1)),
            KeyCode::Right => self.select(self.selected.saturating_add(1)),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Steps => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Diagram => self.scroll_diagram_up(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Steps => self.select(self.selected.saturating_add(1)),
                FocusedPane::Diagram => self.scroll_diagram_down(1),
            },
            KeyCode::PageUp => self.scroll_diagram_up(PAGE),
            KeyCode::PageDown => self.scroll_diagram_down(PAGE),
            _ => {}
        }
    }

    /// Select an entry, clamped to the transcript
    fn select(&mut self, index: usize) {
        if self.transcript.is_empty() {
            self.status_message = "Nothing to show".to_string();
            return;
        }
        self.selected = index.min(self.transcript.len() - 1);
        if let Some(entry) = self.transcript.get(self.selected) {
            self.status_message = entry.title.clone();
        }
    }

    fn scroll_diagram_up(&mut self, lines: usize) {
        let scroll = self.diagram_scroll.entry(self.selected).or_insert(0);
        *scroll = scroll.saturating_sub(lines);
    }

    // Clamped to the content height on the next render
    fn scroll_diagram_down(&mut self, lines: usize) {
        let scroll = self.diagram_scroll.entry(self.selected).or_insert(0);
        *scroll = scroll.saturating_add(lines);
    }
}
