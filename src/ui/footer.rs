use crate::search::SearchStatus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const READY_HINTS: [(&str, &str); 3] = [("Enter", "Search"), ("Ctrl+U", "Clear"), ("Esc", "Quit")];
const BUSY_HINTS: [(&str, &str); 2] = [("Ctrl+U", "Clear"), ("Esc", "Quit")];

/// Key hints for the current status, version in the bottom border.
pub struct Footer {
    status: SearchStatus,
}

impl Footer {
    pub fn new(status: SearchStatus) -> Self {
        Self { status }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.status {
            // Enter does nothing until the lookup settles.
            SearchStatus::Loading => &BUSY_HINTS,
            _ => &READY_HINTS,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let key_style = Style::default().fg(HEADER_TEXT);
        let label_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {label}"), label_style));
        }

        let version = Line::from(format!(" v{} ", env!("CARGO_PKG_VERSION"))).right_aligned();
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(version.style(label_style)),
        )
    }
}
