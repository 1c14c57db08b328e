use crate::profile::ProfileCard;
use crate::search::SearchStatus;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, INPUT_BORDER, MUTED_TEXT, SKELETON, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_STATE_HINT: &str =
    "Try searching for popular usernames like \"torvalds\", \"gaearon\", or \"vercel\".";
const INPUT_PLACEHOLDER: &str = "Search GitHub username...";
const BUTTON_WIDTH: u16 = 17;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let title = app.page_title();
    let description = app.description();
    frame.render_widget(Header::new(&title, &description).widget(), header);
    frame.render_widget(Clear, body);

    let (search_bar, content) = body_regions(body);
    draw_search_bar(frame, app, search_bar);

    match app.search().status() {
        SearchStatus::Idle => draw_hint(frame, content),
        SearchStatus::Loading => draw_loading(frame, app, content),
        SearchStatus::Success => {
            if let Some(card) = app.card() {
                draw_card(frame, card, content);
            }
        }
        SearchStatus::NotFound | SearchStatus::RateLimited | SearchStatus::Error => {
            if let Some(message) = app.search().error_message() {
                draw_error(frame, message, content);
            }
        }
    }

    frame.render_widget(Footer::new(app.search().status()).widget(), footer);
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(area);
    let (input_area, button_area) = (columns[0], columns[1]);

    let loading = app.search().is_loading();
    let query = app.search().query();
    let inner_width = input_area.width.saturating_sub(2) as usize;

    let input_line = if query.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            visible_tail(query, inner_width.saturating_sub(1)),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" GitHub username ")
            .border_style(Style::default().fg(INPUT_BORDER)),
    );
    frame.render_widget(input, input_area);

    let (label, button_style) = if loading {
        (
            format!("{} Searching...", app.spinner()),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )
    } else {
        (
            "Search".to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    let button = Paragraph::new(Line::from(Span::styled(label, button_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(button_style),
        );
    frame.render_widget(button, button_area);

    if !loading && input_area.width > 2 && input_area.height > 2 {
        let typed = visible_tail(query, inner_width.saturating_sub(1)).width() as u16;
        let x = input_area.x + 1 + typed.min(input_area.width.saturating_sub(3));
        frame.set_cursor_position((x, input_area.y + 1));
    }
}

fn draw_hint(frame: &mut Frame<'_>, area: Rect) {
    let hint = Paragraph::new(EMPTY_STATE_HINT)
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, area);
}

fn draw_loading(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let skeleton = Style::default().fg(SKELETON);
    let login = app.search().pending_login().unwrap_or_default();
    let lines = vec![
        Line::from(vec![
            Span::styled(app.spinner(), Style::default().fg(ACCENT)),
            Span::styled(
                format!(" Looking up @{login}"),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("░".repeat(24), skeleton)),
        Line::from(Span::styled("░".repeat(16), skeleton)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{0}   {0}   {0}", "░".repeat(12)),
            skeleton,
        )),
    ];
    let height = (lines.len() as u16 + 2).min(area.height);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, Rect { height, ..area });
}

fn draw_error(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let height = 4.min(area.height);
    let banner = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(HEADER_TEXT),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Oops! ",
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(banner, Rect { height, ..area });
}

fn draw_card(frame: &mut Frame<'_>, card: &ProfileCard, area: Rect) {
    let mut identity = vec![
        Line::from(Span::styled(
            card.display_name.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.handle.as_str(),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    if let Some(bio) = &card.bio {
        identity.push(Line::from(""));
        identity.push(Line::from(Span::styled(
            bio.as_str(),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    let identity_height = identity.len() as u16 + if card.bio.is_some() { 1 } else { 0 };

    let links = vec![
        Line::from(vec![
            Span::styled("View on GitHub: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(card.profile_url.as_str(), Style::default().fg(ACCENT)),
        ]),
        Line::from(vec![
            Span::styled("Avatar: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(card.avatar_url.as_str(), Style::default().fg(MUTED_TEXT)),
        ]),
    ];

    let height = (identity_height + 4 + links.len() as u16 + 2).min(area.height);
    let card_area = Rect { height, ..area };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(identity_height),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(identity).wrap(Wrap { trim: true }),
        rows[0],
    );

    let stat_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    for (stat, column) in card.stats.iter().zip(stat_columns.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(
                stat.value.as_str(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label, Style::default().fg(MUTED_TEXT))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(widget, *column);
    }

    frame.render_widget(Paragraph::new(links), rows[2]);
}

/// Longest suffix of `text` that fits in `width` terminal columns, so the
/// caret end of a long query stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }
    &text[start..]
}
