use crate::grid::Grid;
use crate::session::View;
use crate::ui::app::{App, FocusPane, LoginField};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    match app.view() {
        View::Login => render_login(frame, app),
        View::Dashboard => render_dashboard(frame, app),
    }

    if let Some(notice) = &app.notice {
        render_notice(frame, theme, notice);
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

fn render_login(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(50, 13, frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Evil Scientist Corp. Login ")
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let masked = "*".repeat(app.login.password.chars().count());
    let fields = [
        (LoginField::Username, "username", app.login.username.as_str(), rows[1]),
        (LoginField::Password, "password", masked.as_str(), rows[2]),
    ];

    for (field, placeholder, value, field_area) in fields {
        let focused = app.login.field == field && app.notice.is_none();
        let text = if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(theme.fg_dim))
        } else {
            Span::raw(value.to_string())
        };
        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(theme, focused)),
        );
        frame.render_widget(input, field_area);

        if focused {
            let x = cursor_x(field_area.x, 1, value);
            frame.set_cursor_position((x.min(field_area.right().saturating_sub(2)), field_area.y + 1));
        }
    }

    let button = Paragraph::new(Line::from(Span::styled(
        " [Enter] Login ",
        Style::default()
            .fg(theme.bg)
            .bg(theme.success)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(button, rows[4]);

    render_footer(frame, app, "[Tab] Switch Field  [Enter] Login  [Ctrl+t] Theme  [Esc] Quit");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

fn render_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Minion
            Constraint::Min(6),    // Users
            Constraint::Length(8), // Chat
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_minion(frame, app, chunks[1]);
    render_grid_table(frame, app, &app.users_grid(), chunks[2]);
    render_chat(frame, app, chunks[3]);

    let help = match app.focus {
        FocusPane::Chat => {
            "[Enter] Send  [Tab] Users  [Ctrl+r] Reshuffle  [Ctrl+u] Reload  [Ctrl+t] Theme  [Esc] Quit"
        }
        FocusPane::Users => {
            "[↑↓/jk] Scroll  [Tab] Chat  [Ctrl+r] Reshuffle  [Ctrl+u] Reload  [Ctrl+t] Theme  [Q] Quit"
        }
    };
    render_footer(frame, app, help);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let user = app
        .session
        .user()
        .map(|u| u.username.as_str())
        .unwrap_or_default();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Dashboard  ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("logged in as {}", user), Style::default().fg(theme.fg_dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_minion(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let name = app.minion.as_ref().map(|m| m.name.clone()).unwrap_or_default();
    let sprite = |url: Option<&String>| url.cloned().unwrap_or_default();
    let (front, back) = app
        .minion
        .as_ref()
        .map(|m| {
            (
                sprite(m.sprites.front_default.as_ref()),
                sprite(m.sprites.back_default.as_ref()),
            )
        })
        .unwrap_or_default();

    let button = if app.minion_loading {
        Span::styled("[Ctrl+r] Summoning...", Style::default().fg(theme.fg_dim))
    } else {
        Span::styled("[Ctrl+r] Reshuffle Minion", Style::default().fg(theme.success))
    };

    let text = vec![
        Line::from(vec![
            Span::raw("Your evil minion is: "),
            Span::styled(
                name,
                Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            button,
        ]),
        Line::from(vec![
            Span::styled("Front: ", Style::default().fg(theme.fg_dim)),
            Span::raw(front),
        ]),
        Line::from(vec![
            Span::styled("Back:  ", Style::default().fg(theme.fg_dim)),
            Span::raw(back),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Minion ")
            .border_style(Style::default().fg(theme.fg_dim)),
    );
    frame.render_widget(paragraph, area);
}

/// Draw a [`Grid`] as a bordered, striped table starting at the app's
/// current scroll offset.
fn render_grid_table(frame: &mut Frame, app: &App, grid: &Grid, area: Rect) {
    let theme = &app.theme;

    let widths: Vec<Constraint> = grid
        .column_widths()
        .into_iter()
        .map(|w| Constraint::Length(u16::try_from(w).unwrap_or(u16::MAX)))
        .collect();

    let header = Row::new(grid.header.iter().map(|h| Cell::from(h.clone()))).style(
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = grid
        .rows
        .iter()
        .enumerate()
        .skip(app.table_offset)
        .map(|(i, cells)| {
            let style = if i % 2 == 1 {
                Style::default().bg(theme.stripe_bg)
            } else {
                Style::default()
            };
            Row::new(cells.iter().map(|c| Cell::from(c.clone()))).style(style)
        })
        .collect();

    let mut title = format!(" {} ", grid.title);
    if app.users_loading {
        title.push_str("(loading) ");
    }

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(theme, app.focus == FocusPane::Users)),
        );

    frame.render_widget(table, area);
}

fn render_chat(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == FocusPane::Chat && app.notice.is_none();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Evil Scientist Chat ")
        .border_style(border_style(theme, focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Button
            Constraint::Min(0),    // Response
        ])
        .split(inner);

    let input = if app.chat.input.is_empty() {
        Span::styled(
            "Send a message to your virtual assistant...",
            Style::default().fg(theme.fg_dim),
        )
    } else {
        Span::raw(app.chat.input.clone())
    };
    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw("> "), input])), rows[0]);

    if focused {
        let x = cursor_x(rows[0].x, 2, &app.chat.input);
        frame.set_cursor_position((x.min(rows[0].right().saturating_sub(1)), rows[0].y));
    }

    let button_style = if app.chat.loading {
        Style::default().fg(theme.secondary)
    } else {
        Style::default().fg(theme.success)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("[Enter] {}", app.chat_button_label()), button_style)),
        rows[1],
    );

    if let Some(reply) = app.chat.reply.as_ref().filter(|r| !r.is_empty()) {
        let text = vec![
            Line::from(Span::styled(
                "Response:",
                Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
            )),
            Line::from(reply.clone()),
        ];
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), rows[2]);
    }
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

fn render_footer(frame: &mut Frame, app: &App, help: &str) {
    let theme = &app.theme;
    let area = frame.area();
    let footer_area = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

    let line = match &app.status {
        Some(status) => Line::from(vec![
            Span::styled(
                format!("[{}] {}", status.at.format("%H:%M:%S"), status.message),
                Style::default().fg(theme.error),
            ),
            Span::styled(format!("  {}", help), Style::default().fg(theme.fg_dim)),
        ]),
        None => Line::from(Span::styled(help.to_string(), Style::default().fg(theme.fg_dim))),
    };

    frame.render_widget(Paragraph::new(line), footer_area);
}

fn render_notice(frame: &mut Frame, theme: &Theme, notice: &str) {
    let area = centered_rect(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(theme.fg_dim))),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Notice ")
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.bg)),
    );
    frame.render_widget(paragraph, area);
}

/// Column just past `text` when it starts `offset` cells into `origin`.
fn cursor_x(origin: u16, offset: u16, text: &str) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    origin.saturating_add(offset).saturating_add(width)
}

fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.fg_dim)
    }
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
