//! # Key Handling
//!
//! Maps key events to [`App`] state changes and side effects.
//!
//! ## Key Bindings
//!
//! ### Anywhere
//! - `Ctrl+c` - Quit
//! - `Ctrl+t` - Cycle theme (saved to config)
//! - `Enter` / `Esc` - Dismiss a notice (all other keys are ignored while one is shown)
//!
//! ### Login
//! - `Tab` / `Up` / `Down` - Switch between username and password
//! - `Enter` - Log in
//! - `Esc` - Quit
//!
//! ### Dashboard
//! - `Tab` - Switch focus between chat and the user table
//! - `Ctrl+r` - Reshuffle minion
//! - `Ctrl+u` - Reload users
//! - `Esc` - Quit
//! - Chat focused: type, `Backspace`, `Enter` to send
//! - Table focused: `j` / `Down`, `k` / `Up` to scroll, `q` to quit

use crate::session::View;
use crate::ui::app::{App, FocusPane};
use crate::ui::requests::Request;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the event loop must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a request in the background.
    Spawn(Request),
    /// Persist the named theme.
    SaveTheme(&'static str),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Vec::new();
    }

    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return Vec::new();
    }

    if ctrl && key.code == KeyCode::Char('t') {
        return vec![Effect::SaveTheme(app.cycle_theme())];
    }

    match app.view() {
        View::Login => handle_login_key(app, key, ctrl),
        View::Dashboard => handle_dashboard_key(app, key, ctrl),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent, ctrl: bool) -> Vec<Effect> {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.login_next_field(),
        KeyCode::Backspace => app.login_pop_char(),
        KeyCode::Enter => {
            return app.submit_login().into_iter().map(Effect::Spawn).collect();
        }
        KeyCode::Char(c) if !ctrl => app.login_push_char(c),
        _ => {}
    }
    Vec::new()
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent, ctrl: bool) -> Vec<Effect> {
    let request = match key.code {
        KeyCode::Char('r') if ctrl => app.reshuffle_minion(),
        KeyCode::Char('u') if ctrl => app.refresh_users(),
        KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            None
        }
        _ => match app.focus {
            FocusPane::Chat => handle_chat_key(app, key, ctrl),
            FocusPane::Users => {
                handle_table_key(app, key);
                None
            }
        },
    };

    request.map(Effect::Spawn).into_iter().collect()
}

fn handle_chat_key(app: &mut App, key: KeyEvent, ctrl: bool) -> Option<Request> {
    match key.code {
        KeyCode::Enter => app.send_chat(),
        KeyCode::Backspace => {
            app.chat_pop_char();
            None
        }
        KeyCode::Char(c) if !ctrl => {
            app.chat_push_char(c);
            None
        }
        _ => None,
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_table_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_table_up(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}
