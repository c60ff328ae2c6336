use crate::grid::{render_grid, Dataset, Grid};
use crate::remote::users::USERS_TITLE;
use crate::remote::{random_minion_id, Minion, USER_COLUMNS};
use crate::session::{
    Authenticator, LoginOutcome, Session, StaticCredentials, View, REJECTED_NOTICE,
};
use crate::ui::requests::{Request, RequestKind, Response};
use crate::ui::theme::Theme;
use chrono::{DateTime, Local};
use tracing::info;

/// Input field with focus on the login view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// Pane with focus on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Chat,
    Users,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub field: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            field: LoginField::Username,
        }
    }
}

impl LoginForm {
    fn active_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub input: String,
    pub reply: Option<String>,
    pub loading: bool,
}

/// One-line message in the footer, e.g. a failed request.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: String,
    pub at: DateTime<Local>,
}

pub struct App {
    pub session: Session,
    authenticator: Box<dyn Authenticator + Send + Sync>,
    pub login: LoginForm,
    pub users: Dataset,
    pub users_loading: bool,
    pub minion: Option<Minion>,
    pub minion_loading: bool,
    pub chat: ChatState,
    pub focus: FocusPane,
    pub table_offset: usize,
    /// Blocking notice; while set, only dismissal keys are handled.
    pub notice: Option<String>,
    pub status: Option<StatusLine>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self::with_authenticator(theme, Box::new(StaticCredentials::default()))
    }

    pub fn with_authenticator(
        theme: Theme,
        authenticator: Box<dyn Authenticator + Send + Sync>,
    ) -> Self {
        Self {
            session: Session::new(),
            authenticator,
            login: LoginForm::default(),
            users: Vec::new(),
            users_loading: false,
            minion: None,
            minion_loading: false,
            chat: ChatState::default(),
            focus: FocusPane::Chat,
            table_offset: 0,
            notice: None,
            status: None,
            theme,
            should_quit: false,
        }
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    // -- Login view --

    pub fn login_push_char(&mut self, c: char) {
        self.login.active_mut().push(c);
    }

    pub fn login_pop_char(&mut self) {
        self.login.active_mut().pop();
    }

    pub fn login_next_field(&mut self) {
        self.login.field = match self.login.field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Check the typed credentials. On success the dashboard is mounted and
    /// its initial requests are returned; on failure a notice is raised.
    pub fn submit_login(&mut self) -> Vec<Request> {
        let outcome = self.session.attempt_login(
            self.authenticator.as_ref(),
            &self.login.username,
            &self.login.password,
        );

        match outcome {
            LoginOutcome::Granted => {
                self.login = LoginForm::default();
                self.mount_dashboard()
            }
            LoginOutcome::Rejected => {
                self.notice = Some(REJECTED_NOTICE.to_string());
                Vec::new()
            }
        }
    }

    fn mount_dashboard(&mut self) -> Vec<Request> {
        info!("dashboard mounted");
        self.focus = FocusPane::Chat;
        [self.refresh_users(), self.reshuffle_minion()]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -- Dashboard --

    /// Ask for a new random minion unless one is already on its way.
    pub fn reshuffle_minion(&mut self) -> Option<Request> {
        if self.view() != View::Dashboard || self.minion_loading {
            return None;
        }
        self.minion_loading = true;
        Some(Request::FetchMinion(random_minion_id()))
    }

    /// Re-fetch the user list unless a fetch is already outstanding.
    pub fn refresh_users(&mut self) -> Option<Request> {
        if self.view() != View::Dashboard || self.users_loading {
            return None;
        }
        self.users_loading = true;
        Some(Request::FetchUsers)
    }

    pub fn chat_push_char(&mut self, c: char) {
        self.chat.input.push(c);
    }

    pub fn chat_pop_char(&mut self) {
        self.chat.input.pop();
    }

    /// Send the chat input. Disabled while a reply is pending.
    pub fn send_chat(&mut self) -> Option<Request> {
        if self.view() != View::Dashboard || self.chat.loading {
            return None;
        }
        self.chat.loading = true;
        Some(Request::SendChat(self.chat.input.clone()))
    }

    pub fn chat_button_label(&self) -> &'static str {
        if self.chat.loading {
            "Thinking..."
        } else {
            "Send Message"
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Chat => FocusPane::Users,
            FocusPane::Users => FocusPane::Chat,
        };
    }

    pub fn scroll_table_down(&mut self) {
        if self.table_offset + 1 < self.users.len() {
            self.table_offset += 1;
        }
    }

    pub fn scroll_table_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    /// The user table as currently rendered.
    pub fn users_grid(&self) -> Grid {
        render_grid(USERS_TITLE, &USER_COLUMNS, &self.users)
    }

    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme.next();
        self.theme = next.clone();
        next.name
    }

    pub fn is_busy(&self) -> bool {
        self.users_loading || self.minion_loading || self.chat.loading
    }

    /// Fold a finished request into state.
    pub fn apply(&mut self, response: Response) {
        match response {
            Response::Users(users) => {
                self.users_loading = false;
                self.users = users;
                if self.table_offset >= self.users.len() {
                    self.table_offset = self.users.len().saturating_sub(1);
                }
            }
            Response::Minion(minion) => {
                self.minion_loading = false;
                info!(name = %minion.name, "your evil minion is ready");
                self.minion = Some(minion);
            }
            Response::ChatReply(text) => {
                self.chat.loading = false;
                self.chat.input.clear();
                self.chat.reply = Some(text);
            }
            Response::Failed { kind, message } => {
                match kind {
                    RequestKind::Users => self.users_loading = false,
                    RequestKind::Minion => self.minion_loading = false,
                    RequestKind::Chat => self.chat.loading = false,
                }
                self.status = Some(StatusLine {
                    message,
                    at: Local::now(),
                });
            }
        }
    }
}
