//! # UI Module
//!
//! Terminal user interface for the Evil Scientist Corp. client.
//!
//! ## Components
//!
//! - [`App`] - Application state: session, login form, dashboard data, chat
//! - [`mod@input`] - Key bindings, turned into state changes and [`input::Effect`]s
//! - [`mod@render`] - Drawing the current view with `ratatui`
//! - [`requests`] - Background HTTP requests and their responses
//! - [`config`] / [`theme`] - Persisted settings and colour themes
//!
//! ## Layout
//!
//! ```text
//! Login                              Dashboard
//! ┌───────────────────────┐          ┌─────────────────────────────────────┐
//! │ Evil Scientist Corp.  │          │ Dashboard   logged in as evilguy    │
//! │  ┌─────────────────┐  │          ├─────────────────────────────────────┤
//! │  │ username        │  │          │ Your evil minion is: ...  [Ctrl+r]  │
//! │  └─────────────────┘  │          ├─────────────────────────────────────┤
//! │  ┌─────────────────┐  │          │ Users                               │
//! │  │ ********        │  │          │ username  id  password  email       │
//! │  └─────────────────┘  │          ├─────────────────────────────────────┤
//! │  [Enter] Login        │          │ Evil Scientist Chat                 │
//! └───────────────────────┘          └─────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod requests;
pub mod theme;

pub use app::App;
pub use render::render;
