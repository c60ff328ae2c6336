//! Evil Scientist Corp. TUI - a terminal client for the Evil Scientist Corp. backend
//!
//! This library provides the pieces behind the `evilcorp` binary: a generic
//! table renderer for schema-less records, the login/session gate, HTTP
//! clients for the user list, the minion API and the chat endpoint, and the
//! TUI built on top of them.

pub mod grid;
pub mod logging;
pub mod remote;
pub mod session;
pub mod ui;
