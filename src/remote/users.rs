//! User list from the local backend.
//!
//! The backend returns whole user rows, password included. The dashboard
//! shows the same columns the backend sends; hiding the password column is a
//! product decision nobody has made yet.

/// Path of the user listing, relative to the backend origin.
pub const USERS_PATH: &str = "sql/";

/// Columns of the dashboard's user table, left to right.
pub const USER_COLUMNS: [&str; 4] = ["username", "id", "password", "email"];

/// Title of the dashboard's user table.
pub const USERS_TITLE: &str = "Users";
