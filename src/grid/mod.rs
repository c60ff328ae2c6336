//! # Grid Module
//!
//! Generic tabular rendering for schema-less records.
//!
//! ## Overview
//!
//! Any collection of JSON-shaped records can be shown as a table without
//! compile-time knowledge of its fields. The caller supplies a title and an
//! ordered column list; [`render_grid`] produces a [`Grid`] holding the header
//! row and one row of display strings per record.
//!
//! ```text
//! columns = ["id", "name"]
//! data    = [{"id": 1, "name": "a"}, {"id": 2}]
//!
//! Grid {
//!     header: ["id", "name"],
//!     rows:   [["1", "a"], ["2", ""]],
//! }
//! ```
//!
//! A record missing a requested column yields an empty cell. Columns may
//! repeat and either input may be empty; every input has a defined output.

pub mod record;
pub mod table;

pub use record::{dataset_from_json, display_value, Dataset, Record};
pub use table::{render_grid, Grid};
