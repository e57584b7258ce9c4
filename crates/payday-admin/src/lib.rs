//! # payday-admin
//!
//! - **menu**: `AdminMenu`: whether the session user gets the admin entry point
//! - **board**: `TipBoard`: add, delete, settle and count tips
//!
//! The board lives in memory only; nothing here writes tips back to the API.
//! `TipBoard::add`, `delete` and `settle` are library API for a long-lived
//! front end. The `payday admin` command runs once per process, so it only
//! seeds a board from `GET /tip` and shows it with its stats.

pub mod board;
pub mod errors;
pub mod menu;

pub use board::{BoardStats, BoardTip, NewTip, TipBoard};
pub use errors::{AdminError, BoardError};
pub use menu::AdminMenu;
