//! Product catalog built on MVI state holders.
//!
//! ```text
//! Repository ──→ ViewModel (StateHolder) ──→ Coordinator ──→ TUI
//!                                                │
//!                                                └──→ Navigator (NavStack)
//! ```
//!
//! [`container::Container`] wires the graph; [`ui::runtime::run`] drives it
//! from the terminal.

pub mod args;
pub mod config;
pub mod container;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod repository;
pub mod ui;
