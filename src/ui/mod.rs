pub mod app;
pub mod categories;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod products;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
