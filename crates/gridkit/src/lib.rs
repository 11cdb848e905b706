//! `gridkit` is the grid interaction layer for ratatui apps: row selection,
//! single-slot inline cell editing, a transient context menu overlay, and
//! full-width detail rows.
//!
//! The state controllers (selection, edit session) live in `gridkit-core` and
//! are re-exported here; this crate adds the two rendering pieces and the
//! theme they share.
//!
//! ## How it fits together
//!
//! The host grid owns its rows, its layout, and its event loop. Row and cell
//! interactions call the controllers independently; the pieces never talk to
//! each other, only through the host:
//!
//! - click-to-select → [`selection::RowSelection::select_row`]
//! - double-click-to-edit → [`edit::EditSession::start_edit`]
//! - right-click → host opens a [`context_menu::ContextMenuState`] at the
//!   pointer position and routes further mouse events to a
//!   [`context_menu::MenuView`]
//! - an expanded row → host renders a [`detail_row::DetailRow`] beneath it
//!
//! Every operation returns a command/result value the host dispatches; no
//! callbacks, no background work, everything synchronous in the handler of
//! the triggering event.
//!
//! See `examples/editable_grid.rs` for a runnable crossterm wiring.
pub use gridkit_core::edit;
pub use gridkit_core::input;
pub use gridkit_core::keymap;
pub use gridkit_core::selection;

#[cfg(feature = "crossterm")]
pub use gridkit_core::crossterm_input;

pub mod context_menu;
pub mod detail_row;
pub mod render;
pub mod theme;
