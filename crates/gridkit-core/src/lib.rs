//! `gridkit-core` is the headless interaction layer for grid-style TUIs:
//! selection tracking and inline cell-edit sessions, with no rendering and no
//! event-loop of its own.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: the host translates its input events into calls on
//!   the controllers and dispatches the values they return.
//! - No callbacks: operations return command/result values
//!   ([`selection::SelectionEvent`], [`edit::CommitRequest`]) instead of
//!   calling into the host, so any dispatch convention works.
//! - Total operations: nothing here returns `Result`; out-of-state calls are
//!   documented no-ops.
//! - One controller per grid instance; instances share no state.
//!
//! ## Controlled vs. uncontrolled selection
//!
//! [`selection::RowSelection`] fixes its mode at construction. Uncontrolled
//! controllers own the selection set. Controlled controllers mirror a
//! host-owned set: operations report the requested change without writing the
//! mirror, and the host syncs the applied state back with
//! [`selection::RowSelection::sync_selected`]. There is deliberately no path
//! that writes the mirror behind the host's back.
//!
//! The rendering side (context menu overlay, detail rows) lives in the
//! companion `gridkit` crate.
pub mod edit;
pub mod input;
pub mod keymap;
pub mod selection;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
