//! CLI command implementations.
//!
//! - [`regions`] - List selectable region names (the dropdown contents)
//! - [`select`] - Apply selections non-interactively, then render once
//! - [`session`] - Interactive selection loop

pub mod regions;
pub mod select;
pub mod session;
