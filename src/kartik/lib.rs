//! # Kartik's Card
//!
//! An interactive business card for the terminal: a bordered profile card, a short
//! list of projects, and a menu that opens links in the user's browser or mail client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses flags, installs logging, wires real collaborators │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu (menu.rs)                                             │
//! │  - Main menu / projects screen state machine                │
//! │  - Talks to the outside only through the three seams below  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┼──────────────┐
//!               ▼              ▼              ▼
//!         ┌──────────┐   ┌──────────┐   ┌──────────┐
//!         │ Prompter │   │  Opener  │   │ Terminal │
//!         └──────────┘   └──────────┘   └──────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Layout (layout.rs, card.rs)                                │
//! │  - Pure string functions, no I/O                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Layout**: unit tests on widths, padding and wrapping with styled input.
//! 2. **Menu**: whole sessions driven by `test_utils` doubles: a scripted prompt,
//!    a recording (or failing) opener, and an in-memory terminal.
//! 3. **Binary**: `tests/` runs the built executable for `--version` and the
//!    non-interactive failure path.
//!
//! ## Module Overview
//!
//! - [`layout`]: visible width, centering, left alignment, word wrap
//! - [`card`]: the bordered profile card
//! - [`menu`]: the interactive loop
//! - [`profile`]: the embedded profile and project data
//! - [`opener`], [`prompt`], [`terminal`]: collaborator traits and their real implementations
//! - [`styles`]: named console styles
//! - [`error`]: error types

pub mod card;
pub mod error;
pub mod layout;
pub mod menu;
pub mod opener;
pub mod profile;
pub mod prompt;
pub mod styles;
pub mod terminal;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
