//! # Pagecanvas Editor
//!
//! Core document editing engine for Pagecanvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: typed components + defaults          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Apply mutations (always total, no-ops    │
//! │    on missing ids)                          │
//! │  - Snapshot-based undo/redo ring (50 deep)  │
//! │  - Selection / drag / inline-edit state     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: Document → static markup     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The component sequence is source of truth**: history entries and
//!    exports are derived, structurally independent copies
//! 2. **Operations are total**: mutating a missing id, undoing at the seed
//!    entry, redoing at the tip are silent no-ops, never errors
//! 3. **Gestures are atomic**: a drag mutates live state continuously but
//!    commits exactly one history entry at pointer-up
//!
//! ## Usage
//!
//! ```rust
//! use pagecanvas_editor::{ComponentKind, EditSession, Property};
//!
//! let mut session = EditSession::new();
//! session.add_component(ComponentKind::Heading);
//! session.update_selected_property(Property::Content, "Hello");
//! session.undo();
//! session.redo();
//! ```

mod document;
mod history;
mod mutations;
mod session;

pub use document::{Document, Property};
pub use history::{History, MAX_HISTORY_ENTRIES};
pub use mutations::{Applied, Mutation};
pub use session::{EditSession, KeyCommand};

// Re-export model types for convenience
pub use pagecanvas_model::{
    Component, ComponentKind, Position, SiteSettings, SiteSettingsUpdate, Style, StyleProperty,
};
