//! # Document Mutations
//!
//! High-level semantic operations on a page document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user action
//! 2. **Total**: A mutation addressing a missing id applies as a no-op
//! 3. **Serializable**: Mutations cross the boundary from the surrounding
//!    UI (toolbars, property panels, pickers) as plain data
//!
//! ## History Semantics
//!
//! Every mutation commits a history entry when applied through a session,
//! with two exceptions:
//!
//! - `MoveComponent` is issued continuously during a drag; history is
//!   committed once at gesture end, not per intermediate position
//! - `SetCanvasBackground` / `SetSiteSettings` mutate page-level state
//!   that history does not capture

use crate::document::{Document, Property};
use pagecanvas_model::{ComponentKind, SiteSettingsUpdate, StyleProperty};
use serde::{Deserialize, Serialize};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new component with kind defaults
    AddComponent { kind: ComponentKind },

    /// Replace a top-level field (content or href)
    UpdateProperty {
        id: String,
        property: Property,
        value: String,
    },

    /// Merge one style property into the component's style
    UpdateStyle {
        id: String,
        property: StyleProperty,
        value: String,
    },

    /// Remove the component
    DeleteComponent { id: String },

    /// Clone the component under a fresh id, offset (+20, +20)
    DuplicateComponent { id: String },

    /// Overwrite position (continuous during drag)
    MoveComponent { id: String, x: i32, y: i32 },

    /// Set the page background color
    SetCanvasBackground { color: String },

    /// Patch page metadata
    SetSiteSettings { update: SiteSettingsUpdate },
}

/// Outcome of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Nothing matched; document untouched
    Unchanged,

    /// Document changed in place
    Changed,

    /// A new component exists (add, duplicate)
    Created { id: String },

    /// A component ceased to exist
    Removed { id: String },
}

impl Mutation {
    /// Apply to a document. Total: missing targets yield `Unchanged`.
    pub fn apply_to(&self, document: &mut Document) -> Applied {
        match self {
            Mutation::AddComponent { kind } => Applied::Created {
                id: document.add_component(*kind),
            },

            Mutation::UpdateProperty {
                id,
                property,
                value,
            } => {
                if document.update_property(id, *property, value) {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                }
            }

            Mutation::UpdateStyle {
                id,
                property,
                value,
            } => {
                if document.update_style(id, *property, value) {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                }
            }

            Mutation::DeleteComponent { id } => {
                if document.delete_component(id) {
                    Applied::Removed { id: id.clone() }
                } else {
                    Applied::Unchanged
                }
            }

            Mutation::DuplicateComponent { id } => match document.duplicate_component(id) {
                Some(id) => Applied::Created { id },
                None => Applied::Unchanged,
            },

            Mutation::MoveComponent { id, x, y } => {
                if document.move_component(id, *x, *y) {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                }
            }

            Mutation::SetCanvasBackground { color } => {
                document.set_canvas_background(color);
                Applied::Changed
            }

            Mutation::SetSiteSettings { update } => {
                document.set_site_settings(update.clone());
                Applied::Changed
            }
        }
    }

    /// Whether applying this mutation records a history entry
    pub fn commits_history(&self) -> bool {
        !matches!(
            self,
            Mutation::MoveComponent { .. }
                | Mutation::SetCanvasBackground { .. }
                | Mutation::SetSiteSettings { .. }
        )
    }
}
