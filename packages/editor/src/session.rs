//! # Edit Session
//!
//! Tracks which component is selected, being text-edited, or being
//! dragged, and coordinates mutations with history commits.
//!
//! Interaction state lives here, in one explicit struct, so the document
//! store and the history log stay free of UI concerns.
//!
//! Pointer coordinates are canvas-relative: the surrounding shell
//! subtracts the canvas origin before handing them in.

use crate::document::{Document, Property};
use crate::history::History;
use crate::mutations::{Applied, Mutation};
use pagecanvas_model::{ComponentKind, Position, StyleProperty};

/// Active drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
struct DragState {
    id: String,
    /// Pointer offset from the component's top-left at gesture start
    offset: Position,
}

/// Keyboard commands the editor responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Undo,
    Redo,
    DeleteSelected,
    DuplicateSelected,
}

impl KeyCommand {
    /// Map a key press to a command: Ctrl+Z, Ctrl+Y, Delete, Ctrl+D
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match (key, ctrl) {
            ("z", true) => Some(KeyCommand::Undo),
            ("y", true) => Some(KeyCommand::Redo),
            ("Delete", _) => Some(KeyCommand::DeleteSelected),
            ("d", true) => Some(KeyCommand::DuplicateSelected),
            _ => None,
        }
    }
}

/// Single-user editing session over one document
#[derive(Debug)]
pub struct EditSession {
    document: Document,
    history: History,

    selected: Option<String>,
    editing: Option<String>,
    drag: Option<DragState>,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            history: History::new(),
            selected: None,
            editing: None,
            drag: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.id.as_str())
    }

    fn commit(&mut self) {
        self.history.commit(self.document.components());
    }

    /// Apply a mutation, committing history and tracking selection effects
    pub fn apply(&mut self, mutation: Mutation) {
        let commits = mutation.commits_history();

        match mutation.apply_to(&mut self.document) {
            Applied::Created { id } => {
                self.selected = Some(id);
                if commits {
                    self.commit();
                }
            }

            Applied::Removed { id } => {
                // A deleted component cannot stay the selection, drag, or
                // edit target
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                }
                if self.editing.as_deref() == Some(id.as_str()) {
                    self.editing = None;
                }
                if self.dragging() == Some(id.as_str()) {
                    self.drag = None;
                }
                if commits {
                    self.commit();
                }
            }

            Applied::Changed => {
                if commits {
                    self.commit();
                }
            }

            Applied::Unchanged => {}
        }
    }

    /// Append a component; it becomes the selection
    pub fn add_component(&mut self, kind: ComponentKind) {
        self.apply(Mutation::AddComponent { kind });
    }

    // --- selection ---

    /// Select a component; missing ids are ignored
    pub fn select(&mut self, id: &str) {
        if self.document.find(id).is_some() {
            self.selected = Some(id.to_string());
        }
    }

    /// Click on empty canvas
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected.clone() {
            self.apply(Mutation::DeleteComponent { id });
        }
    }

    pub fn duplicate_selected(&mut self) {
        if let Some(id) = self.selected.clone() {
            self.apply(Mutation::DuplicateComponent { id });
        }
    }

    pub fn update_selected_property(&mut self, property: Property, value: &str) {
        if let Some(id) = self.selected.clone() {
            self.apply(Mutation::UpdateProperty {
                id,
                property,
                value: value.to_string(),
            });
        }
    }

    pub fn update_selected_style(&mut self, property: StyleProperty, value: &str) {
        if let Some(id) = self.selected.clone() {
            self.apply(Mutation::UpdateStyle {
                id,
                property,
                value: value.to_string(),
            });
        }
    }

    // --- drag gesture ---

    /// Pointer-down on a component. Refused while a text edit is active.
    /// Also selects the component.
    pub fn begin_drag(&mut self, id: &str, pointer: Position) {
        if self.editing.is_some() {
            return;
        }
        let Some(component) = self.document.find(id) else {
            return;
        };

        self.drag = Some(DragState {
            id: id.to_string(),
            offset: Position {
                x: pointer.x - component.position.x,
                y: pointer.y - component.position.y,
            },
        });
        self.selected = Some(id.to_string());
    }

    /// Pointer-move. Mutates live position for visual feedback but does
    /// not commit history. A move arriving after pointer-up is not part of
    /// any gesture and is dropped.
    pub fn drag_to(&mut self, pointer: Position) {
        let Some(drag) = &self.drag else {
            return;
        };
        let id = drag.id.clone();
        let offset = drag.offset;

        self.apply(Mutation::MoveComponent {
            id,
            x: pointer.x - offset.x,
            y: pointer.y - offset.y,
        });
    }

    /// Pointer-up: close the gesture and commit the whole drag as one
    /// history entry
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.commit();
        }
    }

    // --- inline text editing ---

    /// Double-click on a text-bearing component enters edit mode
    pub fn begin_edit(&mut self, id: &str) {
        let Some(component) = self.document.find(id) else {
            return;
        };
        if !component.kind().is_text() {
            return;
        }

        self.editing = Some(id.to_string());
    }

    /// Live content update while editing; committed on `end_edit`
    pub fn edit_content(&mut self, value: &str) {
        let Some(id) = self.editing.clone() else {
            return;
        };
        self.document.update_property(&id, Property::Content, value);
    }

    /// Losing focus exits edit mode and commits the edited content
    pub fn end_edit(&mut self) {
        if self.editing.take().is_some() {
            self.commit();
        }
    }

    // --- history ---

    pub fn undo(&mut self) {
        if let Some(components) = self.history.undo() {
            tracing::debug!(cursor = self.history.cursor(), "undo");
            self.document.restore_components(components);
        }
    }

    pub fn redo(&mut self) {
        if let Some(components) = self.history.redo() {
            tracing::debug!(cursor = self.history.cursor(), "redo");
            self.document.restore_components(components);
        }
    }

    pub fn handle_key(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Undo => self.undo(),
            KeyCommand::Redo => self.redo(),
            KeyCommand::DeleteSelected => self.delete_selected(),
            KeyCommand::DuplicateSelected => self.duplicate_selected(),
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
