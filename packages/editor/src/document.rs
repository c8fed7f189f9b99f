//! # Document Store
//!
//! The ordered component sequence plus page-level state.
//!
//! All operations are total: an operation addressing a non-existent id
//! returns `false` (or `None`) instead of failing. "Nothing selected" is a
//! valid, frequent state, so missing targets are routine, not errors.

use pagecanvas_model::{
    Component, ComponentKind, IdGenerator, Position, SiteSettings, SiteSettingsUpdate,
    StyleProperty,
};
use serde::{Deserialize, Serialize};

/// Top-level mutable field addressed by `update_property`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Content,
    Href,
}

/// Editable page document
#[derive(Debug)]
pub struct Document {
    /// Insertion order determines paint and export order
    components: Vec<Component>,

    canvas_background: String,
    site_settings: SiteSettings,

    /// Increments on each applied change
    version: u64,

    ids: IdGenerator,
}

impl Document {
    pub fn new() -> Self {
        let site_settings = SiteSettings::default();
        let ids = IdGenerator::new(&site_settings.title);

        Self {
            components: Vec::new(),
            canvas_background: "#ffffff".to_string(),
            site_settings,
            version: 0,
            ids,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn canvas_background(&self) -> &str {
        &self.canvas_background
    }

    pub fn site_settings(&self) -> &SiteSettings {
        &self.site_settings
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn find(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    /// Append a new component with kind-specific defaults; returns its id
    pub fn add_component(&mut self, kind: ComponentKind) -> String {
        let id = self.ids.new_id();
        tracing::debug!(?kind, id = %id, "add component");

        self.components.push(Component::new(id.clone(), kind));
        self.version += 1;
        id
    }

    /// Replace `content` or `href` of the addressed component
    pub fn update_property(&mut self, id: &str, property: Property, value: &str) -> bool {
        let Some(component) = self.find_mut(id) else {
            return false;
        };

        match property {
            Property::Content => component.content = value.to_string(),
            Property::Href => component.href = value.to_string(),
        }

        self.version += 1;
        true
    }

    /// Merge one style property into the addressed component's style
    pub fn update_style(&mut self, id: &str, property: StyleProperty, value: &str) -> bool {
        let Some(component) = self.find_mut(id) else {
            return false;
        };

        component.style.set(property, value);
        self.version += 1;
        true
    }

    pub fn delete_component(&mut self, id: &str) -> bool {
        let Some(index) = self.components.iter().position(|c| c.id() == id) else {
            return false;
        };

        tracing::debug!(id = %id, "delete component");
        self.components.remove(index);
        self.version += 1;
        true
    }

    /// Clone the addressed component under a fresh id, offset by (+20, +20)
    pub fn duplicate_component(&mut self, id: &str) -> Option<String> {
        let source = self.find(id)?.clone();
        let new_id = self.ids.new_id();

        self.components.push(source.duplicated_as(new_id.clone()));
        self.version += 1;
        Some(new_id)
    }

    /// Overwrite position. Issued continuously during a drag; the caller is
    /// responsible for committing history once at gesture end.
    pub fn move_component(&mut self, id: &str, x: i32, y: i32) -> bool {
        let Some(component) = self.find_mut(id) else {
            return false;
        };

        component.position = Position { x, y };
        self.version += 1;
        true
    }

    pub fn set_canvas_background(&mut self, color: &str) {
        self.canvas_background = color.to_string();
        self.version += 1;
    }

    pub fn set_site_settings(&mut self, update: SiteSettingsUpdate) {
        self.site_settings.apply(update);
        self.version += 1;
    }

    /// Replace the whole component sequence by value (undo/redo restore).
    /// Restored components never share identity with live ones.
    pub fn restore_components(&mut self, components: Vec<Component>) {
        self.components = components;
        self.version += 1;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
