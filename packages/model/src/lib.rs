//! # Pagecanvas Model
//!
//! Typed representation of placed page elements.
//!
//! A [`Component`] is one positioned, styled element on the canvas. Its
//! kind is a closed set ([`ComponentKind`]) fixed at creation, so default
//! lookup and export dispatch are exhaustive matches — adding a new kind
//! is a compile-time-checked extension point.

mod component;
mod id_generator;
mod settings;

pub use component::{
    Component, ComponentKind, Position, Style, StyleProperty, DEFAULT_POSITION, DUPLICATE_OFFSET,
};
pub use id_generator::{get_document_seed, IdGenerator};
pub use settings::{SiteSettings, SiteSettingsUpdate};
