//! # Pagecanvas HTML Compiler
//!
//! Deterministic, side-effect-free translation of a document snapshot into
//! one self-contained static HTML string, plus the `website.html` file
//! export — the sole persisted artifact of an editing session.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{
    compile_to_html, export_to_file, CompileOptions, ExportError, EXPORT_FILE_NAME,
    PLACEHOLDER_IMAGE,
};
