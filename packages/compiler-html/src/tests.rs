use crate::{compile_to_html, export_to_file, CompileOptions, EXPORT_FILE_NAME, PLACEHOLDER_IMAGE};
use pagecanvas_editor::{ComponentKind, Document, Property, SiteSettingsUpdate, StyleProperty};

#[test]
fn test_compile_empty_document() {
    let doc = Document::new();
    let html = compile_to_html(&doc, CompileOptions::default());

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>My Website</title>"));
    assert!(html.contains("<div class=\"container\">"));
    assert!(html.contains("background-color: #ffffff;"));
    assert!(html.contains("</html>"));

    // No element bodies on an empty canvas
    assert!(!html.contains("<h1"));
    assert!(!html.contains("<button"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_compile_styled_heading() {
    let mut doc = Document::new();
    let id = doc.add_component(ComponentKind::Heading);
    doc.update_property(&id, Property::Content, "Hello");
    doc.update_style(&id, StyleProperty::Color, "#ff0000");

    let html = compile_to_html(&doc, CompileOptions::default());

    assert!(html.contains("<h1"));
    assert!(html.contains(">Hello</h1>"));
    assert!(html.contains("color: #ff0000;"));
    assert!(html.contains("position: absolute; left: 100px; top: 100px;"));
}

#[test]
fn test_tag_per_kind() {
    let mut doc = Document::new();
    doc.add_component(ComponentKind::Heading);
    doc.add_component(ComponentKind::Paragraph);
    doc.add_component(ComponentKind::Button);
    doc.add_component(ComponentKind::Link);
    doc.add_component(ComponentKind::Image);
    doc.add_component(ComponentKind::Container);

    let html = compile_to_html(&doc, CompileOptions::default());

    assert!(html.contains("<h1"));
    assert!(html.contains("<p "));
    assert!(html.contains("<button"));
    assert!(html.contains("<a href=\"https://example.com\""));
    assert!(html.contains("<img"));
    assert!(html.contains("<div style="));
}

#[test]
fn test_components_emitted_in_sequence_order() {
    let mut doc = Document::new();
    doc.add_component(ComponentKind::Container);
    doc.add_component(ComponentKind::Button);

    let html = compile_to_html(&doc, CompileOptions::default());

    let container_at = html.find("<div style=").unwrap();
    let button_at = html.find("<button").unwrap();
    assert!(container_at < button_at);
}

#[test]
fn test_empty_image_uses_placeholder() {
    let mut doc = Document::new();
    let id = doc.add_component(ComponentKind::Image);

    let html = compile_to_html(&doc, CompileOptions::default());
    assert!(html.contains(&format!("<img src=\"{}\" alt=\"Image\"", PLACEHOLDER_IMAGE)));

    doc.update_property(&id, Property::Content, "https://cdn.example.com/cat.png");
    let html = compile_to_html(&doc, CompileOptions::default());
    assert!(html.contains("<img src=\"https://cdn.example.com/cat.png\" alt=\"Image\""));
}

#[test]
fn test_style_properties_in_declaration_order() {
    let mut doc = Document::new();
    let id = doc.add_component(ComponentKind::Image);
    // Set out of declaration order
    doc.update_style(&id, StyleProperty::Height, "150px");
    doc.update_style(&id, StyleProperty::Width, "200px");

    let html = compile_to_html(&doc, CompileOptions::default());
    assert!(html.contains("width: 200px; height: 150px;"));
}

#[test]
fn test_head_embeds_site_settings() {
    let mut doc = Document::new();
    doc.set_site_settings(SiteSettingsUpdate {
        title: Some("Portfolio".to_string()),
        description: Some("Selected work".to_string()),
        author: Some("Sam Doe".to_string()),
    });
    doc.set_canvas_background("#fafafa");

    let html = compile_to_html(&doc, CompileOptions::default());

    assert!(html.contains("<title>Portfolio</title>"));
    assert!(html.contains("<meta name=\"description\" content=\"Selected work\">"));
    assert!(html.contains("<meta name=\"author\" content=\"Sam Doe\">"));
    assert!(html.contains("background-color: #fafafa;"));
}

#[test]
fn test_user_text_is_embedded_verbatim() {
    let mut doc = Document::new();
    doc.set_site_settings(SiteSettingsUpdate {
        title: Some("A & B <Studio>".to_string()),
        ..SiteSettingsUpdate::default()
    });
    let id = doc.add_component(ComponentKind::Paragraph);
    doc.update_property(&id, Property::Content, "5 < 6 & \"quoted\"");

    let html = compile_to_html(&doc, CompileOptions::default());

    // Compatibility with the editor's contract: no escaping
    assert!(html.contains("<title>A & B <Studio></title>"));
    assert!(html.contains(">5 < 6 & \"quoted\"</p>"));
}

#[test]
fn test_compact_output() {
    let mut doc = Document::new();
    doc.add_component(ComponentKind::Heading);

    let html = compile_to_html(
        &doc,
        CompileOptions {
            pretty: false,
            indent: String::new(),
        },
    );

    assert!(!html.contains('\n'));
    assert!(html.contains("<h1"));
}

#[test]
fn test_export_writes_website_html() {
    let mut doc = Document::new();
    doc.add_component(ComponentKind::Heading);

    let dir = std::env::temp_dir().join(format!("pagecanvas-export-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let path = export_to_file(&doc, &dir).unwrap();
    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<h1"));

    std::fs::remove_dir_all(&dir).unwrap();
}
