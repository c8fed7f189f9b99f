use serde::{Deserialize, Serialize};

/// Default position for newly created components
pub const DEFAULT_POSITION: Position = Position { x: 100, y: 100 };

/// Offset applied on both axes when duplicating a component
pub const DUPLICATE_OFFSET: i32 = 20;

/// The closed set of placeable element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Heading,
    Paragraph,
    Image,
    Button,
    Container,
    Link,
}

impl ComponentKind {
    /// Default content for a freshly created component of this kind
    pub fn default_content(self) -> &'static str {
        match self {
            ComponentKind::Heading => "Heading",
            ComponentKind::Paragraph => "Paragraph text",
            ComponentKind::Button => "Button",
            ComponentKind::Link => "Link",
            ComponentKind::Image | ComponentKind::Container => "",
        }
    }

    /// Per-kind baseline style preset
    pub fn default_style(self) -> Style {
        match self {
            ComponentKind::Heading => Style {
                font_size: Some("24px".to_string()),
                font_weight: Some("bold".to_string()),
                color: Some("#333333".to_string()),
                font_family: Some("Arial".to_string()),
                text_align: Some("left".to_string()),
                ..Style::default()
            },
            ComponentKind::Paragraph => Style {
                font_size: Some("16px".to_string()),
                color: Some("#555555".to_string()),
                font_family: Some("Arial".to_string()),
                text_align: Some("left".to_string()),
                line_height: Some("1.5".to_string()),
                ..Style::default()
            },
            ComponentKind::Button => Style {
                font_size: Some("16px".to_string()),
                color: Some("#ffffff".to_string()),
                background_color: Some("#3b82f6".to_string()),
                padding: Some("10px 20px".to_string()),
                border: Some("none".to_string()),
                border_radius: Some("4px".to_string()),
                cursor: Some("pointer".to_string()),
                ..Style::default()
            },
            ComponentKind::Link => Style {
                font_size: Some("16px".to_string()),
                color: Some("#3b82f6".to_string()),
                text_decoration: Some("underline".to_string()),
                cursor: Some("pointer".to_string()),
                ..Style::default()
            },
            ComponentKind::Container => Style {
                width: Some("300px".to_string()),
                height: Some("200px".to_string()),
                background_color: Some("#f9f9f9".to_string()),
                border: Some("1px dashed #cccccc".to_string()),
                display: Some("flex".to_string()),
                flex_direction: Some("column".to_string()),
                padding: Some("15px".to_string()),
                ..Style::default()
            },
            ComponentKind::Image => Style::default(),
        }
    }

    /// Kinds that accept inline text editing
    pub fn is_text(self) -> bool {
        matches!(
            self,
            ComponentKind::Heading
                | ComponentKind::Paragraph
                | ComponentKind::Button
                | ComponentKind::Link
        )
    }
}

/// Canvas pixel coordinates, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// The fixed set of style properties a component may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    FontSize,
    FontWeight,
    Color,
    FontFamily,
    TextAlign,
    LineHeight,
    BackgroundColor,
    Padding,
    Border,
    BorderRadius,
    Cursor,
    TextDecoration,
    Width,
    Height,
    Display,
    FlexDirection,
}

impl StyleProperty {
    /// CSS property name used when serializing to markup
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::Color => "color",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::TextAlign => "text-align",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Padding => "padding",
            StyleProperty::Border => "border",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::Cursor => "cursor",
            StyleProperty::TextDecoration => "text-decoration",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::Display => "display",
            StyleProperty::FlexDirection => "flex-direction",
        }
    }
}

/// Style mapping for one component.
///
/// Absent properties mean "use renderer default". The struct form keeps a
/// deterministic field order for export, unlike a hash map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
}

impl Style {
    fn slot_mut(&mut self, property: StyleProperty) -> &mut Option<String> {
        match property {
            StyleProperty::FontSize => &mut self.font_size,
            StyleProperty::FontWeight => &mut self.font_weight,
            StyleProperty::Color => &mut self.color,
            StyleProperty::FontFamily => &mut self.font_family,
            StyleProperty::TextAlign => &mut self.text_align,
            StyleProperty::LineHeight => &mut self.line_height,
            StyleProperty::BackgroundColor => &mut self.background_color,
            StyleProperty::Padding => &mut self.padding,
            StyleProperty::Border => &mut self.border,
            StyleProperty::BorderRadius => &mut self.border_radius,
            StyleProperty::Cursor => &mut self.cursor,
            StyleProperty::TextDecoration => &mut self.text_decoration,
            StyleProperty::Width => &mut self.width,
            StyleProperty::Height => &mut self.height,
            StyleProperty::Display => &mut self.display,
            StyleProperty::FlexDirection => &mut self.flex_direction,
        }
    }

    fn slot(&self, property: StyleProperty) -> &Option<String> {
        match property {
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::FontWeight => &self.font_weight,
            StyleProperty::Color => &self.color,
            StyleProperty::FontFamily => &self.font_family,
            StyleProperty::TextAlign => &self.text_align,
            StyleProperty::LineHeight => &self.line_height,
            StyleProperty::BackgroundColor => &self.background_color,
            StyleProperty::Padding => &self.padding,
            StyleProperty::Border => &self.border,
            StyleProperty::BorderRadius => &self.border_radius,
            StyleProperty::Cursor => &self.cursor,
            StyleProperty::TextDecoration => &self.text_decoration,
            StyleProperty::Width => &self.width,
            StyleProperty::Height => &self.height,
            StyleProperty::Display => &self.display,
            StyleProperty::FlexDirection => &self.flex_direction,
        }
    }

    /// Add or overwrite one property; other properties are untouched
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        *self.slot_mut(property) = Some(value.into());
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.slot(property).as_deref()
    }

    /// Present properties in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (StyleProperty, &str)> + '_ {
        [
            StyleProperty::FontSize,
            StyleProperty::FontWeight,
            StyleProperty::Color,
            StyleProperty::FontFamily,
            StyleProperty::TextAlign,
            StyleProperty::LineHeight,
            StyleProperty::BackgroundColor,
            StyleProperty::Padding,
            StyleProperty::Border,
            StyleProperty::BorderRadius,
            StyleProperty::Cursor,
            StyleProperty::TextDecoration,
            StyleProperty::Width,
            StyleProperty::Height,
            StyleProperty::Display,
            StyleProperty::FlexDirection,
        ]
        .into_iter()
        .filter_map(|property| self.get(property).map(|value| (property, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// One placed element on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    id: String,
    kind: ComponentKind,
    pub content: String,
    pub style: Style,
    pub position: Position,
    pub href: String,
}

impl Component {
    /// Create a component with kind-specific defaults
    pub fn new(id: String, kind: ComponentKind) -> Self {
        Self {
            id,
            kind,
            content: kind.default_content().to_string(),
            style: kind.default_style(),
            position: DEFAULT_POSITION,
            href: match kind {
                ComponentKind::Link => "https://example.com".to_string(),
                _ => String::new(),
            },
        }
    }

    /// Clone this component under a fresh id, offset by the duplicate delta
    pub fn duplicated_as(&self, id: String) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.position.x += DUPLICATE_OFFSET;
        copy.position.y += DUPLICATE_OFFSET;
        copy
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fixed at creation, never changes
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults() {
        let heading = Component::new("component-1".to_string(), ComponentKind::Heading);
        assert_eq!(heading.content, "Heading");
        assert_eq!(heading.position, DEFAULT_POSITION);
        assert_eq!(heading.style.get(StyleProperty::FontSize), Some("24px"));
        assert_eq!(heading.style.get(StyleProperty::FontWeight), Some("bold"));
        assert_eq!(heading.href, "");

        let link = Component::new("component-2".to_string(), ComponentKind::Link);
        assert_eq!(link.content, "Link");
        assert_eq!(link.href, "https://example.com");
        assert_eq!(link.style.get(StyleProperty::TextDecoration), Some("underline"));

        let image = Component::new("component-3".to_string(), ComponentKind::Image);
        assert_eq!(image.content, "");
        assert!(image.style.is_empty());
    }

    #[test]
    fn test_text_kinds() {
        assert!(ComponentKind::Heading.is_text());
        assert!(ComponentKind::Paragraph.is_text());
        assert!(ComponentKind::Button.is_text());
        assert!(ComponentKind::Link.is_text());
        assert!(!ComponentKind::Image.is_text());
        assert!(!ComponentKind::Container.is_text());
    }

    #[test]
    fn test_duplicate_offsets_position() {
        let mut source = Component::new("component-1".to_string(), ComponentKind::Button);
        source.position = Position { x: 150, y: 80 };

        let copy = source.duplicated_as("component-2".to_string());

        assert_eq!(copy.id(), "component-2");
        assert_eq!(copy.kind(), ComponentKind::Button);
        assert_eq!(copy.position, Position { x: 170, y: 100 });
        assert_eq!(copy.content, source.content);
        assert_eq!(copy.style, source.style);
    }

    #[test]
    fn test_style_set_and_entries_order() {
        let mut style = Style::default();
        style.set(StyleProperty::Color, "#ff0000");
        style.set(StyleProperty::FontSize, "18px");

        // Declaration order, not insertion order
        let entries: Vec<_> = style.entries().collect();
        assert_eq!(
            entries,
            vec![
                (StyleProperty::FontSize, "18px"),
                (StyleProperty::Color, "#ff0000"),
            ]
        );

        // Overwrite leaves other properties untouched
        style.set(StyleProperty::Color, "#00ff00");
        assert_eq!(style.get(StyleProperty::Color), Some("#00ff00"));
        assert_eq!(style.get(StyleProperty::FontSize), Some("18px"));
    }

    #[test]
    fn test_style_serializes_camel_case() {
        let style = ComponentKind::Container.default_style();
        let json = serde_json::to_value(&style).unwrap();

        assert_eq!(json["flexDirection"], "column");
        assert_eq!(json["backgroundColor"], "#f9f9f9");
        // Absent properties are omitted entirely
        assert!(json.get("fontSize").is_none());
    }
}
