use pagecanvas_editor::Document;
use pagecanvas_model::{Component, ComponentKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name offered for the exported page
pub const EXPORT_FILE_NAME: &str = "website.html";

/// Image source used when an image component has no content
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Errors that can occur during file export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print the page shell
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document snapshot to a self-contained HTML page.
///
/// Deterministic given the snapshot: components are emitted in sequence
/// order, style properties in declaration order. User-supplied text
/// (title, description, author, content, href) is embedded verbatim.
pub fn compile_to_html(document: &Document, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(document, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"container\">");
    ctx.indent();

    for component in document.components() {
        compile_component(component, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(document: &Document, ctx: &mut Context) {
    let settings = document.site_settings();

    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!(
        "<meta name=\"description\" content=\"{}\">",
        settings.description
    ));
    ctx.add_line(&format!(
        "<meta name=\"author\" content=\"{}\">",
        settings.author
    ));
    ctx.add_line(&format!("<title>{}</title>", settings.title));

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line(&format!(
        "body {{ margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: {}; }}",
        document.canvas_background()
    ));
    ctx.add_line(
        ".container { position: relative; width: 100%; max-width: 1200px; margin: 0 auto; min-height: 100vh; }",
    );
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_component(component: &Component, ctx: &mut Context) {
    let style = style_attribute(component);
    let content = &component.content;

    let line = match component.kind() {
        ComponentKind::Heading => format!("<h1 {}>{}</h1>", style, content),
        ComponentKind::Paragraph => format!("<p {}>{}</p>", style, content),
        ComponentKind::Button => format!("<button {}>{}</button>", style, content),
        ComponentKind::Link => {
            format!("<a href=\"{}\" {}>{}</a>", component.href, style, content)
        }
        ComponentKind::Image => {
            let src = if content.is_empty() {
                PLACEHOLDER_IMAGE
            } else {
                content
            };
            format!("<img src=\"{}\" alt=\"Image\" {} />", src, style)
        }
        ComponentKind::Container => format!("<div {}>{}</div>", style, content),
    };

    ctx.add_line(&line);
}

/// Inline style attribute: position first, then present style properties
/// in declaration order
fn style_attribute(component: &Component) -> String {
    let mut style = format!(
        "position: absolute; left: {}px; top: {}px;",
        component.position.x, component.position.y
    );

    for (property, value) in component.style.entries() {
        style.push_str(&format!(" {}: {};", property.css_name(), value));
    }

    format!("style=\"{}\"", style)
}

/// Write the compiled page as `website.html` under `dir`
pub fn export_to_file(document: &Document, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);
    let html = compile_to_html(document, CompileOptions::default());

    std::fs::write(&path, html)?;
    Ok(path)
}
