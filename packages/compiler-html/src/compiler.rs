use pagecraft_model::{css_property_name, ComponentId, ComponentNode, ComponentTree, ComponentType, TreeError};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid component tree: {0}")]
    InvalidTree(#[from] TreeError),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit each component's styles as a `style` attribute
    pub inline_styles: bool,
    /// Emit `class="component-N"` instead (pair with the CSS export)
    pub use_classes: bool,
    /// Stylesheet linked from the head when `use_classes` is set
    pub stylesheet: String,
    /// Leave out hidden components and everything below them
    pub skip_hidden: bool,
    /// Document title
    pub title: String,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_styles: true,
            use_classes: false,
            stylesheet: "styles.css".to_string(),
            skip_hidden: false,
            title: "Generated Page".to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

const RESET_CSS: &[&str] = &[
    "* {",
    "  margin: 0;",
    "  padding: 0;",
    "  box-sizing: border-box;",
    "}",
    "",
    "body {",
    "  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;",
    "  line-height: 1.5;",
    "}",
];

struct Context<'a> {
    options: CompileOptions,
    /// Pre-order number of every node, shared with the CSS export
    class_index: HashMap<&'a ComponentId, usize>,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: CompileOptions, tree: &'a ComponentTree) -> Self {
        let class_index = tree
            .walk()
            .enumerate()
            .map(|(index, (_, node))| (&node.id, index))
            .collect();

        Self {
            options,
            class_index,
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
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
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

/// Compile a component tree to a standalone HTML document
pub fn compile_to_html(
    tree: &ComponentTree,
    options: CompileOptions,
) -> Result<String, CompileError> {
    tree.validate()?;

    let mut ctx = Context::new(options, tree);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    for node in tree.roots() {
        compile_node(tree, node, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    tracing::debug!(components = tree.len(), "compiled html");
    Ok(ctx.get_output())
}

fn compile_head(ctx: &mut Context<'_>) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    if ctx.options.use_classes {
        let link = format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(&ctx.options.stylesheet)
        );
        ctx.add_line(&link);
    }

    ctx.add_line("<style>");
    ctx.indent();
    for line in RESET_CSS {
        if line.is_empty() {
            if ctx.options.pretty {
                ctx.add("\n");
            }
        } else {
            ctx.add_line(line);
        }
    }
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(tree: &ComponentTree, node: &ComponentNode, ctx: &mut Context<'_>) {
    if ctx.options.skip_hidden && node.hidden {
        return;
    }

    let styling = styling_attribute(node, ctx);

    match node.kind {
        ComponentType::Text => compile_leaf("p", &prop_or(node, "text", "Text"), &styling, ctx),
        ComponentType::Heading => {
            compile_leaf("h1", &prop_or(node, "text", "Heading"), &styling, ctx)
        }
        ComponentType::Button => {
            compile_leaf("button", &prop_or(node, "text", "Button"), &styling, ctx)
        }

        ComponentType::Image => ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            escape_html(&prop_or(node, "src", "")),
            escape_html(&prop_or(node, "alt", "")),
            styling
        )),
        ComponentType::Input => ctx.add_line(&format!(
            "<input type=\"{}\" placeholder=\"{}\"{} />",
            escape_html(&prop_or(node, "type", "text")),
            escape_html(&prop_or(node, "placeholder", "")),
            styling
        )),
        ComponentType::Textarea => ctx.add_line(&format!(
            "<textarea placeholder=\"{}\" rows=\"{}\"{}></textarea>",
            escape_html(&prop_or(node, "placeholder", "")),
            escape_html(&prop_or(node, "rows", "4")),
            styling
        )),

        ComponentType::Container
        | ComponentType::Card
        | ComponentType::Row
        | ComponentType::Column => compile_block("div", tree, node, &styling, ctx),
        ComponentType::Navbar => compile_block("nav", tree, node, &styling, ctx),
        ComponentType::Hero => compile_block("section", tree, node, &styling, ctx),
        ComponentType::Footer => compile_block("footer", tree, node, &styling, ctx),
    }
}

fn compile_leaf(tag: &str, text: &str, styling: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!("<{tag}{styling}>{}</{tag}>", escape_html(text)));
}

fn compile_block(
    tag: &str,
    tree: &ComponentTree,
    node: &ComponentNode,
    styling: &str,
    ctx: &mut Context<'_>,
) {
    ctx.add_line(&format!("<{tag}{styling}>"));
    ctx.indent();

    for child in tree.children(&node.id) {
        compile_node(tree, child, ctx);
    }

    // Footers carry their own line of text after any children
    if node.kind == ComponentType::Footer {
        if let Some(text) = node.prop_str("text").filter(|text| !text.is_empty()) {
            ctx.add_line(&format!("<p>{}</p>", escape_html(text)));
        }
    }

    ctx.dedent();
    ctx.add_line(&format!("</{tag}>"));
}

/// ` style="..."`, ` class="component-N"`, or nothing
fn styling_attribute(node: &ComponentNode, ctx: &Context<'_>) -> String {
    if ctx.options.use_classes {
        return match ctx.class_index.get(&node.id) {
            Some(index) => format!(" class=\"component-{}\"", index),
            None => String::new(),
        };
    }

    if !ctx.options.inline_styles || node.styles.is_empty() {
        return String::new();
    }

    let declarations = node
        .styles
        .iter()
        .map(|(key, value)| format!("{}: {}", css_property_name(key), value))
        .collect::<Vec<_>>()
        .join("; ");
    format!(" style=\"{}\"", escape_html(&declarations))
}

/// Prop rendered as text, or `fallback` when it is missing or empty
fn prop_or(node: &ComponentNode, key: &str, fallback: &str) -> String {
    match node.props.get(key).map(|value| value.to_string()) {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
