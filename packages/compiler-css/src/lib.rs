use pagecraft_model::{css_property_name, ComponentNode, ComponentTree};
use std::fmt::Write;

/// Compile a component tree to a stylesheet
///
/// Every component gets a `.component-N` rule, numbered in pre-order from 0.
/// The HTML export numbers its `class` attributes the same way.
pub fn compile_to_css(tree: &ComponentTree) -> String {
    let mut css = String::new();

    for (index, (_, node)) in tree.walk().enumerate() {
        write_rule(&mut css, index, node);
    }

    tracing::debug!(rules = tree.len(), "compiled css");
    css
}

fn write_rule(css: &mut String, index: usize, node: &ComponentNode) {
    // Writing into a String cannot fail
    let _ = writeln!(css, ".component-{} {{", index);
    for (key, value) in &node.styles {
        let _ = writeln!(css, "  {}: {};", css_property_name(key), value);
    }
    css.push_str("}\n\n");
}
