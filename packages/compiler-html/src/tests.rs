use crate::{compile_to_html, CompileError, CompileOptions};
use pagecraft_model::{
    ComponentId, ComponentTree, ComponentType, PropValue, SequentialIdGenerator, StyleMap,
};

struct Builder {
    tree: ComponentTree,
    ids: SequentialIdGenerator,
}

impl Builder {
    fn new() -> Self {
        Self {
            tree: ComponentTree::new(),
            ids: SequentialIdGenerator::new("c"),
        }
    }

    fn add(&mut self, kind: ComponentType, parent: Option<&ComponentId>) -> ComponentId {
        self.tree
            .insert(&mut self.ids, kind, kind.as_str(), parent)
            .id
            .clone()
    }

    fn prop(&mut self, id: &ComponentId, key: &str, value: impl Into<PropValue>) {
        let node = self.tree.get_mut(id).unwrap();
        node.props.insert(key.to_string(), value.into());
    }

    fn clear_styles(&mut self, id: &ComponentId) {
        self.tree.get_mut(id).unwrap().styles = StyleMap::new();
    }
}

#[test]
fn test_compile_empty_tree() {
    let html = compile_to_html(&ComponentTree::new(), CompileOptions::default())
        .expect("Failed to compile");

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert!(html.contains("<title>Generated Page</title>"));
    assert!(html.contains("box-sizing: border-box;"));
    assert!(html.contains("<body>\n</body>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_compile_text_leaves() {
    let mut b = Builder::new();
    let text = b.add(ComponentType::Text, None);
    let heading = b.add(ComponentType::Heading, None);
    let button = b.add(ComponentType::Button, None);
    for id in [&text, &heading, &button] {
        b.clear_styles(id);
    }
    b.prop(&text, "text", "Hello");
    b.prop(&heading, "text", "");
    b.tree.get_mut(&button).unwrap().props.clear();

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    println!("Generated HTML:\n{}", html);

    assert!(html.contains("<p>Hello</p>"));
    // Empty and missing props fall back
    assert!(html.contains("<h1>Heading</h1>"));
    assert!(html.contains("<button>Button</button>"));
}

#[test]
fn test_compile_null_and_list_props() {
    let mut b = Builder::new();
    let text = b.add(ComponentType::Text, None);
    let button = b.add(ComponentType::Button, None);
    for id in [&text, &button] {
        b.clear_styles(id);
    }
    b.prop(&text, "text", PropValue::Null);
    b.prop(&button, "text", vec!["Buy", "now"]);

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains("<p>Text</p>"));
    assert!(html.contains("<button>Buy, now</button>"));
}

#[test]
fn test_compile_void_elements_and_fallbacks() {
    let mut b = Builder::new();
    let image = b.add(ComponentType::Image, None);
    let input = b.add(ComponentType::Input, None);
    let textarea = b.add(ComponentType::Textarea, None);
    for id in [&image, &input, &textarea] {
        b.clear_styles(id);
        b.tree.get_mut(id).unwrap().props.clear();
    }

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains("<img src=\"\" alt=\"\" />"));
    assert!(html.contains("<input type=\"text\" placeholder=\"\" />"));
    assert!(html.contains("<textarea placeholder=\"\" rows=\"4\"></textarea>"));
}

#[test]
fn test_compile_numeric_prop() {
    let mut b = Builder::new();
    let textarea = b.add(ComponentType::Textarea, None);
    b.clear_styles(&textarea);
    b.prop(&textarea, "rows", 8i64);

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains("rows=\"8\""));
}

#[test]
fn test_compile_with_inline_styles() {
    let mut b = Builder::new();
    b.add(ComponentType::Text, None);

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains(
        "<p style=\"color: #374151; font-size: 16px; line-height: 1.5; margin: 0px; padding: 16px\">Enter your text here</p>"
    ));
}

#[test]
fn test_compile_nested_blocks_pretty() {
    let mut b = Builder::new();
    let hero = b.add(ComponentType::Hero, None);
    let row = b.add(ComponentType::Row, Some(&hero));
    let button = b.add(ComponentType::Button, Some(&row));
    for id in [&hero, &row, &button] {
        b.clear_styles(id);
    }

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    let expected = "  <section>\n    <div>\n      <button>Button</button>\n    </div>\n  </section>\n";
    assert!(html.contains(expected), "got:\n{}", html);
}

#[test]
fn test_compile_not_pretty() {
    let mut b = Builder::new();
    let nav = b.add(ComponentType::Navbar, None);
    let text = b.add(ComponentType::Text, Some(&nav));
    b.clear_styles(&nav);
    b.clear_styles(&text);

    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };
    let html = compile_to_html(&b.tree, options).expect("Failed to compile");

    assert!(!html.contains('\n'));
    assert!(html.contains("<body><nav><p>Enter your text here</p></nav></body>"));
}

#[test]
fn test_compile_footer_text_after_children() {
    let mut b = Builder::new();
    let footer = b.add(ComponentType::Footer, None);
    let link = b.add(ComponentType::Button, Some(&footer));
    b.clear_styles(&footer);
    b.clear_styles(&link);
    b.prop(&footer, "text", "Made with care");

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    let button_at = html.find("<button>").unwrap();
    let text_at = html.find("<p>Made with care</p>").unwrap();
    assert!(button_at < text_at);
}

#[test]
fn test_compile_escapes_text_and_attributes() {
    let mut b = Builder::new();
    let text = b.add(ComponentType::Text, None);
    let image = b.add(ComponentType::Image, None);
    b.clear_styles(&text);
    b.clear_styles(&image);
    b.prop(&text, "text", "<script>alert('x')</script> & more");
    b.prop(&image, "alt", "say \"cheese\"");

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    assert!(html.contains("alt=\"say &quot;cheese&quot;\""));
}

#[test]
fn test_compile_with_classes_matches_preorder() {
    let mut b = Builder::new();
    let card = b.add(ComponentType::Card, None);
    b.add(ComponentType::Heading, Some(&card));
    b.add(ComponentType::Text, None);

    let options = CompileOptions {
        use_classes: true,
        ..Default::default()
    };
    let html = compile_to_html(&b.tree, options).expect("Failed to compile");

    assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(html.contains("<div class=\"component-0\">"));
    assert!(html.contains("<h1 class=\"component-1\">"));
    assert!(html.contains("<p class=\"component-2\">"));
    assert!(!html.contains("style=\""));
}

#[test]
fn test_skip_hidden_keeps_numbering() {
    let mut b = Builder::new();
    let hidden = b.add(ComponentType::Container, None);
    b.add(ComponentType::Text, Some(&hidden));
    b.add(ComponentType::Button, None);
    b.tree.get_mut(&hidden).unwrap().hidden = true;

    let options = CompileOptions {
        use_classes: true,
        skip_hidden: true,
        ..Default::default()
    };
    let html = compile_to_html(&b.tree, options).expect("Failed to compile");

    assert!(!html.contains("component-0"));
    assert!(!html.contains("<p "));
    assert!(html.contains("<button class=\"component-2\">"));
}

#[test]
fn test_hidden_is_rendered_by_default() {
    let mut b = Builder::new();
    let text = b.add(ComponentType::Text, None);
    b.clear_styles(&text);
    b.tree.get_mut(&text).unwrap().hidden = true;

    let html = compile_to_html(&b.tree, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains("<p>Enter your text here</p>"));
}

#[test]
fn test_custom_title_is_escaped() {
    let options = CompileOptions {
        title: "Tom & Jerry".to_string(),
        ..Default::default()
    };
    let html = compile_to_html(&ComponentTree::new(), options).expect("Failed to compile");

    assert!(html.contains("<title>Tom &amp; Jerry</title>"));
}

#[test]
fn test_corrupt_tree_is_rejected() {
    let json = r#"{"roots": ["ghost"], "nodes": {}}"#;
    let tree: ComponentTree = serde_json::from_str(json).unwrap();

    let err = compile_to_html(&tree, CompileOptions::default()).unwrap_err();
    assert!(matches!(err, CompileError::InvalidTree(_)));
}
