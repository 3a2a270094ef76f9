//! Per-kind default styles and props seeded into new components.
//!
//! Both tables are exhaustive matches over [`ComponentType`], so adding a kind
//! does not compile until it has an entry here.

use crate::component::ComponentType;
use crate::style::{PropMap, PropValue, StyleMap, StyleValue};

const BASE_STYLES: &[(&str, &str)] = &[("padding", "16px"), ("margin", "0px")];

const CARD_SHADOW: &str = "0 1px 3px 0 rgba(0, 0, 0, 0.1)";

/// Styles for a freshly created component of `kind`
pub fn default_styles(kind: ComponentType) -> StyleMap {
    let overrides: &[(&str, &str)] = match kind {
        ComponentType::Container => &[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("gap", "16px"),
            ("backgroundColor", "#f3f4f6"),
            ("borderRadius", "8px"),
            ("minHeight", "200px"),
            ("width", "100%"),
        ],
        ComponentType::Row => &[
            ("display", "flex"),
            ("flexDirection", "row"),
            ("gap", "16px"),
            ("width", "100%"),
        ],
        ComponentType::Column => &[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("gap", "16px"),
            ("flex", "1"),
        ],
        ComponentType::Text => &[
            ("fontSize", "16px"),
            ("lineHeight", "1.5"),
            ("color", "#374151"),
        ],
        ComponentType::Heading => &[
            ("fontSize", "32px"),
            ("fontWeight", "700"),
            ("lineHeight", "1.2"),
            ("color", "#111827"),
        ],
        ComponentType::Button => &[
            ("backgroundColor", "#3b82f6"),
            ("color", "#ffffff"),
            ("padding", "12px 24px"),
            ("borderRadius", "8px"),
            ("fontSize", "16px"),
            ("fontWeight", "600"),
            ("display", "inline-block"),
        ],
        ComponentType::Image => &[
            ("width", "100%"),
            ("height", "auto"),
            ("borderRadius", "8px"),
        ],
        ComponentType::Input => &[
            ("borderWidth", "1px"),
            ("borderColor", "#d1d5db"),
            ("borderRadius", "6px"),
            ("padding", "10px 12px"),
            ("fontSize", "16px"),
            ("width", "100%"),
        ],
        ComponentType::Textarea => &[
            ("borderWidth", "1px"),
            ("borderColor", "#d1d5db"),
            ("borderRadius", "6px"),
            ("padding", "10px 12px"),
            ("fontSize", "16px"),
            ("width", "100%"),
            ("minHeight", "120px"),
        ],
        ComponentType::Card => &[
            ("backgroundColor", "#ffffff"),
            ("borderRadius", "12px"),
            ("padding", "24px"),
            ("boxShadow", CARD_SHADOW),
        ],
        ComponentType::Navbar => &[
            ("display", "flex"),
            ("justifyContent", "space-between"),
            ("alignItems", "center"),
            ("backgroundColor", "#ffffff"),
            ("padding", "16px 32px"),
            ("boxShadow", CARD_SHADOW),
        ],
        ComponentType::Footer => &[
            ("backgroundColor", "#1f2937"),
            ("color", "#ffffff"),
            ("padding", "48px 32px"),
            ("textAlign", "center"),
        ],
        ComponentType::Hero => &[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("justifyContent", "center"),
            ("alignItems", "center"),
            ("backgroundColor", "#f9fafb"),
            ("padding", "80px 32px"),
            ("textAlign", "center"),
        ],
    };

    BASE_STYLES
        .iter()
        .chain(overrides.iter())
        .map(|(key, value)| (key.to_string(), StyleValue::from(*value)))
        .collect()
}

/// Content props for a freshly created component of `kind`
pub fn default_props(kind: ComponentType) -> PropMap {
    let entries: Vec<(&str, PropValue)> = match kind {
        ComponentType::Container
        | ComponentType::Row
        | ComponentType::Column
        | ComponentType::Card
        | ComponentType::Navbar
        | ComponentType::Hero => vec![],
        ComponentType::Text => vec![("text", "Enter your text here".into())],
        ComponentType::Heading => vec![("text", "Heading Text".into())],
        ComponentType::Button => vec![("text", "Button".into()), ("href", "#".into())],
        ComponentType::Image => vec![
            ("src", "https://via.placeholder.com/800x600".into()),
            ("alt", "Placeholder image".into()),
        ],
        ComponentType::Input => vec![
            ("placeholder", "Enter text...".into()),
            ("type", "text".into()),
        ],
        ComponentType::Textarea => vec![
            ("placeholder", "Enter your message...".into()),
            ("rows", 4i64.into()),
        ],
        ComponentType::Footer => vec![(
            "text",
            "\u{a9} 2024 Your Company. All rights reserved.".into(),
        )],
    };

    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_gets_base_styles() {
        for kind in ComponentType::ALL {
            let styles = default_styles(kind);
            assert!(styles.contains_key("padding"), "{kind} has no padding");
            assert_eq!(styles.get("margin"), Some(&StyleValue::from("0px")));
        }
    }

    #[test]
    fn test_kind_overrides_base_padding() {
        let button = default_styles(ComponentType::Button);
        assert_eq!(button.get("padding"), Some(&StyleValue::from("12px 24px")));

        let text = default_styles(ComponentType::Text);
        assert_eq!(text.get("padding"), Some(&StyleValue::from("16px")));
    }

    #[test]
    fn test_default_props() {
        assert!(default_props(ComponentType::Container).is_empty());
        assert_eq!(
            default_props(ComponentType::Heading).get("text"),
            Some(&PropValue::from("Heading Text"))
        );
        assert_eq!(
            default_props(ComponentType::Textarea).get("rows"),
            Some(&PropValue::Number(4.0))
        );
        assert_eq!(
            default_props(ComponentType::Input).get("type"),
            Some(&PropValue::from("text"))
        );
    }
}
