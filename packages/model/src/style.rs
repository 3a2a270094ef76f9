use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Style properties keyed by camelCase name (`backgroundColor`, `zIndex`, ...)
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Content fields keyed by name (`text`, `src`, `placeholder`, ...)
pub type PropMap = BTreeMap<String, PropValue>;

/// Value of a single style property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Number(n as f64)
    }
}

/// Value of a component prop
///
/// Props are open-ended, so any JSON value is accepted. Lists and maps keep
/// their nested shape through a save and load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => Ok(()),
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::Text(s) => f.write_str(s),
            PropValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            PropValue::Map(entries) => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n as f64)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(items: Vec<T>) -> Self {
        PropValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// Convert a camelCase style key into its CSS property name
///
/// `backgroundColor` becomes `background-color`; keys that are already
/// kebab-case pass through unchanged.
pub fn css_property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("zIndex"), "z-index");
        assert_eq!(css_property_name("padding"), "padding");
        assert_eq!(css_property_name("border-radius"), "border-radius");
    }

    #[test]
    fn test_values_display_like_css() {
        assert_eq!(StyleValue::from(10i64).to_string(), "10");
        assert_eq!(StyleValue::from(0.5).to_string(), "0.5");
        assert_eq!(StyleValue::from("16px").to_string(), "16px");
        assert_eq!(PropValue::from(4i64).to_string(), "4");
        assert_eq!(PropValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_untagged_json_shape() {
        let styles: StyleMap =
            serde_json::from_str(r#"{"zIndex": 3, "color": "red"}"#).unwrap();
        assert_eq!(styles["zIndex"], StyleValue::Number(3.0));
        assert_eq!(styles["color"], StyleValue::Text("red".to_string()));

        let props: PropMap =
            serde_json::from_str(r#"{"rows": 4, "text": "hi", "disabled": false}"#).unwrap();
        assert_eq!(props["rows"], PropValue::Number(4.0));
        assert_eq!(props["text"].as_str(), Some("hi"));
        assert_eq!(props["disabled"], PropValue::Bool(false));
    }

    #[test]
    fn test_nested_props_round_trip() {
        let json = r#"{"icon":null,"links":["Home","About"],"meta":{"k":1,"tags":[true]}}"#;
        let props: PropMap = serde_json::from_str(json).unwrap();

        assert_eq!(props["icon"], PropValue::Null);
        assert_eq!(props["links"], PropValue::from(vec!["Home", "About"]));
        let PropValue::Map(meta) = &props["meta"] else {
            panic!("expected a map, got {:?}", props["meta"]);
        };
        assert_eq!(meta["k"], PropValue::Number(1.0));
        assert_eq!(meta["tags"], PropValue::from(vec![true]));

        let written = serde_json::to_string(&props).unwrap();
        let reread: PropMap = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, props);
    }

    #[test]
    fn test_nested_props_display() {
        assert_eq!(PropValue::Null.to_string(), "");
        assert_eq!(PropValue::from(vec!["Home", "About"]).to_string(), "Home, About");
        assert_eq!(PropValue::Null.as_str(), None);

        let props: PropMap = serde_json::from_str(r#"{"meta":{"a":1,"b":"x"}}"#).unwrap();
        assert_eq!(props["meta"].to_string(), "a: 1, b: x");
    }
}
