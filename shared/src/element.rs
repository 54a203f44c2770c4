use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

use crate::request::Download;

// ============================================================================
// Variant
// ============================================================================

/// Which family of element gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Plain,
    Link,
}

// ============================================================================
// Button Type
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown button type: {0}")]
pub struct ParseButtonTypeError(pub String);

impl FromStr for ButtonType {
    type Err = ParseButtonTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "button" => Ok(ButtonType::Button),
            "submit" => Ok(ButtonType::Submit),
            _ => Err(ParseButtonTypeError(s.to_string())),
        }
    }
}

// ============================================================================
// Attributes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Text(String),
}

impl AttrValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(value) => *value,
            AttrValue::Text(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text.as_str()),
            AttrValue::Bool(_) => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&Download> for AttrValue {
    fn from(download: &Download) -> Self {
        match download {
            Download::Flag(flag) => AttrValue::Bool(*flag),
            Download::Named(name) => AttrValue::Text(name.clone()),
        }
    }
}

/// Forwarded attributes keyed by their DOM-style name. Absent attributes
/// have no entry.
pub type Attributes = BTreeMap<&'static str, AttrValue>;

// ============================================================================
// Shapes
// ============================================================================

/// Attributes every shape carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonAttrs {
    pub id: Option<String>,
    pub class: Option<String>,
    pub role: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonElement {
    pub common: CommonAttrs,
    pub button_type: ButtonType,
    pub disabled: bool,
    pub aria_busy: bool,
    pub aria_controls: Option<String>,
    pub aria_expanded: Option<bool>,
    pub aria_described_by: Option<String>,
    pub aria_checked: Option<bool>,
    pub aria_pressed: Option<bool>,
}

/// Props handed to the link primitive. It owns href assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkElement {
    pub common: CommonAttrs,
    pub url: String,
    pub external: bool,
    pub download: Option<Download>,
}

/// A link-shaped element that does not navigate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledLinkElement {
    pub common: CommonAttrs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Button(ButtonElement),
    Link(LinkElement),
    DisabledLink(DisabledLinkElement),
}

impl Element {
    pub fn variant(&self) -> Variant {
        match self {
            Element::Button(_) => Variant::Plain,
            Element::Link(_) | Element::DisabledLink(_) => Variant::Link,
        }
    }

    pub fn common(&self) -> &CommonAttrs {
        match self {
            Element::Button(button) => &button.common,
            Element::Link(link) => &link.common,
            Element::DisabledLink(link) => &link.common,
        }
    }

    pub(crate) fn common_mut(&mut self) -> &mut CommonAttrs {
        match self {
            Element::Button(button) => &mut button.common,
            Element::Link(link) => &mut link.common,
            Element::DisabledLink(link) => &mut link.common,
        }
    }

    /// Interactive shapes give up focus on mouse-up so a pointer click does
    /// not leave a focus ring behind.
    pub fn blurs_on_mouse_up(&self) -> bool {
        !matches!(self, Element::DisabledLink(_))
    }

    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        let common = self.common();
        insert_text(&mut attrs, "id", &common.id);
        insert_text(&mut attrs, "class", &common.class);
        insert_text(&mut attrs, "role", &common.role);
        insert_text(&mut attrs, "aria-label", &common.aria_label);

        match self {
            Element::Button(button) => {
                attrs.insert("type", button.button_type.as_str().into());
                if button.disabled {
                    attrs.insert("disabled", true.into());
                }
                if button.aria_busy {
                    attrs.insert("aria-busy", true.into());
                }
                insert_text(&mut attrs, "aria-controls", &button.aria_controls);
                insert_bool(&mut attrs, "aria-expanded", button.aria_expanded);
                insert_text(&mut attrs, "aria-describedby", &button.aria_described_by);
                insert_bool(&mut attrs, "aria-checked", button.aria_checked);
                insert_bool(&mut attrs, "aria-pressed", button.aria_pressed);
            }
            Element::Link(link) => {
                attrs.insert("url", link.url.as_str().into());
                attrs.insert("external", link.external.into());
                if let Some(ref download) = link.download {
                    attrs.insert("download", download.into());
                }
            }
            Element::DisabledLink(_) => {}
        }

        attrs
    }
}

fn insert_text(attrs: &mut Attributes, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        attrs.insert(name, value.as_str().into());
    }
}

fn insert_bool(attrs: &mut Attributes, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        attrs.insert(name, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_type_from_str() {
        assert_eq!("button".parse(), Ok(ButtonType::Button));
        assert_eq!("SUBMIT".parse(), Ok(ButtonType::Submit));
        assert_eq!(
            "reset".parse::<ButtonType>(),
            Err(ParseButtonTypeError("reset".to_string()))
        );
    }

    #[test]
    fn test_button_type_default() {
        assert_eq!(ButtonType::default().as_str(), "button");
    }

    #[test]
    fn test_attr_value_truthiness() {
        assert!(AttrValue::Bool(true).is_truthy());
        assert!(!AttrValue::Bool(false).is_truthy());
        assert!(AttrValue::from("file.txt").is_truthy());
        assert_eq!(AttrValue::from("file.txt").as_text(), Some("file.txt"));
    }

    #[test]
    fn test_plain_attributes_always_carry_type() {
        let attrs = Element::Button(ButtonElement::default()).attributes();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("type"), Some(&AttrValue::from("button")));
    }

    #[test]
    fn test_disabled_link_attributes() {
        let element = Element::DisabledLink(DisabledLinkElement {
            common: CommonAttrs {
                id: Some("MockId".to_string()),
                ..Default::default()
            },
        });
        let attrs = element.attributes();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("id"), Some(&AttrValue::from("MockId")));
        assert_eq!(element.variant(), Variant::Link);
        assert!(!element.blurs_on_mouse_up());
    }

    #[test]
    fn test_attributes_serialize_in_key_order() {
        let element = Element::Link(LinkElement {
            common: CommonAttrs::default(),
            url: "/foo".to_string(),
            external: true,
            download: Some(Download::from("file.txt")),
        });
        let json = serde_json::to_string(&element.attributes()).unwrap();
        assert_eq!(json, r#"{"download":"file.txt","external":true,"url":"/foo"}"#);
    }
}
