use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Host Types
// ============================================================================

/// Types supplied by the rendering environment. Handlers and children are
/// only moved around here, never called or inspected.
pub trait Host {
    type Children;
    type MouseHandler;
    type FocusHandler;
    type TouchHandler;
    type KeyboardHandler;
}

// ============================================================================
// Options
// ============================================================================

/// Value of the `download` prop: a flag or a suggested file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Download {
    Flag(bool),
    Named(String),
}

impl Default for Download {
    fn default() -> Self {
        Download::Flag(false)
    }
}

impl Download {
    pub fn is_requested(&self) -> bool {
        match self {
            Download::Flag(flag) => *flag,
            Download::Named(_) => true,
        }
    }

    /// Suggested file name, if a non-empty one was given.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Download::Named(name) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for Download {
    fn from(flag: bool) -> Self {
        Download::Flag(flag)
    }
}

impl From<&str> for Download {
    fn from(name: &str) -> Self {
        Download::Named(name.to_string())
    }
}

impl From<String> for Download {
    fn from(name: String) -> Self {
        Download::Named(name)
    }
}

/// The plain-data half of a button request: everything except handlers
/// and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    /// Destination. A non-empty value turns the button into a link.
    pub url: Option<String>,
    pub disabled: bool,
    pub loading: bool,
    pub submit: bool,
    pub external: bool,
    pub download: Download,
    pub id: Option<String>,
    #[serde(rename = "className")]
    pub class: Option<String>,
    pub role: Option<String>,
    pub accessibility_label: Option<String>,
    pub aria_controls: Option<String>,
    pub aria_expanded: Option<bool>,
    pub aria_described_by: Option<String>,
    pub aria_checked: Option<bool>,
    pub pressed: Option<bool>,
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid button options: {0}")]
    Json(#[from] serde_json::Error),
}

impl ButtonOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The destination, if it is present and non-empty.
    pub fn destination(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Every handler a caller may supply.
pub struct EventHandlers<H: Host> {
    pub on_click: Option<H::MouseHandler>,
    pub on_focus: Option<H::FocusHandler>,
    pub on_blur: Option<H::FocusHandler>,
    pub on_mouse_enter: Option<H::MouseHandler>,
    pub on_touch_start: Option<H::TouchHandler>,
    pub on_key_down: Option<H::KeyboardHandler>,
    pub on_key_up: Option<H::KeyboardHandler>,
    pub on_key_press: Option<H::KeyboardHandler>,
}

impl<H: Host> Default for EventHandlers<H> {
    fn default() -> Self {
        Self {
            on_click: None,
            on_focus: None,
            on_blur: None,
            on_mouse_enter: None,
            on_touch_start: None,
            on_key_down: None,
            on_key_up: None,
            on_key_press: None,
        }
    }
}

impl<H: Host> EventHandlers<H> {
    /// Drops the keyboard handlers, which links never receive.
    pub fn into_link_handlers(self) -> LinkHandlers<H> {
        LinkHandlers {
            on_click: self.on_click,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
            on_mouse_enter: self.on_mouse_enter,
            on_touch_start: self.on_touch_start,
        }
    }
}

/// Handlers a link shape can carry.
pub struct LinkHandlers<H: Host> {
    pub on_click: Option<H::MouseHandler>,
    pub on_focus: Option<H::FocusHandler>,
    pub on_blur: Option<H::FocusHandler>,
    pub on_mouse_enter: Option<H::MouseHandler>,
    pub on_touch_start: Option<H::TouchHandler>,
}

impl<H: Host> Default for LinkHandlers<H> {
    fn default() -> Self {
        EventHandlers::default().into_link_handlers()
    }
}

impl<H: Host> Clone for LinkHandlers<H>
where
    H::MouseHandler: Clone,
    H::FocusHandler: Clone,
    H::TouchHandler: Clone,
{
    fn clone(&self) -> Self {
        Self {
            on_click: self.on_click.clone(),
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
            on_mouse_enter: self.on_mouse_enter.clone(),
            on_touch_start: self.on_touch_start.clone(),
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// One render's worth of input. Consumed by [`crate::render`].
pub struct ButtonRequest<H: Host> {
    pub options: ButtonOptions,
    pub handlers: EventHandlers<H>,
    pub children: Option<H::Children>,
}

impl<H: Host> ButtonRequest<H> {
    pub fn new(options: ButtonOptions) -> Self {
        Self {
            options,
            handlers: EventHandlers::default(),
            children: None,
        }
    }

    pub fn with_handlers(mut self, handlers: EventHandlers<H>) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn with_children(mut self, children: H::Children) -> Self {
        self.children = Some(children);
        self
    }
}
