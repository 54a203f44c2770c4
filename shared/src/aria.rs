use crate::element::Element;
use crate::request::ButtonOptions;
use crate::warning::warn_pressed;

/// Copies accessibility metadata from the options onto a projected element.
///
/// Only ever adds attributes. `role` and the label land on every shape; the
/// state attributes (expanded, checked, pressed) only exist on the plain
/// shape and are dropped for links.
pub fn apply_aria(mut element: Element, options: &ButtonOptions) -> Element {
    if options.pressed.is_some() {
        warn_pressed();
    }

    let common = element.common_mut();
    if let Some(ref role) = options.role {
        common.role = Some(role.clone());
    }
    if let Some(ref label) = options.accessibility_label {
        common.aria_label = Some(label.clone());
    }

    if let Element::Button(ref mut button) = element {
        if options.aria_expanded.is_some() {
            button.aria_expanded = options.aria_expanded;
        }
        if options.aria_checked.is_some() {
            button.aria_checked = options.aria_checked;
        }
        if options.pressed.is_some() {
            button.aria_pressed = options.pressed;
        }
    }

    element
}
