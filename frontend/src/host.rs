use leptos::*;
use shared::Host;

/// Binds the shared decision logic to Leptos handlers and children.
pub struct Dom;

impl Host for Dom {
    type Children = Children;
    type MouseHandler = Callback<ev::MouseEvent>;
    type FocusHandler = Callback<ev::FocusEvent>;
    type TouchHandler = Callback<ev::TouchEvent>;
    type KeyboardHandler = Callback<ev::KeyboardEvent>;
}
