use leptos::*;
use shared::{
    render, ButtonElement, ButtonOptions, ButtonRequest, DisabledLinkElement, Download,
    EventHandlers, LinkHandlers, Output,
};

use crate::components::unstyled_link::{blur_current_target, link_view};
use crate::host::Dom;

/// Button without styling. Renders a `<button>`, or a link when `url` is
/// set.
#[component]
pub fn UnstyledButton(
    #[prop(optional, into)] url: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] loading: bool,
    #[prop(optional)] submit: bool,
    #[prop(optional)] external: bool,
    #[prop(optional, into)] download: Download,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] accessibility_label: Option<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<bool>,
    #[prop(optional, into)] aria_described_by: Option<String>,
    #[prop(optional, into)] aria_checked: Option<bool>,
    #[prop(optional, into)] pressed: Option<bool>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(optional)] on_focus: Option<Callback<ev::FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<ev::FocusEvent>>,
    #[prop(optional)] on_mouse_enter: Option<Callback<ev::MouseEvent>>,
    #[prop(optional)] on_touch_start: Option<Callback<ev::TouchEvent>>,
    #[prop(optional)] on_key_down: Option<Callback<ev::KeyboardEvent>>,
    #[prop(optional)] on_key_up: Option<Callback<ev::KeyboardEvent>>,
    #[prop(optional)] on_key_press: Option<Callback<ev::KeyboardEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let options = ButtonOptions {
        url,
        disabled,
        loading,
        submit,
        external,
        download,
        id,
        class,
        role,
        accessibility_label,
        aria_controls,
        aria_expanded,
        aria_described_by,
        aria_checked,
        pressed,
    };
    let handlers = EventHandlers {
        on_click,
        on_focus,
        on_blur,
        on_mouse_enter,
        on_touch_start,
        on_key_down,
        on_key_up,
        on_key_press,
    };

    render_request(ButtonRequest {
        options,
        handlers,
        children,
    })
}

/// Renders whichever shape the request resolves to.
pub fn render_request(request: ButtonRequest<Dom>) -> View {
    match render(request) {
        Output::Button {
            element,
            handlers,
            children,
            blur_on_mouse_up,
        } => button_view(element, handlers, children, blur_on_mouse_up),
        Output::Link {
            element,
            handlers,
            children,
            blur_on_mouse_up,
        } => link_view(element, handlers, children, blur_on_mouse_up),
        Output::DisabledLink {
            element,
            handlers,
            children,
            blur_on_mouse_up,
        } => disabled_link_view(element, handlers, children, blur_on_mouse_up),
    }
}

fn button_view(
    button: ButtonElement,
    handlers: EventHandlers<Dom>,
    children: Option<Children>,
    blur_on_mouse_up: bool,
) -> View {
    let ButtonElement {
        common,
        button_type,
        disabled,
        aria_busy,
        aria_controls,
        aria_expanded,
        aria_described_by,
        aria_checked,
        aria_pressed,
    } = button;
    let EventHandlers {
        on_click,
        on_focus,
        on_blur,
        on_mouse_enter,
        on_touch_start,
        on_key_down,
        on_key_up,
        on_key_press,
    } = handlers;

    view! {
        <button
            type=button_type.as_str()
            id=common.id
            class=common.class
            role=common.role
            aria-label=common.aria_label
            disabled=disabled
            aria-busy=aria_busy.then(|| "true".to_string())
            aria-controls=aria_controls
            aria-expanded=aria_expanded.map(|expanded| expanded.to_string())
            aria-describedby=aria_described_by
            aria-checked=aria_checked.map(|checked| checked.to_string())
            aria-pressed=aria_pressed.map(|pressed| pressed.to_string())
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(callback) = on_focus {
                    callback.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(callback) = on_blur {
                    callback.call(ev);
                }
            }
            on:mouseenter=move |ev| {
                if let Some(callback) = on_mouse_enter {
                    callback.call(ev);
                }
            }
            on:touchstart=move |ev| {
                if let Some(callback) = on_touch_start {
                    callback.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(callback) = on_key_down {
                    callback.call(ev);
                }
            }
            on:keyup=move |ev| {
                if let Some(callback) = on_key_up {
                    callback.call(ev);
                }
            }
            on:keypress=move |ev| {
                if let Some(callback) = on_key_press {
                    callback.call(ev);
                }
            }
            on:mouseup=move |ev| {
                if blur_on_mouse_up {
                    blur_current_target(ev);
                }
            }
        >
            {children.map(|children| children())}
        </button>
    }
    .into_view()
}

// No href, so the anchor never navigates. Handlers are still wired.
fn disabled_link_view(
    link: DisabledLinkElement,
    handlers: LinkHandlers<Dom>,
    children: Option<Children>,
    blur_on_mouse_up: bool,
) -> View {
    let DisabledLinkElement { common } = link;
    let LinkHandlers {
        on_click,
        on_focus,
        on_blur,
        on_mouse_enter,
        on_touch_start,
    } = handlers;

    view! {
        <a
            id=common.id
            class=common.class
            role=common.role
            aria-label=common.aria_label
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(callback) = on_focus {
                    callback.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(callback) = on_blur {
                    callback.call(ev);
                }
            }
            on:mouseenter=move |ev| {
                if let Some(callback) = on_mouse_enter {
                    callback.call(ev);
                }
            }
            on:touchstart=move |ev| {
                if let Some(callback) = on_touch_start {
                    callback.call(ev);
                }
            }
            on:mouseup=move |ev| {
                if blur_on_mouse_up {
                    blur_current_target(ev);
                }
            }
        >
            {children.map(|children| children())}
        </a>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{find, mount, trigger};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MOCK_URL: &str = "https://google.com";

    fn call_counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        (count.clone(), count)
    }

    #[wasm_bindgen_test]
    fn test_children_rendered_into_button() {
        let container = mount(|| view! { <UnstyledButton>"mock children"</UnstyledButton> });
        let button = find(&container, "button");
        assert!(button.text_content().unwrap_or_default().contains("mock children"));
    }

    #[wasm_bindgen_test]
    fn test_children_rendered_into_link() {
        let container =
            mount(|| view! { <UnstyledButton url=MOCK_URL>"mock children"</UnstyledButton> });
        let link = find(&container, "a");
        assert_eq!(link.get_attribute("href").as_deref(), Some(MOCK_URL));
        assert!(link.text_content().unwrap_or_default().contains("mock children"));
        assert!(container.query_selector("button").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_disabled_link_has_no_href() {
        let container = mount(|| {
            view! {
                <UnstyledButton
                    url=MOCK_URL
                    disabled=true
                    external=true
                    download=true
                    id="MockId"
                    accessibility_label="mock accessibility label"
                >
                    "mock children"
                </UnstyledButton>
            }
        });
        let link = find(&container, "a");
        for attribute in ["href", "disabled", "target", "download"] {
            assert!(link.get_attribute(attribute).is_none(), "{} was set", attribute);
        }
        assert_eq!(link.get_attribute("id").as_deref(), Some("MockId"));
        assert_eq!(
            link.get_attribute("aria-label").as_deref(),
            Some("mock accessibility label")
        );
        assert!(link.text_content().unwrap_or_default().contains("mock children"));
    }

    #[wasm_bindgen_test]
    fn test_button_type() {
        let container = mount(|| view! { <UnstyledButton submit=true /> });
        assert_eq!(find(&container, "button").get_attribute("type").as_deref(), Some("submit"));

        let container = mount(|| view! { <UnstyledButton /> });
        assert_eq!(find(&container, "button").get_attribute("type").as_deref(), Some("button"));
    }

    #[wasm_bindgen_test]
    fn test_button_state_attributes() {
        let container = mount(|| {
            view! {
                <UnstyledButton
                    disabled=true
                    loading=true
                    role="menuitem"
                    aria_controls="MockId"
                    aria_expanded=true
                    pressed=true
                />
            }
        });
        let button = find(&container, "button");
        assert!(button.has_attribute("disabled"));
        assert_eq!(button.get_attribute("aria-busy").as_deref(), Some("true"));
        assert_eq!(button.get_attribute("role").as_deref(), Some("menuitem"));
        assert_eq!(button.get_attribute("aria-controls").as_deref(), Some("MockId"));
        assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("true"));
    }

    #[wasm_bindgen_test]
    fn test_link_omits_button_attributes() {
        let container = mount(|| {
            view! {
                <UnstyledButton
                    url=MOCK_URL
                    loading=true
                    submit=true
                    aria_controls="mock aria controls"
                    aria_expanded=true
                />
            }
        });
        let link = find(&container, "a");
        for attribute in ["type", "aria-busy", "aria-controls", "aria-expanded"] {
            assert!(link.get_attribute(attribute).is_none(), "{} was set", attribute);
        }
    }

    #[wasm_bindgen_test]
    fn test_click_called_once_on_button_and_link() {
        let (clicks, counter) = call_counter();
        let container = mount(move || {
            let on_click = Callback::new(move |ev: ev::MouseEvent| {
                ev.prevent_default();
                counter.set(counter.get() + 1);
            });
            view! {
                <UnstyledButton on_click=on_click />
                <UnstyledButton on_click=on_click url="#" />
            }
        });

        find(&container, "button").click();
        assert_eq!(clicks.get(), 1);
        find(&container, "a").click();
        assert_eq!(clicks.get(), 2);
    }

    #[wasm_bindgen_test]
    fn test_focus_and_blur_on_link() {
        let (calls, counter) = call_counter();
        let container = mount(move || {
            let on_focus = Callback::new(move |_: ev::FocusEvent| counter.set(counter.get() + 1));
            view! { <UnstyledButton url=MOCK_URL on_focus=on_focus on_blur=on_focus /> }
        });

        let link = find(&container, "a");
        trigger(&link, "focus");
        trigger(&link, "blur");
        assert_eq!(calls.get(), 2);
    }

    #[wasm_bindgen_test]
    fn test_key_handlers_only_on_button() {
        let (calls, counter) = call_counter();
        let container = mount(move || {
            let on_key = Callback::new(move |_: ev::KeyboardEvent| counter.set(counter.get() + 1));
            view! {
                <UnstyledButton on_key_down=on_key on_key_up=on_key on_key_press=on_key>"Test"</UnstyledButton>
                <UnstyledButton url=MOCK_URL on_key_down=on_key on_key_up=on_key on_key_press=on_key />
            }
        });

        let button = find(&container, "button");
        let link = find(&container, "a");
        for event_type in ["keydown", "keyup", "keypress"] {
            trigger(&button, event_type);
            trigger(&link, event_type);
        }
        assert_eq!(calls.get(), 3);
    }

    #[wasm_bindgen_test]
    fn test_mouse_enter_and_touch_start_on_every_shape() {
        let (calls, counter) = call_counter();
        let (touches, touch_counter) = call_counter();
        let container = mount(move || {
            let on_mouse_enter =
                Callback::new(move |_: ev::MouseEvent| counter.set(counter.get() + 1));
            let on_touch_start =
                Callback::new(move |_: ev::TouchEvent| touch_counter.set(touch_counter.get() + 1));
            view! {
                <UnstyledButton id="plain" on_mouse_enter=on_mouse_enter on_touch_start=on_touch_start />
                <UnstyledButton
                    id="link"
                    url=MOCK_URL
                    on_mouse_enter=on_mouse_enter
                    on_touch_start=on_touch_start
                />
                <UnstyledButton
                    id="disabled-link"
                    url=MOCK_URL
                    disabled=true
                    on_mouse_enter=on_mouse_enter
                    on_touch_start=on_touch_start
                />
            }
        });

        for (selector, expected) in [("#plain", 1), ("#link", 2), ("#disabled-link", 3)] {
            let element = find(&container, selector);
            trigger(&element, "mouseenter");
            trigger(&element, "touchstart");
            assert_eq!(calls.get(), expected, "mouseenter on {}", selector);
            assert_eq!(touches.get(), expected, "touchstart on {}", selector);
        }
    }

    /// Known quirk: the href-less anchor of a disabled link still reports
    /// pointer and focus interactions to its handlers.
    #[wasm_bindgen_test]
    fn test_disabled_link_handlers_still_fire() {
        let (clicks, click_counter) = call_counter();
        let (focuses, focus_counter) = call_counter();
        let container = mount(move || {
            let on_click =
                Callback::new(move |_: ev::MouseEvent| click_counter.set(click_counter.get() + 1));
            let on_focus =
                Callback::new(move |_: ev::FocusEvent| focus_counter.set(focus_counter.get() + 1));
            view! {
                <UnstyledButton url=MOCK_URL disabled=true on_click=on_click on_focus=on_focus>
                    "mock children"
                </UnstyledButton>
            }
        });

        let link = find(&container, "a");
        assert!(link.get_attribute("href").is_none());
        link.click();
        trigger(&link, "focus");
        assert_eq!(clicks.get(), 1);
        assert_eq!(focuses.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_mouse_up_drops_focus_on_button() {
        let container = mount(|| view! { <UnstyledButton>"mock children"</UnstyledButton> });
        let button = find(&container, "button");

        button.focus().unwrap();
        assert_eq!(document().active_element(), Some(button.clone().into()));
        trigger(&button, "mouseup");
        assert_ne!(document().active_element(), Some(button.into()));
    }
}
