use leptos::*;
use shared::{ButtonOptions, ButtonRequest, ButtonType, Download, EventHandlers};

use crate::components::unstyled_button::render_request;
use crate::host::Dom;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
    Success,
    Icon,
}

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Small,
    ExtraSmall,
}

/// Styled button with variants and sizes. Becomes a link when `url` is set.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional, into)] url: Option<String>,
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
    children: ChildrenFn,
) -> impl IntoView {
    let base = ButtonOptions {
        url,
        external,
        download,
        submit: is_submit(button_type.as_deref()),
        id,
        role,
        accessibility_label,
        aria_controls,
        aria_expanded,
        aria_described_by,
        aria_checked,
        pressed,
        ..Default::default()
    };
    let handlers = move || EventHandlers {
        on_click,
        on_focus,
        on_blur,
        on_mouse_enter,
        on_touch_start,
        on_key_down,
        on_key_up,
        on_key_press,
    };

    // The shape itself can change with `disabled`, so the whole request is
    // rebuilt whenever one of the signals does.
    move || {
        let loading = loading.get();
        let options = ButtonOptions {
            disabled: disabled.get() || loading,
            loading,
            class: Some(button_class(variant.get(), size, class.as_deref())),
            ..base.clone()
        };

        let children = children.clone();
        let children: Children = Box::new(move || {
            let spinner = loading.then(|| {
                view! {
                    <span class="spinner" style="width: 1em; height: 1em; margin-right: 0.5em;"></span>
                }
            });
            Fragment::new(vec![spinner.into_view(), children().into_view()])
        });

        render_request(
            ButtonRequest::<Dom>::new(options)
                .with_handlers(handlers())
                .with_children(children),
        )
    }
}

/// Whether a `button_type` prop asks for a submit button. Unknown values
/// fall back to a plain button.
fn is_submit(button_type: Option<&str>) -> bool {
    let Some(button_type) = button_type else {
        return false;
    };
    match button_type.parse::<ButtonType>() {
        Ok(button_type) => button_type == ButtonType::Submit,
        Err(e) => {
            log::warn!("{}, rendering a plain button", e);
            false
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn",
        ButtonVariant::Outline => "btn btn-outline",
        ButtonVariant::Danger => "btn btn-danger",
        ButtonVariant::Success => "btn btn-success",
        ButtonVariant::Icon => "btn btn-icon",
    };
    let size_class = match size {
        ButtonSize::Medium => "",
        ButtonSize::Small => "btn-sm",
        ButtonSize::ExtraSmall => "btn-xs",
    };

    let mut classes = vec![variant_class];
    if !size_class.is_empty() {
        classes.push(size_class);
    }
    if let Some(extra) = extra {
        classes.push(extra);
    }
    classes.join(" ")
}
