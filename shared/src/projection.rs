use crate::aria::apply_aria;
use crate::element::{
    ButtonElement, ButtonType, CommonAttrs, DisabledLinkElement, Element, LinkElement, Variant,
};
use crate::request::ButtonOptions;

/// Picks the element family. A non-empty destination is the only thing that
/// makes a link.
pub fn select_variant(options: &ButtonOptions) -> Variant {
    if options.destination().is_some() {
        Variant::Link
    } else {
        Variant::Plain
    }
}

/// Computes the exact attribute set for the shape the options select,
/// including accessibility attributes.
pub fn project(options: &ButtonOptions) -> Element {
    apply_aria(project_props(options), options)
}

fn project_props(options: &ButtonOptions) -> Element {
    let common = CommonAttrs {
        id: options.id.clone(),
        class: options.class.clone(),
        ..Default::default()
    };

    match select_variant(options) {
        Variant::Plain => Element::Button(ButtonElement {
            common,
            button_type: if options.submit {
                ButtonType::Submit
            } else {
                ButtonType::Button
            },
            disabled: options.disabled,
            aria_busy: options.loading,
            aria_controls: options.aria_controls.clone(),
            aria_described_by: options.aria_described_by.clone(),
            ..Default::default()
        }),
        // Navigation is suppressed, so url, external and download go too.
        Variant::Link if options.disabled => Element::DisabledLink(DisabledLinkElement { common }),
        Variant::Link => Element::Link(LinkElement {
            common,
            url: options.destination().unwrap_or_default().to_string(),
            external: options.external,
            download: options
                .download
                .is_requested()
                .then(|| options.download.clone()),
        }),
    }
}
