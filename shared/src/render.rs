use crate::element::{ButtonElement, DisabledLinkElement, Element, LinkElement, Variant};
use crate::projection::project;
use crate::request::{ButtonRequest, EventHandlers, Host, LinkHandlers};

/// The chosen shape with everything it needs to be emitted: projected
/// attributes, the handlers legal on it, the children, and whether the
/// element drops focus on mouse-up.
pub enum Output<H: Host> {
    Button {
        element: ButtonElement,
        handlers: EventHandlers<H>,
        children: Option<H::Children>,
        blur_on_mouse_up: bool,
    },
    Link {
        element: LinkElement,
        handlers: LinkHandlers<H>,
        children: Option<H::Children>,
        blur_on_mouse_up: bool,
    },
    /// Handlers stay attached here even though navigation is suppressed.
    DisabledLink {
        element: DisabledLinkElement,
        handlers: LinkHandlers<H>,
        children: Option<H::Children>,
        blur_on_mouse_up: bool,
    },
}

impl<H: Host> Output<H> {
    pub fn variant(&self) -> Variant {
        match self {
            Output::Button { .. } => Variant::Plain,
            Output::Link { .. } | Output::DisabledLink { .. } => Variant::Link,
        }
    }
}

/// Projects the request and moves its handlers and children onto the
/// resulting shape.
pub fn render<H: Host>(request: ButtonRequest<H>) -> Output<H> {
    let ButtonRequest {
        options,
        handlers,
        children,
    } = request;

    let element = project(&options);
    let blur_on_mouse_up = element.blurs_on_mouse_up();
    log::debug!(
        "Rendering {:?} element (url: {:?}, disabled: {})",
        element.variant(),
        options.destination(),
        options.disabled
    );

    match element {
        Element::Button(element) => Output::Button {
            element,
            handlers,
            children,
            blur_on_mouse_up,
        },
        Element::Link(element) => Output::Link {
            element,
            handlers: handlers.into_link_handlers(),
            children,
            blur_on_mouse_up,
        },
        Element::DisabledLink(element) => Output::DisabledLink {
            element,
            handlers: handlers.into_link_handlers(),
            children,
            blur_on_mouse_up,
        },
    }
}
