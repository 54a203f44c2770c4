use leptos::*;
use shared::{CommonAttrs, Download, Element, LinkElement, LinkHandlers};
use wasm_bindgen::JsCast;

use crate::config::use_link_config;
use crate::host::Dom;

/// Link primitive without styling. Turns projected link props into an anchor.
#[component]
pub fn UnstyledLink(
    #[prop(into)] url: String,
    #[prop(optional)] external: bool,
    #[prop(optional, into)] download: Download,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] handlers: LinkHandlers<Dom>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let link = LinkElement {
        common: CommonAttrs {
            id,
            class,
            role,
            aria_label,
        },
        url,
        external,
        download: download.is_requested().then_some(download),
    };
    let blur_on_mouse_up = Element::Link(link.clone()).blurs_on_mouse_up();

    link_view(link, handlers, children, blur_on_mouse_up)
}

/// Renders a navigating anchor. The href is the url as given.
pub fn link_view(
    link: LinkElement,
    handlers: LinkHandlers<Dom>,
    children: Option<Children>,
    blur_on_mouse_up: bool,
) -> View {
    let config = use_link_config();
    let LinkElement {
        common,
        url,
        external,
        download,
    } = link;
    let LinkHandlers {
        on_click,
        on_focus,
        on_blur,
        on_mouse_enter,
        on_touch_start,
    } = handlers;

    let target = external.then(|| config.external_target.clone());
    let rel = external.then(|| config.external_rel.clone());
    let download = download.as_ref().map(download_attribute);

    view! {
        <a
            href=url
            id=common.id
            class=common.class
            role=common.role
            aria-label=common.aria_label
            target=target
            rel=rel
            download=download
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

/// Value of the `download` attribute. An empty value lets the browser pick
/// the file name.
pub fn download_attribute(download: &Download) -> String {
    download.file_name().unwrap_or_default().to_string()
}

/// Drops focus after a pointer click so the focus ring only shows for
/// keyboard users.
pub(crate) fn blur_current_target(ev: ev::MouseEvent) {
    let element = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        if let Err(e) = element.blur() {
            log::debug!("Failed to blur element on mouse-up: {:?}", e);
        }
    }
}
