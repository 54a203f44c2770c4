use leptos::*;
use leptos_router::*;
use shared::{ButtonOptions, ButtonRequest, EventHandlers};

use crate::components::{render_request, Button, ButtonVariant, UnstyledButton};
use crate::config::{provide_link_config, LinkConfig};
use crate::host::Dom;

/// Demo entries covering every shape the button resolves to.
const GALLERY: &str = r#"[
    { "accessibilityLabel": "Plain button" },
    { "submit": true, "accessibilityLabel": "Submit button" },
    { "loading": true, "accessibilityLabel": "Busy button" },
    { "disabled": true, "accessibilityLabel": "Disabled button" },
    { "ariaExpanded": false, "ariaControls": "gallery", "accessibilityLabel": "Disclosure" },
    { "url": "/docs", "accessibilityLabel": "Internal link" },
    { "url": "https://example.com", "external": true, "accessibilityLabel": "External link" },
    { "url": "/files/report.csv", "download": "report.csv", "accessibilityLabel": "Download link" },
    { "url": "/docs", "disabled": true, "accessibilityLabel": "Disabled link" }
]"#;

/// Entry shown above the gallery.
const FEATURED: &str = r#"{ "url": "/docs", "className": "featured", "accessibilityLabel": "Read the docs" }"#;

fn load_featured(json: &str) -> Option<ButtonOptions> {
    match ButtonOptions::from_json(json) {
        Ok(options) => Some(options),
        Err(e) => {
            log::error!("Failed to load featured button: {}", e);
            None
        }
    }
}

fn load_gallery(json: &str) -> Vec<ButtonOptions> {
    match ButtonOptions::list_from_json(json) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Failed to load button gallery: {}", e);
            Vec::new()
        }
    }
}

fn gallery_label(options: &ButtonOptions) -> String {
    options
        .accessibility_label
        .clone()
        .or_else(|| options.url.clone())
        .unwrap_or_else(|| "Button".to_string())
}

#[component]
pub fn App() -> impl IntoView {
    provide_link_config(LinkConfig::default());

    let clicks = create_rw_signal(0u32);
    let on_click = Callback::new(move |_: ev::MouseEvent| clicks.update(|count| *count += 1));

    let entries = load_gallery(GALLERY);
    log::info!("Rendering {} gallery entries", entries.len());

    let featured = load_featured(FEATURED).map(|options| {
        let label = gallery_label(&options);
        render_request(
            ButtonRequest::<Dom>::new(options)
                .with_children(Box::new(move || Fragment::new(vec![label.into_view()]))),
        )
    });

    view! {
        <Router>
            <main class="container">
                <h1>"Unstyled button gallery"</h1>
                <p id="gallery">"Clicks: " {move || clicks.get()}</p>
                {featured}
                <ul class="gallery">
                    {entries
                        .into_iter()
                        .map(|options| {
                            let label = gallery_label(&options);
                            let request = ButtonRequest::<Dom>::new(options)
                                .with_handlers(EventHandlers {
                                    on_click: Some(on_click),
                                    ..Default::default()
                                })
                                .with_children(Box::new(move || Fragment::new(vec![label.into_view()])));
                            view! { <li>{render_request(request)}</li> }
                        })
                        .collect_view()}
                </ul>
                <section class="styled">
                    <Button variant=ButtonVariant::Primary on_click=on_click>"Primary"</Button>
                    <Button variant=ButtonVariant::Outline url="/docs">"Outline link"</Button>
                    <UnstyledButton pressed=true on_click=on_click>"Toggle"</UnstyledButton>
                </section>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_gallery_loads() {
        let entries = load_gallery(GALLERY);
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().any(|entry| entry.destination().is_some() && entry.disabled));
    }

    #[wasm_bindgen_test]
    fn test_featured_loads() {
        let featured = load_featured(FEATURED).unwrap();
        assert_eq!(featured.destination(), Some("/docs"));
        assert_eq!(featured.class.as_deref(), Some("featured"));
        assert!(load_featured("[]").is_none());
    }

    #[wasm_bindgen_test]
    fn test_invalid_gallery_is_empty() {
        assert!(load_gallery("not json").is_empty());
    }

    #[wasm_bindgen_test]
    fn test_gallery_label_fallbacks() {
        let options = ButtonOptions {
            url: Some("/docs".to_string()),
            ..Default::default()
        };
        assert_eq!(gallery_label(&options), "/docs");
        assert_eq!(gallery_label(&ButtonOptions::default()), "Button");
    }
}
