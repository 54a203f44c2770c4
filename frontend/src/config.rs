use leptos::*;

/// Attributes the link primitive adds to external destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub external_target: String,
    pub external_rel: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            external_target: "_blank".to_string(),
            external_rel: "noopener noreferrer".to_string(),
        }
    }
}

/// Provide the link configuration to every link below the current owner.
pub fn provide_link_config(config: LinkConfig) {
    provide_context(config);
}

/// Use the link configuration, falling back to the defaults when none was
/// provided.
pub fn use_link_config() -> LinkConfig {
    use_context::<LinkConfig>().unwrap_or_default()
}
