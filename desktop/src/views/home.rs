use dioxus::prelude::*;
use ui::{Banner, BannerConfig};

/// Desktop windows show the banner without scrolling it in
#[component]
pub fn Home() -> Element {
    let visible = use_signal(|| true);
    let config = use_hook(|| match BannerConfig::load_or_default(None) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to the default banner: {}", e);
            BannerConfig::default()
        }
    });

    rsx! {
        Banner { config, visible }
    }
}
