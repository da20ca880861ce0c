use dioxus::prelude::*;
use ui::{Banner, BannerConfig};

#[component]
pub fn Home() -> Element {
    // The banner sits at the top of the page, so it starts out on screen
    let visible = use_signal(|| true);

    rsx! {
        Banner { config: BannerConfig::default(), visible }
    }
}
