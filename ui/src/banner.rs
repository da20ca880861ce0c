use banner_core::{BannerConfig, Reveal};
use dioxus::prelude::*;

use crate::{ArrowRightCircle, RevealOnScroll, RotatingText};

const BANNER_CSS: Asset = asset!("/assets/styling/banner.css");
const HEADER_IMG: Asset = asset!("/assets/img/header-img.svg");

/// Landing section: greeting with the rotating phrase next to the header image
#[component]
pub fn Banner(config: BannerConfig, visible: ReadOnlySignal<bool>) -> Element {
    let BannerConfig {
        tagline,
        greeting,
        blurb,
        cta_label,
        header_image_alt,
        rotator,
    } = config;

    let on_connect = move |_| {
        tracing::info!("connect");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BANNER_CSS }

        section {
            class: "banner",
            id: "home",
            div {
                class: "container",
                div {
                    class: "row align-items-center",
                    div {
                        class: "col col-text",
                        RevealOnScroll {
                            animation: Reveal::FadeIn,
                            visible,
                            span { class: "tagline", "{tagline}" }
                            h1 {
                                "{greeting} "
                                RotatingText { config: rotator.clone() }
                            }
                            p { "{blurb}" }
                            button {
                                onclick: on_connect,
                                "{cta_label} "
                                ArrowRightCircle { size: 25 }
                            }
                        }
                    }
                    div {
                        class: "col col-image",
                        RevealOnScroll {
                            animation: Reveal::ZoomIn,
                            visible,
                            img { src: HEADER_IMG, alt: "{header_image_alt}" }
                        }
                    }
                }
            }
        }
    }
}
