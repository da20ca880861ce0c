use banner_core::{RotatorConfig, TextRotator};
use dioxus::prelude::*;
use std::time::Duration;

/// Drive a [`TextRotator`] from the component's scope and expose its text.
///
/// The timer task belongs to the calling component, so it is cancelled on
/// unmount. The config is read once at mount.
pub fn use_text_rotator(config: RotatorConfig) -> Signal<String> {
    let mut text = use_signal(String::new);

    use_future(move || {
        let config = config.clone();
        async move {
            let config = match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    tracing::warn!("Invalid rotator config, using defaults: {}", e);
                    RotatorConfig::default()
                }
            };
            let Ok(mut rotator) = TextRotator::new(config) else {
                return;
            };

            loop {
                sleep(rotator.delay()).await;
                let frame = rotator.tick();
                text.set(frame.text);
            }
        }
    });

    text
}

/// The typed/deleted phrase inside the banner heading
#[component]
pub fn RotatingText(config: RotatorConfig) -> Element {
    let text = use_text_rotator(config);

    rsx! {
        span {
            class: "txt-rotate",
            span { class: "wrap", "{text}" }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::TimeoutFuture::new(timeout_millis(delay)).await;
}

/// Browser timeouts above `i32::MAX` ms fire immediately, so cap there
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn timeout_millis(delay: Duration) -> u32 {
    delay.as_millis().min(i32::MAX as u128) as u32
}
