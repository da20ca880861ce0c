use banner_core::Reveal;
use dioxus::prelude::*;

/// Wraps children in a div that plays `animation` while `visible` is true.
///
/// Visibility is owned by the host page, which decides how it is tracked.
#[component]
pub fn RevealOnScroll(animation: Reveal, visible: ReadOnlySignal<bool>, children: Element) -> Element {
    rsx! {
        div {
            class: animation.class_name(visible()),
            {children}
        }
    }
}
