use dioxus::prelude::*;

use super::skeleton::DealDetailSkeleton;

/// Deal detail page. Shows the loading skeleton until deal data is wired in.
#[component]
pub fn DealDetailPage(id: String) -> Element {
    use_hook(|| tracing::debug!(deal_id = %id, "deal detail mounted"));

    rsx! {
        div { class: "container",
            DealDetailSkeleton {}
        }
    }
}
