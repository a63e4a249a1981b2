use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardHeader};

use crate::routes::{Route, PREVIEW_DEAL_ID};

/// Closest deal page for an unmatched path.
///
/// `/deals/<id>/...` points back at that deal; anything else at the preview
/// deal.
pub fn suggested_deal(route: &[String]) -> Route {
    let id = match route {
        [section, id, ..] if section == "deals" && !id.is_empty() => id.clone(),
        _ => String::from(PREVIEW_DEAL_ID),
    };
    Route::DealDetail { id }
}

/// Explanation shown for an unmatched path.
pub fn not_found_message(route: &[String]) -> String {
    let path = format!("/{}", route.join("/"));
    match route.first().map(String::as_str) {
        Some("deals") => format!("No deal page matches {path}. Deal pages live at /deals/<id>."),
        _ => format!("Nothing lives at {path}."),
    }
}

/// Fallback page for paths outside the deal routes.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let message = not_found_message(&route);
    let target = suggested_deal(&route);
    let label = match &target {
        Route::DealDetail { id } if id != PREVIEW_DEAL_ID => format!("Open deal {id}"),
        _ => String::from("Open preview deal"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "container not-found",
            Card {
                CardHeader {
                    h1 { class: "not-found-title", "Deal page not found" }
                }
                CardContent {
                    p { class: "not-found-message", "{message}" }
                    Link { to: target, class: "not-found-link", "{label}" }
                }
            }
        }
    }
}
