pub mod deals;
pub mod not_found;

use dioxus::prelude::*;

use not_found::NotFound;

/// Deal opened when the app starts at `/`.
pub const PREVIEW_DEAL_ID: &str = "preview";

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::DealDetail { id: String::from(PREVIEW_DEAL_ID) })]
    #[route("/deals/:id")]
    DealDetail { id: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn DealDetail(id: String) -> Element {
    rsx! { deals::detail::DealDetailPage { id: id } }
}
