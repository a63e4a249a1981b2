use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardHeader, Skeleton};

/// Size of a single placeholder block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub width: &'static str,
    pub height: &'static str,
}

impl Placeholder {
    pub const fn new(width: &'static str, height: &'static str) -> Self {
        Self { width, height }
    }
}

/// Label + value pair standing in for one field of the deal info grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroup {
    pub label: Placeholder,
    pub value: Placeholder,
}

pub const TITLE: Placeholder = Placeholder::new("16rem", "2rem");
pub const SUBTITLE: Placeholder = Placeholder::new("8rem", "1rem");
pub const STATUS_BADGE: Placeholder = Placeholder::new("5rem", "1.5rem");
pub const ACTION_BUTTON: Placeholder = Placeholder::new("6rem", "2.25rem");
pub const SECTION_TITLE: Placeholder = Placeholder::new("8rem", "1.5rem");
pub const FIELD_LABEL: Placeholder = Placeholder::new("5rem", "1rem");
pub const FIELD_VALUE: Placeholder = Placeholder::new("8rem", "1.25rem");
pub const NOTES_BODY: Placeholder = Placeholder::new("100%", "5rem");

const FIELD: FieldGroup = FieldGroup {
    label: FIELD_LABEL,
    value: FIELD_VALUE,
};

pub const FIELD_GROUP_COUNT: usize = 5;

/// Field groups of the info grid, in reading order.
pub const FIELD_GROUPS: [FieldGroup; FIELD_GROUP_COUNT] = [FIELD; FIELD_GROUP_COUNT];

/// Loading placeholder for the deal detail page.
///
/// Mirrors the loaded layout: a header with title and actions, a deal info
/// card with a grid of field groups, and a notes card. Takes no input and
/// renders the same tree every time.
#[component]
pub fn DealDetailSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./skeleton.css") }
        div { class: "deal-skeleton",
            div { class: "deal-skeleton-header",
                div { class: "deal-skeleton-heading",
                    Skeleton { width: TITLE.width, height: TITLE.height }
                    Skeleton { width: SUBTITLE.width, height: SUBTITLE.height }
                }
                div { class: "deal-skeleton-actions",
                    Skeleton { width: STATUS_BADGE.width, height: STATUS_BADGE.height }
                    Skeleton { width: ACTION_BUTTON.width, height: ACTION_BUTTON.height }
                }
            }

            Card { class: "deal-skeleton-info",
                CardHeader {
                    Skeleton { width: SECTION_TITLE.width, height: SECTION_TITLE.height }
                }
                CardContent {
                    div { class: "deal-skeleton-grid",
                        for (index, group) in FIELD_GROUPS.iter().enumerate() {
                            div { key: "{index}", class: "deal-skeleton-field", "data-field": "{index}",
                                Skeleton { width: group.label.width, height: group.label.height }
                                Skeleton { width: group.value.width, height: group.value.height }
                            }
                        }
                    }
                }
            }

            Card { class: "deal-skeleton-notes",
                CardHeader {
                    Skeleton { width: SECTION_TITLE.width, height: SECTION_TITLE.height }
                }
                CardContent {
                    Skeleton { width: NOTES_BODY.width, height: NOTES_BODY.height }
                }
            }
        }
    }
}
