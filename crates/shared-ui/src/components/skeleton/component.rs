use dioxus::prelude::*;

/// Inert loading placeholder with a pulse animation.
///
/// Size it with the global `width`/`height` attributes; any other attribute
/// (including `class`) is merged onto the block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn skeleton_renders_single_block() {
        fn app() -> Element {
            rsx! { Skeleton {} }
        }

        let html = render(app);
        assert_eq!(html.matches("class=\"skeleton\"").count(), 1);
        assert!(html.contains("aria-hidden=\"true\""));
    }

    #[test]
    fn skeleton_applies_size_attributes() {
        fn app() -> Element {
            rsx! { Skeleton { width: "12rem", height: "1.5rem" } }
        }

        let html = render(app);
        assert!(html.contains("width:12rem"));
        assert!(html.contains("height:1.5rem"));
    }

    #[test]
    fn skeleton_has_no_children() {
        fn app() -> Element {
            rsx! { Skeleton {} }
        }

        let html = render(app);
        let start = html.find("class=\"skeleton\"").unwrap();
        let tail = &html[start..];
        let open_end = tail.find('>').unwrap();
        assert!(tail[open_end + 1..].starts_with("</div>"));
    }
}
