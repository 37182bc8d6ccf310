//! Panel title bar with optional subtitle and right-aligned controls.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    pub title: String,
    /// Unit or context line under the title
    #[props(default = String::new())]
    pub subtitle: String,
    /// Controls rendered on the right (filters, navigation)
    #[props(default = VNode::empty())]
    pub children: Element,
}

#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: flex-end; gap: 12px; margin-bottom: 8px;",
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        style: "margin: 0; font-size: 12px; color: #666;",
                        "{props.subtitle}"
                    }
                }
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                {props.children}
            }
        }
    }
}
