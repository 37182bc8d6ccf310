//! Inline status messages: errors, pending work and empty states.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Error,
    Pending,
    Empty,
}

impl NoticeKind {
    fn style(&self) -> &'static str {
        match self {
            NoticeKind::Error => "padding: 10px 14px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            NoticeKind::Pending => "padding: 24px; text-align: center; color: #666;",
            NoticeKind::Empty => "padding: 24px; text-align: center; color: #999; font-style: italic;",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "text-red-600",
            _ => "",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: String,
}

#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let class = props.kind.class();
    let style = props.kind.style();

    rsx! {
        p {
            class: "{class}",
            style: "{style}",
            "{props.message}"
        }
    }
}
