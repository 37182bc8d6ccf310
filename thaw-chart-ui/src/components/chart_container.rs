//! Canvas host for one Chart.js chart.

use super::notice::{Notice, NoticeKind};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the canvas; Chart.js draws into it
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    /// Nothing to draw: show a placeholder over the empty canvas
    #[props(default = false)]
    pub empty: bool,
    #[props(default = 320)]
    pub min_height: u32,
}

/// The canvas stays mounted in every state so a chart drawn into it can
/// be disposed of by id.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let overlay = if props.loading {
        Some((NoticeKind::Pending, "Carregando gráfico..."))
    } else if props.empty {
        Some((NoticeKind::Empty, "Sem dados para exibir."))
    } else {
        None
    };

    rsx! {
        div {
            style: "{style}",
            if let Some((kind, message)) = overlay {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;",
                    Notice { kind: kind, message: message.to_string() }
                }
            }
            canvas {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
