//! CSV upload to the prediction service and its result area.

use super::notice::{Notice, NoticeKind};
use super::panel_header::PanelHeader;
use crate::actions;
use crate::api::{self, HttpSource};
use crate::state::{AppState, RequestTokens};
use dioxus::prelude::*;
use log::warn;
use thaw_core::upload::UploadView;

const FILE_INPUT_ID: &str = "upload-file";

fn result_body(view: UploadView) -> Element {
    match view {
        UploadView::Idle => rsx! {},
        UploadView::Pending => rsx! {
            Notice { kind: NoticeKind::Pending, message: "Enviando...".to_string() }
        },
        UploadView::Error(message) => rsx! {
            Notice { kind: NoticeKind::Error, message: message }
        },
        UploadView::Summary(result) => rsx! {
            for (label, value) in result.summary() {
                p {
                    key: "{label}",
                    style: "margin: 2px 0;",
                    strong { "{label}: " }
                    "{value}"
                }
            }
        },
    }
}

#[component]
pub fn UploadForm() -> Element {
    let state = use_context::<AppState>();
    let source = use_context::<HttpSource>();
    let tokens = use_context::<RequestTokens>();

    let on_submit = move |_| {
        let file = match api::selected_file(FILE_INPUT_ID) {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not read the selected file: {}", e);
                None
            }
        };
        actions::submit_upload(state, source.clone(), tokens.upload.clone(), file);
    };

    let view = state.upload.read().clone();
    let pending = view == UploadView::Pending;

    rsx! {
        section {
            style: "margin: 12px 0; padding: 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
            PanelHeader {
                title: "Previsão por arquivo".to_string(),
                subtitle: "Envie um CSV para o serviço de previsão".to_string(),
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                input {
                    r#type: "file",
                    id: FILE_INPUT_ID,
                    accept: ".csv",
                }
                button {
                    r#type: "button",
                    disabled: pending,
                    onclick: on_submit,
                    "Enviar"
                }
            }
            div {
                id: "result",
                style: "margin-top: 8px;",
                {result_body(view)}
            }
        }
    }
}
