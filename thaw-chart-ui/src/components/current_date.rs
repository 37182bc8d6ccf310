//! Today's date in the page header.

use chrono::Local;
use dioxus::prelude::*;
use thaw_utils::dates::format_date_br;

#[component]
pub fn CurrentDate() -> Element {
    let today = format_date_br(&Local::now().date_naive());

    rsx! {
        span {
            id: "dataAtual",
            style: "font-size: 13px; color: #666;",
            "{today}"
        }
    }
}
