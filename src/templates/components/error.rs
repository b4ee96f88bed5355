use crate::errors::ServerError;
use crate::templates::{desktop_layout, Links};
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup};

pub const LOAD_FAILED_MESSAGE: &str =
    "データの読み込みに失敗しました。JSONのURLまたはCORS設定をご確認ください。";

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    let page = match &err {
        // no partial calendar: only the failure notice is shown
        ServerError::Load(_) => load_failed_page(&Links::default()),
        ServerError::NotFound => error_page(status, "Not Found"),
        ServerError::BadRequest(msg) => error_page(status, msg),
        ServerError::InternalError => error_page(status, "Internal Server Error"),
    };

    page_response(status, page)
}

/// The 502 load-failure page, with a retry link that keeps the current sources.
pub fn load_failed_response(links: &Links) -> Response {
    page_response(502, load_failed_page(links))
}

fn page_response(status: u16, page: Markup) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn load_failed_page(links: &Links) -> Markup {
    desktop_layout(
        "読み込みエラー",
        html! {
            main class="container" {
                div class="card error" role="alert" {
                    p { (LOAD_FAILED_MESSAGE) }
                    p { a href=(links.reload()) { "再読み込み" } }
                }
            }
        },
    )
}

fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                h2 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to calendar" } }
            }
        },
    )
}
