use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Trunk output of the `ui` crate
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

const INDEX: &str = "index.html";

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> Response {
        let path = Self::asset_path(uri.path());

        match Asset::get(path) {
            Some(content) => Self::asset_response(path, content.data.into_owned()),
            None => {
                // The editor is a single page; unknown paths get the shell
                match Asset::get(INDEX) {
                    Some(content) => Self::asset_response(INDEX, content.data.into_owned()),
                    None => {
                        tracing::warn!("UI bundle not found, build it with `trunk build` in ui/");
                        (StatusCode::NOT_FOUND, "404 Not Found").into_response()
                    }
                }
            }
        }
    }

    /// True when the Trunk output was embedded at build time
    pub fn bundle_present() -> bool {
        Asset::get(INDEX).is_some()
    }

    /// Map a request path to an embedded asset name
    pub fn asset_path(path: &str) -> &str {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            INDEX
        } else {
            path
        }
    }

    fn asset_response(path: &str, data: Vec<u8>) -> Response {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        ([(header::CONTENT_TYPE, mime.as_ref().to_string())], data).into_response()
    }
}
