use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use super::config::ApiConfig;
use crate::constants::{UNKNOWN_UPLOAD_ERROR, UPLOAD_FIELD};
use crate::models::{AskResponse, UploadError, UploadReply};
use crate::utils::describe_js_error;

// REST client for the two Q&A endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `POST /upload/` with the file as multipart field `file`.
    ///
    /// HTTP status alone does not decide success: a 2xx answer carrying an
    /// `error` field is still a server-reported failure, because the Q&A
    /// service replies 200 with `{"error": ...}` for files it cannot parse.
    /// Anything that prevents reading a JSON body is a transport failure.
    pub async fn upload_file(&self, file: &web_sys::File) -> Result<(), UploadError> {
        let transport = |e: JsValue| UploadError::Transport(describe_js_error(&e));

        let form = FormData::new().map_err(transport)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(transport)?;

        let body: &JsValue = form.as_ref();
        let resp = Self::fetch(&self.config.upload_url(), "POST", Some(body))
            .await
            .map_err(transport)?;
        let ok = resp.ok();
        let reply: UploadReply = Self::read_json(&resp)
            .await
            .map_err(UploadError::Transport)?;
        upload_outcome(ok, reply)
    }

    /// `GET /ask/?q=<question>`.
    pub async fn ask(&self, question: &str) -> Result<AskResponse, String> {
        let encoded = String::from(js_sys::encode_uri_component(question));
        let url = self.config.ask_url(&encoded);

        let resp = Self::fetch(&url, "GET", None)
            .await
            .map_err(|e| describe_js_error(&e))?;
        if !resp.ok() {
            return Err(ask_status_error(resp.status()));
        }
        Self::read_json::<AskResponse>(&resp).await
    }

    // Helper function to make fetch requests
    async fn fetch(url: &str, method: &str, body: Option<&JsValue>) -> Result<Response, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        // No Content-Type for FormData: the browser adds the multipart boundary.
        if let Some(body) = body {
            opts.set_body(body);
        }

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        resp_value.dyn_into::<Response>()
    }

    async fn read_json<T: DeserializeOwned>(resp: &Response) -> Result<T, String> {
        let promise = resp.json().map_err(|e| describe_js_error(&e))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| describe_js_error(&e))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }
}

/// Classify an upload reply once its JSON body has been read.
pub(crate) fn upload_outcome(ok: bool, reply: UploadReply) -> Result<(), UploadError> {
    match (ok, reply.error) {
        (true, None) => {
            crate::debug_log!(
                "Upload accepted: {}",
                reply.message.as_deref().unwrap_or("(no message)")
            );
            Ok(())
        }
        (_, Some(error)) => Err(UploadError::Server(error)),
        (false, None) => Err(UploadError::Server(UNKNOWN_UPLOAD_ERROR.to_string())),
    }
}

pub(crate) fn ask_status_error(status: u16) -> String {
    format!("Server error: {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reply(error: Option<&str>) -> UploadReply {
        UploadReply {
            error: error.map(str::to_string),
            message: Some("indexed".to_string()),
        }
    }

    #[wasm_bindgen_test]
    fn ok_reply_without_error_is_accepted() {
        assert_eq!(upload_outcome(true, reply(None)), Ok(()));
    }

    #[wasm_bindgen_test]
    fn error_field_wins_over_http_status() {
        assert_eq!(
            upload_outcome(true, reply(Some("Unsupported file type"))),
            Err(UploadError::Server("Unsupported file type".into()))
        );
        assert_eq!(
            upload_outcome(false, reply(Some("Too large"))),
            Err(UploadError::Server("Too large".into()))
        );
    }

    #[wasm_bindgen_test]
    fn failed_status_without_error_uses_generic_text() {
        assert_eq!(
            upload_outcome(false, UploadReply::default()),
            Err(UploadError::Server(UNKNOWN_UPLOAD_ERROR.into()))
        );
    }

    #[wasm_bindgen_test]
    fn upload_reply_tolerates_missing_fields() {
        let parsed: UploadReply = serde_json::from_str(r#"{"error":"bad pdf"}"#).unwrap();
        assert_eq!(
            upload_outcome(true, parsed),
            Err(UploadError::Server("bad pdf".into()))
        );
        let parsed: UploadReply = serde_json::from_str("{}").unwrap();
        assert_eq!(upload_outcome(true, parsed), Ok(()));
    }

    #[wasm_bindgen_test]
    fn ask_failure_names_the_status() {
        assert_eq!(ask_status_error(500), "Server error: 500");
        assert_eq!(ask_status_error(404), "Server error: 404");
    }
}
