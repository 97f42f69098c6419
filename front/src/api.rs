//! Fetch helpers for the processing api and the payment relay

use wasm_bindgen::{JsCast as _, JsValue};

const LOCAL_API: &str = "http://localhost:5000";
const HOSTED_API: &str = "https://dev.pdfville.com";

/// Where the document processing api lives
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL").filter(|base| !base.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let hostname = gloo::utils::window()
        .location()
        .hostname()
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        String::from(LOCAL_API)
    } else {
        String::from(HOSTED_API)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Js(String),
    Status { status: u16, message: String },
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Js(e) => write!(f, "Request failed: {e}"),
            ApiError::Status { status, message } => write!(f, "{message} ({status})"),
            ApiError::Decode(e) => write!(f, "Unexpected response: {e}"),
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

fn request(method: &str, url: &str, body: Option<&JsValue>) -> Result<web_sys::Request, ApiError> {
    let init = web_sys::RequestInit::new();
    init.set_method(method);
    init.set_mode(web_sys::RequestMode::Cors);
    if let Some(body) = body {
        init.set_body(body);
    }

    Ok(web_sys::Request::new_with_str_and_init(url, &init)?)
}

async fn send(request: web_sys::Request) -> Result<web_sys::Response, ApiError> {
    let window = gloo::utils::window();

    let value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await?;

    let response: web_sys::Response = value.dyn_into()?;

    if !response.ok() {
        let status = response.status();
        let text = text(&response).await.unwrap_or_default();

        // The relay answers `{ "error": ... }`, the processing api sometimes too
        let message = serde_json::from_str::<shared::payment::ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    response.status_text()
                } else {
                    text
                }
            });

        return Err(ApiError::Status { status, message });
    }

    Ok(response)
}

async fn text(response: &web_sys::Response) -> Result<String, ApiError> {
    let value = wasm_bindgen_futures::JsFuture::from(response.text()?).await?;

    value
        .as_string()
        .ok_or_else(|| ApiError::Decode(String::from("body is not text")))
}

async fn json<T: serde::de::DeserializeOwned>(response: web_sys::Response) -> Result<T, ApiError> {
    let text = text(&response).await?;

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = send(request("GET", url, None)?).await?;

    json(response).await
}

pub async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let request = request("POST", url, Some(&JsValue::from_str(&body)))?;
    request.headers().set("Content-Type", "application/json")?;

    json(send(request).await?).await
}

/// Multipart upload, the processing api answers with the resulting file
pub async fn post_form(url: &str, form: &web_sys::FormData) -> Result<web_sys::Blob, ApiError> {
    let response = send(request("POST", url, Some(form.as_ref()))?).await?;

    let blob = wasm_bindgen_futures::JsFuture::from(response.blob()?).await?;

    Ok(blob.dyn_into()?)
}

/// Hands a blob to the browser as a download
pub fn download(blob: &web_sys::Blob, file_name: &str) -> Result<(), ApiError> {
    let url = web_sys::Url::create_object_url_with_blob(blob)?;

    let anchor: web_sys::HtmlAnchorElement = gloo::utils::document()
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Builds the multipart body of a tool request
pub fn form_data(
    file_field: &str,
    files: &[web_sys::File],
    fields: &[(&'static str, String)],
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()?;

    for file in files {
        form.append_with_blob_and_filename(file_field, file, &file.name())?;
    }

    for (name, value) in fields {
        form.append_with_str(name, value)?;
    }

    Ok(form)
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetching,
    Fetching,
    Success(T),
    Failed(String),
}
