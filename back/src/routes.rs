#[path = "routes/checkout.rs"]
mod checkout_route;
#[path = "routes/checkout_session.rs"]
mod checkout_session_route;
#[path = "routes/subscription.rs"]
mod subscription_route;
#[path = "routes/webhook.rs"]
mod webhook_route;

#[allow(unused_imports)] // Used by main.rs
pub use checkout_route::*;
#[allow(unused_imports)] // Used by main.rs
pub use checkout_session_route::*;
#[allow(unused_imports)] // Used by main.rs
pub use subscription_route::*;
#[allow(unused_imports)] // Used by main.rs
pub use webhook_route::*;

use {
    crate::{error::RelayError, response::Response},
    rocket::{
        http::{ContentType, Method, Status},
        tokio::io::AsyncReadExt,
    },
};

lazy_static! {
    // Provider ids look like price_1Nx..., cs_test_a1..., cus_..., sub_...
    static ref IDENTIFIER_VALIDATION_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9_]{1,255}$").unwrap();
}

/// Relay endpoints and the only method they answer to
pub const RELAY_ROUTES: &[(&str, Method)] = &[
    ("/api/create-checkout-session", Method::Post),
    ("/api/checkout-session", Method::Get),
    ("/api/manage-subscription", Method::Post),
    ("/api/webhook", Method::Post),
];

pub fn allowed_method(path: &str) -> Option<Method> {
    let path = path.trim_end_matches('/');

    RELAY_ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, method)| *method)
}

pub fn checked_identifier<'a>(value: &'a str, name: &str) -> Result<&'a str, RelayError> {
    if !IDENTIFIER_VALIDATION_REGEX.is_match(value) {
        return Err(RelayError::InvalidInput(format!("Invalid {name}")));
    }
    Ok(value)
}

/// Logs a failed relay call and turns it into its response
pub fn report(id: uuid::Uuid, error: RelayError) -> Response {
    match &error {
        RelayError::InvalidInput(_) | RelayError::UnknownAction | RelayError::Signature(_) => {
            warn!("[{id}] Rejected request: {error}")
        }
        _ => error!("[{id}] Relay call failed: {error}"),
    }

    Response::from(error)
}

#[rocket::get("/")]
pub async fn root(remote_addr: std::net::SocketAddr) -> Response {
    app_response(Status::Ok, remote_addr).await
}

#[rocket::get("/front.js")]
pub async fn front_js(remote_addr: std::net::SocketAddr) -> Response {
    static_file_response("/front.js", ContentType::JavaScript, Status::Ok, remote_addr).await
}

#[rocket::get("/front_bg.wasm")]
pub async fn front_bg_wasm(remote_addr: std::net::SocketAddr) -> Response {
    static_file_response("/front_bg.wasm", ContentType::WASM, Status::Ok, remote_addr).await
}

#[rocket::get("/index.html")]
pub async fn index_html(remote_addr: std::net::SocketAddr) -> Response {
    app_response(Status::Ok, remote_addr).await
}

#[rocket::get("/favicon.ico")]
pub async fn favicon_ico(remote_addr: std::net::SocketAddr) -> Response {
    static_file_response("favicon.ico", ContentType::Icon, Status::Ok, remote_addr).await
}

// Every page of the app and every alias of a page serves the same index,
// the app picks what to render from the url
#[rocket::get("/<path..>", rank = 20)]
pub async fn page(path: std::path::PathBuf, remote_addr: std::net::SocketAddr) -> Option<Response> {
    let path = format!("/{}", path.display()).replace('\\', "/");

    let destination = shared::route::resolve(&path)?;

    if destination != path {
        debug!("{remote_addr} asked for {path}, serving {destination}");
    }

    Some(app_response(Status::Ok, remote_addr).await)
}

#[rocket::get("/resources/<file>")]
pub async fn static_resource(file: &str, remote_addr: std::net::SocketAddr) -> Response {
    #[rustfmt::skip]
    const ALLOWED_FILES: &[&str] = &[
        "logo.webp", "logo.png", "upload.png",
        "pdf.png", "merge.png", "split.png",
        "compress.png", "convert.png", "secure.png",
        "watermark.png",
    ];

    if !ALLOWED_FILES.contains(&file) {
        return Response::builder().with_status(Status::NotFound).build();
    }

    serve_static("/resources", file, remote_addr).await
}

#[rocket::get("/css/<file>")]
pub async fn static_css(file: &str, remote_addr: std::net::SocketAddr) -> Response {
    const ALLOWED_FILES: &[&str] = &[
        "style.css",
        "theme.css",
        "toolbar.css",
        "upload.css",
        "notification.css",
        "pages.css",
        "pricing.css",
    ];

    if !ALLOWED_FILES.contains(&file) {
        return Response::builder().with_status(Status::NotFound).build();
    }

    serve_static("/css", file, remote_addr).await
}

pub async fn serve_static(path: &str, file: &str, remote_addr: std::net::SocketAddr) -> Response {
    let content_type = file
        .rsplit_once('.')
        .and_then(|(_, ext)| ContentType::from_extension(ext))
        .unwrap_or_else(|| {
            error!("Could not infer content type of file: {file}, requested in {path}");
            ContentType::Any
        });

    trace!("Serving {path}/{file} w/ type: {content_type:?}");

    static_file_response(&format!("{path}/{file}"), content_type, Status::Ok, remote_addr).await
}

pub async fn app_response(status: Status, requester: impl std::fmt::Display) -> Response {
    static_file_response("/index.html", ContentType::HTML, status, requester).await
}

async fn static_file_response(
    path: &str,
    content_type: ContentType,
    status: Status,
    requester: impl std::fmt::Display,
) -> Response {
    async fn read_static(path: &str) -> std::io::Result<Vec<u8>> {
        let mut buffer = Vec::new();

        rocket::tokio::fs::File::open(format!("./static/{path}"))
            .await?
            .read_to_end(&mut buffer)
            .await?;

        Ok(buffer)
    }

    match read_static(path).await {
        Ok(bytes) => {
            trace!("Static file query from {requester}: {path} ({} bytes)", bytes.len());
            Response::builder()
                .with_status(status)
                .with_content(bytes)
                .with_content_type(content_type)
                .build()
        }
        Err(e) => {
            warn!("Could not read static file {path} for {requester}: {e}");
            Response::builder().with_status(Status::NotFound).build()
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{allowed_method, checked_identifier},
        rocket::http::Method,
    };

    #[test]
    fn relay_methods() {
        assert_eq!(allowed_method("/api/webhook"), Some(Method::Post));
        assert_eq!(allowed_method("/api/checkout-session/"), Some(Method::Get));
        assert_eq!(allowed_method("/api/unknown"), None);
    }

    #[test]
    fn identifiers() {
        assert!(checked_identifier("price_1NxYz2AbC", "priceId").is_ok());
        assert!(checked_identifier("cs_test_a1B2", "session id").is_ok());
        assert!(checked_identifier("../v1/customers", "session id").is_err());
        assert!(checked_identifier("", "priceId").is_err());
    }
}
