use crate::response::Response;

#[inline]
pub async fn inner_404(
    addr: String,
    method: rocket::http::Method,
    uri: &rocket::http::uri::Origin<'_>,
    c_type: Option<&rocket::http::ContentType>,
) -> Response {
    warn!(
        "[{addr}] has hit a 404 with {} at {} {}",
        method,
        uri,
        c_type.map(|t| format!("({t})")).unwrap_or_default()
    );

    // The app renders its own not found page
    crate::routes::app_response(rocket::http::Status::NotFound, addr).await
}

async fn client_addr(req: &rocket::Request<'_>) -> String {
    use rocket::{outcome::Outcome, request::FromRequest as _};
    use rocket_client_addr::ClientAddr;

    if let Outcome::Success(addr) = ClientAddr::from_request(req).await {
        addr.get_ipv4_string()
            .unwrap_or_else(|| addr.get_ipv6_string())
    } else {
        "UNKNOWN ADDRESS".to_string()
    }
}

#[rocket::catch(404)]
pub async fn root_404(req: &rocket::Request<'_>) -> Response {
    inner_404(client_addr(req).await, req.method(), req.uri(), req.content_type()).await
}

/// Relay paths hit with the wrong method end up here too, since no route matched
#[rocket::catch(404)]
pub async fn api_404(req: &rocket::Request<'_>) -> Response {
    use rocket::http::Status;

    let addr = client_addr(req).await;
    let path = req.uri().path();

    if let Some(allowed) = crate::routes::allowed_method(path.as_str()) {
        if allowed != req.method() {
            debug!("[{addr}] {} is not allowed on {path}", req.method());
            return Response::method_not_allowed(allowed.as_str());
        }
    }

    warn!("[{addr}] has hit an api 404 with {} at {}", req.method(), req.uri());
    Response::error(Status::NotFound, "Not found")
}

#[rocket::catch(400)]
pub fn api_400(_req: &rocket::Request<'_>) -> Response {
    Response::error(rocket::http::Status::BadRequest, "Invalid request body")
}

#[rocket::catch(422)]
pub fn api_422(_req: &rocket::Request<'_>) -> Response {
    Response::error(rocket::http::Status::BadRequest, "Invalid request body")
}

#[rocket::catch(413)]
pub fn api_413(req: &rocket::Request<'_>) -> Response {
    let limit = req
        .limits()
        .get("json")
        .map(|limit| limit.to_string())
        .unwrap_or_else(|| String::from("unknown"));

    Response::error(
        rocket::http::Status::PayloadTooLarge,
        format!("Data too large, {limit} max"),
    )
}

#[rocket::catch(500)]
pub fn api_500(_req: &rocket::Request<'_>) -> Response {
    Response::error(rocket::http::Status::InternalServerError, "Internal server error")
}
