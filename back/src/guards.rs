use rocket::{
    outcome::Outcome,
    request::{self, FromRequest},
    Request,
};

/// Scheme + host of the page that made the request, used to build provider return urls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(String);

impl RequestOrigin {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_headers(origin: Option<&str>, host: Option<&str>) -> Self {
        if let Some(origin) = origin.filter(|origin| !origin.is_empty() && *origin != "null") {
            return Self(origin.trim_end_matches('/').to_string());
        }

        let host = host.unwrap_or("localhost");

        // A bare host header has no scheme
        let scheme = if host.starts_with("localhost") || host.starts_with("127.0.0.1") {
            "http"
        } else {
            "https"
        };

        Self(format!("{scheme}://{}", host.trim_end_matches('/')))
    }
}

impl std::fmt::Display for RequestOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestOrigin {
    type Error = std::convert::Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let headers = req.headers();

        Outcome::Success(Self::from_headers(
            headers.get_one("Origin"),
            headers.get_one("Host"),
        ))
    }
}

/// Raw value of the webhook signature header, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader(Option<String>);

impl SignatureHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SignatureHeader {
    type Error = std::convert::Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        Outcome::Success(Self(
            req.headers()
                .get_one(crate::payment::signature::HEADER)
                .map(str::to_string),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::RequestOrigin;

    #[test]
    fn origin_header_wins() {
        let origin = RequestOrigin::from_headers(Some("https://pdfville.com/"), Some("internal:8000"));
        assert_eq!(origin.as_str(), "https://pdfville.com");
    }

    #[test]
    fn host_gets_a_scheme() {
        assert_eq!(
            RequestOrigin::from_headers(None, Some("pdfville.com")).as_str(),
            "https://pdfville.com"
        );
        assert_eq!(
            RequestOrigin::from_headers(Some("null"), Some("localhost:3000")).as_str(),
            "http://localhost:3000"
        );
        assert_eq!(RequestOrigin::from_headers(None, None).as_str(), "http://localhost");
    }
}
