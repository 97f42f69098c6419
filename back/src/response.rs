use rocket::http::{ContentType, Status};

pub struct Response {
    status: Status,
    headers: std::collections::HashMap<String, String>,
    content: Vec<u8>,
    content_type: ContentType,
}

impl Response {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Serializes `value` into a json response, falls back to a 500 if that fails
    pub fn json(status: Status, value: &impl serde::Serialize) -> Self {
        match serde_json::to_vec(value) {
            Ok(bytes) => Self::builder()
                .with_status(status)
                .with_content(bytes)
                .with_content_type(ContentType::JSON)
                .build(),
            Err(e) => {
                error!("Failed to serialize response due to: {e}");
                Self::builder()
                    .with_status(Status::InternalServerError)
                    .with_content(r#"{"error":"Internal server error"}"#)
                    .with_content_type(ContentType::JSON)
                    .build()
            }
        }
    }

    pub fn error(status: Status, message: impl Into<String>) -> Self {
        Self::json(status, &shared::payment::ErrorBody::new(message))
    }

    pub fn redirect(location: &str, status: Status) -> Self {
        Self::builder()
            .with_status(status)
            .with_header("Location", location)
            .build()
    }

    pub fn method_not_allowed(allow: &str) -> Self {
        Self::builder()
            .with_status(Status::MethodNotAllowed)
            .with_header("Allow", allow)
            .with_content("Method Not Allowed")
            .with_content_type(ContentType::Text)
            .build()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn headers(&self) -> &std::collections::HashMap<String, String> {
        &self.headers
    }
}

impl From<crate::error::RelayError> for Response {
    fn from(error: crate::error::RelayError) -> Self {
        use crate::error::RelayError;

        let status = error.status();

        match error {
            // The provider's own signing library answers in plain text
            RelayError::Signature(e) => Self::builder()
                .with_status(status)
                .with_content(format!("Webhook Error: {e}"))
                .with_content_type(ContentType::Text)
                .build(),
            other => Self::error(status, other.to_string()),
        }
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for Response {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        use {
            rocket::response::{Builder, Response},
            std::io::Cursor,
        };

        let mut resp = Builder::new(Response::default());

        resp.status(self.status);

        resp.raw_header("Content-Type", self.content_type.to_string());

        for (name, value) in self.headers.into_iter() {
            resp.raw_header(name, value);
        }

        resp.sized_body(self.content.len(), Cursor::new(self.content));

        resp.ok()
    }
}

pub struct ResponseBuilder {
    inner: Response,
}

impl ResponseBuilder {
    pub fn with_content(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.inner.content = value.into();
        self
    }

    pub fn with_content_type(mut self, ctype: ContentType) -> Self {
        self.inner.content_type = ctype;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.inner.status = status;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.inner
            .headers
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> Response {
        self.inner
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        use std::collections::HashMap;

        ResponseBuilder {
            inner: Response {
                status: Status::Ok,
                headers: HashMap::new(),
                content: Vec::new(),
                content_type: ContentType::Any,
            },
        }
    }
}
