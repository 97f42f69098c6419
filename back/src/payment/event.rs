use serde_json::Value;

/// A webhook delivery, only the fields the relay reads
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: EventData,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct EventData {
    pub object: Value,
}

impl Event {
    pub fn customer_email(&self) -> Option<&str> {
        self.data
            .object
            .get("customer_email")
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
    }

    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("NO_ID")
    }
}

#[cfg(test)]
mod tests {
    use super::Event;

    #[test]
    fn reads_completed_checkout() {
        let event: Event = serde_json::from_str(
            r#"{"id":"evt_1","type":"checkout.session.completed","data":{"object":{"customer_email":"a@b.com","id":"cs_1"}}}"#,
        )
        .unwrap();

        assert_eq!(event.kind, "checkout.session.completed");
        assert_eq!(event.customer_email(), Some("a@b.com"));
        assert_eq!(event.display_id(), "evt_1");
    }

    #[test]
    fn null_email_reads_as_none() {
        let event: Event = serde_json::from_str(
            r#"{"type":"checkout.session.completed","data":{"object":{"customer_email":null}}}"#,
        )
        .unwrap();

        assert_eq!(event.customer_email(), None);
    }
}
