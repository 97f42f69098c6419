//! Webhook signature verification
//!
//! Header format: `t=<unix timestamp>,v1=<hex hmac>[,v1=<hex hmac>...]`
//! where each hmac is HMAC-SHA256(secret, "<timestamp>.<raw body>").
//! Other schemes (v0, ...) may be present and are ignored.

use {
    crate::error::SignatureError,
    hmac::{Hmac, Mac},
    sha2::Sha256,
};

type HmacSha256 = Hmac<Sha256>;

pub const HEADER: &str = "stripe-signature";

pub fn verify(
    payload: &[u8],
    header: Option<&str>,
    secret: &str,
    tolerance_s: u64,
) -> Result<(), SignatureError> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    verify_at(payload, header, secret, tolerance_s, now)
}

pub fn verify_at(
    payload: &[u8],
    header: Option<&str>,
    secret: &str,
    tolerance_s: u64,
    now: i64,
) -> Result<(), SignatureError> {
    if secret.is_empty() {
        return Err(SignatureError::NoSecret);
    }

    let header = header
        .map(str::trim)
        .filter(|header| !header.is_empty())
        .ok_or(SignatureError::MissingHeader)?;

    let mut timestamp = None;
    let mut signatures = Vec::new();

    for (key, value) in header
        .split(',')
        .filter_map(|item| item.trim().split_once('='))
    {
        match key {
            "t" => timestamp = value.parse::<i64>().ok(),
            "v1" => signatures.push(value),
            _ => (),
        }
    }

    let Some(timestamp) = timestamp else {
        return Err(SignatureError::Malformed);
    };

    if signatures.is_empty() {
        return Err(SignatureError::NoMatch);
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SignatureError::NoSecret)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    let matched = signatures
        .iter()
        .filter_map(|signature| hex::decode(signature).ok())
        .any(|signature| mac.clone().verify_slice(&signature).is_ok());

    if !matched {
        return Err(SignatureError::NoMatch);
    }

    let tolerance_s = i64::try_from(tolerance_s).unwrap_or(i64::MAX);
    if tolerance_s > 0 && timestamp < now.saturating_sub(tolerance_s) {
        return Err(SignatureError::Expired);
    }

    Ok(())
}

/// Builds a header the way the provider does, for tests
#[cfg(test)]
pub fn signed_header(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(format!("{timestamp}.").as_bytes());
    mac.update(payload);

    format!(
        "t={timestamp},v1={}",
        hex::encode(mac.finalize().into_bytes())
    )
}

#[cfg(test)]
mod tests {
    use {
        super::{signed_header, verify_at},
        crate::error::SignatureError,
    };

    const SECRET: &str = "whsec_test";
    const NOW: i64 = 1_700_000_000;
    const BODY: &[u8] = br#"{"type":"checkout.session.completed"}"#;

    #[test]
    fn accepts_a_fresh_signature() {
        let header = signed_header(BODY, SECRET, NOW - 10);
        assert!(verify_at(BODY, Some(&header), SECRET, 300, NOW).is_ok());
    }

    #[test]
    fn accepts_when_any_v1_matches() {
        let valid = signed_header(BODY, SECRET, NOW);
        let v1 = valid.split(",v1=").nth(1).unwrap();
        let header = format!("t={NOW},v0=abc,v1=deadbeef,v1={v1}");

        assert!(verify_at(BODY, Some(&header), SECRET, 300, NOW).is_ok());
    }

    #[test]
    fn rejects_tampered_payload_or_wrong_secret() {
        let header = signed_header(BODY, SECRET, NOW);

        assert!(matches!(
            verify_at(b"{}", Some(&header), SECRET, 300, NOW),
            Err(SignatureError::NoMatch)
        ));
        assert!(matches!(
            verify_at(BODY, Some(&header), "whsec_other", 300, NOW),
            Err(SignatureError::NoMatch)
        ));
    }

    #[test]
    fn rejects_old_timestamps() {
        let header = signed_header(BODY, SECRET, NOW - 301);

        assert!(matches!(
            verify_at(BODY, Some(&header), SECRET, 300, NOW),
            Err(SignatureError::Expired)
        ));
        // No tolerance, no expiry
        assert!(verify_at(BODY, Some(&header), SECRET, 0, NOW).is_ok());
    }

    #[test]
    fn huge_tolerance_never_overflows() {
        let header = signed_header(BODY, SECRET, 1);

        for tolerance_s in [1 << 63, u64::MAX] {
            assert!(verify_at(BODY, Some(&header), SECRET, tolerance_s, NOW).is_ok());
        }

        let header = signed_header(BODY, SECRET, i64::MIN + 1);
        assert!(verify_at(BODY, Some(&header), SECRET, u64::MAX, -NOW).is_ok());
    }

    #[test]
    fn rejects_garbage_headers() {
        assert!(matches!(
            verify_at(BODY, None, SECRET, 300, NOW),
            Err(SignatureError::MissingHeader)
        ));
        assert!(matches!(
            verify_at(BODY, Some("v1=abc"), SECRET, 300, NOW),
            Err(SignatureError::Malformed)
        ));
        assert!(matches!(
            verify_at(BODY, Some(&format!("t={NOW}")), SECRET, 300, NOW),
            Err(SignatureError::NoMatch)
        ));
        assert!(matches!(
            verify_at(BODY, Some("t=1,v1=00"), "", 300, NOW),
            Err(SignatureError::NoSecret)
        ));
    }
}
