use axum::http::{HeaderMap, header::USER_AGENT};

/// Client identifier PayEx expects with each order for fraud screening.
pub fn client_identifier(headers: &HeaderMap) -> String {
    let user_agent = headers
        .get(USER_AGENT)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();

    format!("useragent={}", user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn includes_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0 (X11; Linux x86_64)"));

        assert_eq!(
            client_identifier(&headers),
            "useragent=Mozilla/5.0 (X11; Linux x86_64)"
        );
    }

    #[test]
    fn missing_user_agent_is_empty() {
        assert_eq!(client_identifier(&HeaderMap::new()), "useragent=");
    }
}
