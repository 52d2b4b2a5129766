use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use std::env;
use tower_http::set_header::SetResponseHeaderLayer;

const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
const CSP_API_VALUE: &str = "default-src 'none'; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";

/// Attach standard security headers to every response.
///
/// HSTS is only added in production (RUST_ENV=production), since it is
/// meaningless without HTTPS.
pub fn apply_security_headers(router: Router) -> Router {
    let include_hsts = env::var("RUST_ENV")
        .map(|v| v.to_lowercase() == "production")
        .unwrap_or(false);

    let router = router
        .layer(overwrite("x-content-type-options", "nosniff"))
        .layer(overwrite("x-frame-options", "DENY"))
        .layer(overwrite("content-security-policy", CSP_API_VALUE))
        .layer(overwrite("referrer-policy", REFERRER_POLICY_VALUE));

    if include_hsts {
        router.layer(overwrite("strict-transport-security", HSTS_VALUE))
    } else {
        router
    }
}

fn overwrite(name: &'static str, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_values_are_valid() {
        for value in [HSTS_VALUE, CSP_API_VALUE, REFERRER_POLICY_VALUE] {
            assert!(value.parse::<HeaderValue>().is_ok());
        }
    }

    #[test]
    fn test_apply_security_headers_builds() {
        std::env::remove_var("RUST_ENV");
        let _router = apply_security_headers(Router::new());
    }
}
