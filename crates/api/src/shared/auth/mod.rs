use crate::error::ApiError;
use actix_web::HttpRequest;
use alarmbot_infra::Context;

fn parse_bearer_token(header_value: &str) -> Option<&str> {
    let parts = header_value.splitn(2, ' ').collect::<Vec<_>>();
    if parts.len() != 2 || !parts[0].eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(parts[1].trim())
}

/// Every route except the health check requires the shared api secret in
/// the authorization header.
pub fn protect_route(http_req: &HttpRequest, ctx: &Context) -> Result<(), ApiError> {
    let token = http_req
        .headers()
        .get("authorization")
        .and_then(|header_value| header_value.to_str().ok())
        .and_then(parse_bearer_token);

    match token {
        Some(token) if token == ctx.config.api_secret => Ok(()),
        _ => Err(ApiError::Unauthorized(
            "Missing or invalid api token in authorization header".into(),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn parses_bearer_tokens() {
        assert_eq!(parse_bearer_token("Bearer mysecret"), Some("mysecret"));
        assert_eq!(parse_bearer_token("bearer mysecret"), Some("mysecret"));
        assert_eq!(parse_bearer_token("Basic mysecret"), None);
        assert_eq!(parse_bearer_token("mysecret"), None);
        assert_eq!(parse_bearer_token(""), None);
    }

    #[actix_web::test]
    async fn rejects_requests_without_valid_token() {
        let ctx = Context::create_inmemory();

        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).is_err());

        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-the-secret"))
            .to_http_request();
        assert!(protect_route(&req, &ctx).is_err());

        let req = TestRequest::default()
            .insert_header((
                "Authorization",
                format!("Bearer {}", ctx.config.api_secret),
            ))
            .to_http_request();
        assert!(protect_route(&req, &ctx).is_ok());
    }
}
