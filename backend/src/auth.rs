//! Admin authorization as an injected predicate.
//!
//! "Is this caller an admin" is decided by comparing the request's bearer
//! token with the token configured at startup. The policy object is built
//! in `main` and injected as app data, so swapping in a real identity layer
//! later only touches this file. No token configured means nobody is an
//! admin.

use actix_web::HttpRequest;

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone)]
pub struct AdminPolicy {
    token: Option<String>,
}

impl AdminPolicy {
    pub fn with_token(token: Option<String>) -> Self {
        Self { token }
    }

    /// Checks the `Authorization: Bearer <token>` header against the
    /// configured admin token. Constant behavior for every failure mode:
    /// missing header, malformed header and wrong token all yield the same
    /// `Unauthorized`.
    pub fn authorize(&self, req: &HttpRequest) -> ServiceResult<()> {
        let Some(expected) = &self.token else {
            return Err(ServiceError::Unauthorized);
        };
        let presented = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));
        match presented {
            Some(token) if token == expected => Ok(()),
            _ => Err(ServiceError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn policy() -> AdminPolicy {
        AdminPolicy::with_token(Some("secret".to_string()))
    }

    #[test]
    fn accepts_matching_bearer_token() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer secret"))
            .to_http_request();
        assert!(policy().authorize(&req).is_ok());
    }

    #[test]
    fn rejects_wrong_token() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer nope"))
            .to_http_request();
        assert!(policy().authorize(&req).is_err());
    }

    #[test]
    fn rejects_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert!(policy().authorize(&req).is_err());
    }

    #[test]
    fn rejects_everything_when_no_token_configured() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer secret"))
            .to_http_request();
        assert!(AdminPolicy::with_token(None).authorize(&req).is_err());
    }
}
