//! 요청 스코프 인증 정보
//!
//! 인증 미들웨어가 Request Extensions에 저장하는 회원 정보이며,
//! 핸들러에서는 extractor로 바로 받을 수 있습니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::AuthProvider;

/// 인증된 회원
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 회원 UUID
    pub member_id: Uuid,

    pub auth_provider: AuthProvider,

    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(&role.to_string())
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let user = AuthenticatedUser {
            member_id: Uuid::new_v4(),
            auth_provider: AuthProvider::Google,
            roles: vec!["user".to_string(), "admin".to_string()],
        };

        assert!(user.has_role("admin"));
        assert!(user.has_role("user"));
        assert!(!user.has_role("moderator"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_has_any_role() {
        let user = AuthenticatedUser {
            member_id: Uuid::new_v4(),
            auth_provider: AuthProvider::Kakao,
            roles: vec!["user".to_string()],
        };

        assert!(user.has_any_role(&["admin", "user"]));
        assert!(!user.has_any_role(&["admin", "moderator"]));
        assert!(!user.is_admin());
    }
}
