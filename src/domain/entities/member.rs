//! 회원 엔티티
//!
//! 소셜 로그인으로만 가입되는 회원 계정입니다. 식별자는 가입 시점에
//! 생성되는 UUID이며, 보안 계층은 이 UUID 문자열을 username으로 사용합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::AuthProvider;
use crate::domain::models::oauth::OAuthData;

/// 회원 엔티티 (`members` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// UUID 식별자. BSON에는 하이픈 포함 문자열로 저장됩니다.
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub nickname: String,
    pub auth_provider: AuthProvider,
    pub oauth_data: OAuthData,
    pub is_active: bool,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Member {
    /// 소셜 로그인 가입 회원을 생성합니다.
    ///
    /// 소셜 회원은 이메일 인증이 이미 끝난 상태이며 비밀번호를 갖지 않습니다.
    pub fn new_social(
        email: String,
        nickname: String,
        auth_provider: AuthProvider,
        provider_user_id: String,
        provider_profile_image: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        let oauth_data = OAuthData {
            provider_user_id,
            provider_profile_image: provider_profile_image.clone(),
        };

        Self {
            id: Uuid::new_v4(),
            email,
            nickname,
            auth_provider,
            oauth_data,
            is_active: true,
            roles: vec!["user".to_string()],
            profile_image_url: provider_profile_image,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member::new_social(
            "alice@example.com".to_string(),
            "alice".to_string(),
            AuthProvider::Google,
            "google-sub-1".to_string(),
            Some("https://lh3.googleusercontent.com/a/pic".to_string()),
        )
    }

    #[test]
    fn test_new_social_defaults() {
        let member = sample_member();

        assert!(member.is_active);
        assert_eq!(member.roles, vec!["user".to_string()]);
        assert!(member.last_login_at.is_none());
        assert_eq!(member.auth_provider, AuthProvider::Google);
        assert_eq!(member.oauth_data.provider_user_id, "google-sub-1");
    }

    #[test]
    fn test_new_social_generates_distinct_ids() {
        let a = sample_member();
        let b = sample_member();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_id_string_is_uuid_format() {
        let member = sample_member();
        let parsed = uuid::Uuid::parse_str(&member.id_string()).unwrap();
        assert_eq!(parsed, member.id);
    }

    #[test]
    fn test_has_role() {
        let member = sample_member();
        assert!(member.has_role("user"));
        assert!(!member.has_role("admin"));
    }
}
