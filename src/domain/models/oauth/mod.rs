//! OAuth 프로바이더 관련 모델

use serde::{Deserialize, Serialize};

/// 회원 엔티티에 내장되는 OAuth 가입 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthData {
    /// 프로바이더 측 사용자 식별자 (Google의 `sub`)
    pub provider_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_profile_image: Option<String>,
}

/// Google userinfo 엔드포인트 응답
///
/// <https://www.googleapis.com/oauth2/v2/userinfo> 의 필드 중 가입에
/// 필요한 것만 역직렬화합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub verified_email: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_userinfo_deserializes_with_optional_fields() {
        let json = r#"{"id":"118273","email":"alice@gmail.com","name":"Alice Kim"}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.id, "118273");
        assert_eq!(info.email, "alice@gmail.com");
        assert!(info.given_name.is_none());
        assert!(info.picture.is_none());
    }
}
