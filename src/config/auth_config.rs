//! 인증 관련 설정
//!
//! Google OAuth, JWT, 서버 역할 등 인증/부트스트랩에 필요한 설정을
//! 환경 변수에서 읽어 제공합니다. 필수 값이 없으면 시작 단계에서 바로
//! 실패하도록 `expect`를 사용합니다.

use std::env;

/// Google OAuth 2.0 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID")
            .expect("GOOGLE_CLIENT_ID must be set")
    }

    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set")
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .expect("GOOGLE_REDIRECT_URI must be set")
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "mallook-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

/// OAuth 공통 설정
pub struct OAuthConfig;

impl OAuthConfig {
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }
}

/// 서버 부트스트랩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 역할 (예: api, batch). 시작 로그에 기록됩니다.
    pub fn role() -> String {
        env::var("SERVER_ROLE").unwrap_or_else(|_| "api".to_string())
    }

    pub fn bind_address() -> String {
        env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
    }
}

/// 인증 제공자 구분
///
/// 이 서비스는 소셜 로그인 전용이므로 로컬 비밀번호 인증은 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    Google,

    Kakao,

    Naver,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Kakao => "kakao",
            AuthProvider::Naver => "naver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Google.as_str(), "google");
        assert_eq!(AuthProvider::Kakao.as_str(), "kakao");
        assert_eq!(AuthProvider::Naver.as_str(), "naver");
    }

    #[test]
    fn test_auth_provider_serialization() {
        let provider = AuthProvider::Google;
        let json = serde_json::to_string(&provider).unwrap();
        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
