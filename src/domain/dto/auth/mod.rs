//! 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Google OAuth 콜백 쿼리 파라미터
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "authorization code가 필요합니다"))]
    #[serde(default)]
    pub code: String,

    #[validate(length(min = 1, message = "state 파라미터가 필요합니다"))]
    #[serde(default)]
    pub state: String,

    /// 사용자가 동의를 거부한 경우 Google이 전달하는 에러 코드
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

/// 소셜 로그인 시작 응답 (동의 화면 URL)
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,

    pub state: String,
}

/// Google 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i32,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// 토큰 재발급 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refresh token이 필요합니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_requires_code_and_state() {
        let missing: OAuthCallbackQuery = serde_json::from_str("{}").unwrap();
        assert!(missing.validate().is_err());

        let ok: OAuthCallbackQuery =
            serde_json::from_str(r#"{"code":"4/abc","state":"f00d"}"#).unwrap();
        assert!(ok.validate().is_ok());
        assert!(ok.error.is_none());
    }

    #[test]
    fn test_google_token_response_optional_fields() {
        let json = r#"{"access_token":"ya29.x","token_type":"Bearer","expires_in":3599}"#;
        let response: GoogleTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert!(response.refresh_token.is_none());
        assert!(response.scope.is_none());
    }
}
