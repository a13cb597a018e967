//! Google OAuth 2.0 로그인 서비스
//!
//! 동의 화면 URL 생성 → authorization code 교환 → userinfo 조회 →
//! 회원 조회/가입 → JWT 발급까지의 소셜 로그인 플로우를 담당합니다.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use chrono::Utc;
use crate::{
    config::{AuthProvider, GoogleOAuthConfig, OAuthConfig},
    domain::dto::auth::{GoogleTokenResponse, OAuthLoginUrlResponse},
    domain::entities::Member,
    domain::models::oauth::GoogleUserInfo,
    domain::models::token::TokenPair,
    repositories::members::member_repo::MemberRepository,
    services::auth::token_service::TokenService,
};
use crate::errors::errors::AppError;

/// Google 소셜 로그인 서비스
pub struct GoogleAuthService {
    member_repo: Arc<MemberRepository>,
    token_service: Arc<TokenService>,
    http_client: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(member_repo: Arc<MemberRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            member_repo,
            token_service,
            http_client: reqwest::Client::new(),
        }
    }

    /// CSRF 방지용 state 값을 생성합니다.
    fn generate_state() -> String {
        let mut hasher = DefaultHasher::new();
        OAuthConfig::state_secret().hash(&mut hasher);
        Utc::now().timestamp_nanos_opt().unwrap_or_default().hash(&mut hasher);
        format!("{:x}", hasher.finish())
    }

    /// Google 동의 화면 URL을 생성합니다.
    pub fn get_login_url(&self) -> OAuthLoginUrlResponse {
        let state = Self::generate_state();

        let login_url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}&access_type=offline",
            GoogleOAuthConfig::auth_uri(),
            urlencoding::encode(&GoogleOAuthConfig::client_id()),
            urlencoding::encode(&GoogleOAuthConfig::redirect_uri()),
            urlencoding::encode("openid email profile"),
            state,
        );

        OAuthLoginUrlResponse { login_url, state }
    }

    /// authorization code를 Google 액세스 토큰으로 교환합니다.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", code.to_string()),
            ("client_id", GoogleOAuthConfig::client_id()),
            ("client_secret", GoogleOAuthConfig::client_secret()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code".to_string()),
        ];

        let response = self.http_client
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google 토큰 교환 실패 - status: {}, body: {}", status, body);
            return Err(AppError::ExternalServiceError(
                "Google 토큰 교환에 실패했습니다".to_string(),
            ));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Google userinfo 엔드포인트에서 프로필을 조회합니다.
    pub async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self.http_client
            .get(GoogleOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google userinfo 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(
                "Google 사용자 정보 조회에 실패했습니다".to_string(),
            ));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google userinfo 파싱 실패: {}", e)))
    }

    /// 콜백 코드로 로그인을 완료하고 JWT 토큰 쌍을 발급합니다.
    ///
    /// 미가입 이메일이면 자동으로 회원이 생성됩니다. 같은 이메일이 다른
    /// 프로바이더로 이미 가입된 경우는 충돌 에러입니다.
    pub async fn login_with_code(&self, code: &str) -> Result<(Member, TokenPair), AppError> {
        let google_token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&google_token.access_token).await?;

        let member = self.find_or_create_member(user_info).await?;

        self.member_repo.update_last_login(member.id).await?;

        let token_pair = self.token_service.issue_token_pair(&member).await?;

        log::info!("✅ Google 로그인 완료 - member_id: {}", member.id);

        Ok((member, token_pair))
    }

    async fn find_or_create_member(&self, user_info: GoogleUserInfo) -> Result<Member, AppError> {
        if let Some(existing) = self.member_repo.find_by_email(&user_info.email).await? {
            if existing.auth_provider != AuthProvider::Google {
                return Err(AppError::ConflictError(format!(
                    "이미 {} 계정으로 가입된 이메일입니다",
                    existing.auth_provider.as_str(),
                )));
            }

            if !existing.is_active {
                return Err(AppError::AuthenticationError(
                    "비활성화된 계정입니다".to_string(),
                ));
            }

            return Ok(existing);
        }

        let nickname = user_info.given_name.clone().unwrap_or_else(|| user_info.name.clone());

        let member = Member::new_social(
            user_info.email,
            nickname,
            AuthProvider::Google,
            user_info.id,
            user_info.picture,
        );

        let created = self.member_repo.create(member).await?;

        log::info!("🚀 신규 회원 가입 - member_id: {}, provider: google", created.id);

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_state_differs_per_call() {
        let a = GoogleAuthService::generate_state();
        let b = GoogleAuthService::generate_state();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
