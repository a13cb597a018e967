//! JWT 토큰 서비스
//!
//! HS256 서명의 액세스/리프레시 토큰을 발급하고 검증합니다.
//! 리프레시 토큰은 Redis 세션 저장소와 대조해 단일 세션을 보장합니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::entities::Member,
    domain::models::token::{TokenClaims, TokenPair},
    repositories::tokens::token_repository::TokenRepository,
};
use crate::errors::errors::AppError;

/// JWT 발급/검증 서비스
pub struct TokenService {
    token_repo: Arc<TokenRepository>,
    secret: String,
}

impl TokenService {
    pub fn new(token_repo: Arc<TokenRepository>) -> Self {
        Self {
            token_repo,
            secret: JwtConfig::secret(),
        }
    }

    #[cfg(test)]
    fn with_secret(token_repo: Arc<TokenRepository>, secret: String) -> Self {
        Self { token_repo, secret }
    }

    /// 액세스 토큰을 생성합니다.
    pub fn generate_access_token(&self, member: &Member) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: member.id_string(),
            auth_provider: member.auth_provider.clone(),
            roles: member.roles.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 리프레시 토큰을 생성합니다. 유효 기간이 액세스 토큰보다 깁니다.
    pub fn generate_refresh_token(&self, member: &Member) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::days(JwtConfig::refresh_expiration_days());

        let claims = TokenClaims {
            sub: member.id_string(),
            auth_provider: member.auth_provider.clone(),
            roles: member.roles.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 액세스/리프레시 토큰 쌍을 발급하고 리프레시 세션을 저장합니다.
    pub async fn issue_token_pair(&self, member: &Member) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(member)?;
        let refresh_token = self.generate_refresh_token(member)?;

        let refresh_ttl = (JwtConfig::refresh_expiration_days() * 24 * 60 * 60) as u64;
        self.token_repo
            .store_refresh_token(
                &member.id_string(),
                member.auth_provider.as_str(),
                &refresh_token,
                refresh_ttl,
            )
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in: JwtConfig::expiration_hours() * 60 * 60,
        })
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            }
            _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
        })?;

        Ok(token_data.claims)
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// 저장된 세션과 일치하지 않는 토큰은 거부됩니다 (탈취 또는 재사용).
    pub async fn refresh_token_pair(&self, refresh_token: &str, member: &Member) -> Result<TokenPair, AppError> {
        let claims = self.verify_token(refresh_token)?;

        let session = self.token_repo
            .get_refresh_token(&claims.sub, refresh_token)
            .await?;

        if session.is_none() {
            return Err(AppError::AuthenticationError(
                "리프레시 토큰 세션이 유효하지 않습니다".to_string(),
            ));
        }

        if claims.sub != member.id_string() {
            return Err(AppError::AuthenticationError(
                "토큰의 회원 정보가 일치하지 않습니다".to_string(),
            ));
        }

        self.issue_token_pair(member).await
    }

    /// 회원의 리프레시 세션을 삭제합니다 (로그아웃).
    pub async fn revoke_refresh_token(&self, member_id: &str) -> Result<(), AppError> {
        self.token_repo.delete_refresh_token(member_id).await
    }

    /// Authorization 헤더에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::redis::RedisClient;
    use crate::config::AuthProvider;

    fn service() -> TokenService {
        // Redis는 발급/검증의 서명 경로에서는 사용되지 않는다
        let redis = Arc::new(RedisClient::for_tests());
        let token_repo = Arc::new(TokenRepository::new(redis));
        TokenService::with_secret(token_repo, "test-secret".to_string())
    }

    fn sample_member() -> Member {
        Member::new_social(
            "bob@example.com".to_string(),
            "bob".to_string(),
            AuthProvider::Google,
            "google-sub-2".to_string(),
            None,
        )
    }

    #[test]
    fn test_access_token_roundtrip() {
        let service = service();
        let member = sample_member();

        let token = service.generate_access_token(&member).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, member.id_string());
        assert_eq!(claims.auth_provider, AuthProvider::Google);
        assert_eq!(claims.roles, vec!["user".to_string()]);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let service = service();
        let result = service.verify_token("not.a.jwt");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let member = sample_member();
        let redis = Arc::new(RedisClient::for_tests());
        let token_repo = Arc::new(TokenRepository::new(redis.clone()));
        let issuer = TokenService::with_secret(token_repo, "secret-a".to_string());

        let verifier = TokenService::with_secret(
            Arc::new(TokenRepository::new(redis)),
            "secret-b".to_string(),
        );

        let token = issuer.generate_access_token(&member).unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(TokenService::extract_bearer_token("Bearer "), None);
        assert_eq!(TokenService::extract_bearer_token("Basic abc"), None);
        assert_eq!(TokenService::extract_bearer_token("abc.def.ghi"), None);
    }

    #[test]
    fn test_refresh_token_subject_matches_member() {
        let service = service();
        let member = sample_member();

        let token = service.generate_refresh_token(&member).unwrap();
        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, member.id_string());
    }
}
