//! 리프레시 토큰 세션 저장소
//!
//! 로그인 시 발급한 리프레시 토큰을 Redis에 회원 단위로 저장합니다.
//! 재발급 요청은 저장된 토큰과의 일치 여부로 검증하며, 로그아웃은
//! 세션을 삭제해 이후 재발급을 차단합니다.

use std::sync::Arc;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::caching::redis::RedisClient;
use crate::errors::errors::AppError;

/// Redis에 저장되는 리프레시 토큰 세션 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    pub member_id: String,
    pub auth_provider: String,
    pub login_at: i64,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// 리프레시 토큰 리포지토리 (Redis 전용)
pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn session_key(member_id: &str) -> String {
        format!("refresh_token:{}", member_id)
    }

    /// 리프레시 토큰 세션을 저장합니다. 회원당 하나의 세션만 유지됩니다.
    pub async fn store_refresh_token(
        &self,
        member_id: &str,
        auth_provider: &str,
        refresh_token: &str,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        if ttl_seconds == 0 {
            return Err(AppError::InternalError("리프레시 토큰 TTL이 0입니다".to_string()));
        }

        // 최소 TTL 보장 (1분)
        let safe_ttl = ttl_seconds.max(60);

        let now = Utc::now().timestamp();
        let token_info = RefreshTokenInfo {
            member_id: member_id.to_string(),
            auth_provider: auth_provider.to_string(),
            login_at: now,
            refresh_token: refresh_token.to_string(),
            expires_at: now + safe_ttl as i64,
        };

        self.redis
            .set_with_expiry(&Self::session_key(member_id), &token_info, safe_ttl)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::debug!("리프레시 토큰 저장 완료 - member_id: {}, ttl: {}초", member_id, safe_ttl);
        Ok(())
    }

    /// 제시된 리프레시 토큰이 저장된 세션과 일치하면 세션 정보를 반환합니다.
    pub async fn get_refresh_token(
        &self,
        member_id: &str,
        refresh_token: &str,
    ) -> Result<Option<RefreshTokenInfo>, AppError> {
        let stored: Option<RefreshTokenInfo> = self.redis
            .get(&Self::session_key(member_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(stored.filter(|info| info.refresh_token == refresh_token))
    }

    /// 회원의 리프레시 토큰 세션을 삭제합니다 (로그아웃).
    pub async fn delete_refresh_token(&self, member_id: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::session_key(member_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
