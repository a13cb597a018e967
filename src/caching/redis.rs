//! Redis 캐시 클라이언트
//!
//! JSON 직렬화 기반의 얇은 Redis 래퍼입니다. 회원 조회 캐싱과
//! 리프레시 토큰 세션 저장에 사용됩니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

/// Redis 캐시 클라이언트
///
/// 값은 항상 JSON 문자열로 저장/조회됩니다. 캐시 실패는 호출부에서
/// 무시 가능하도록 Redis 에러를 그대로 반환합니다.
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트를 생성하고 PING으로 연결을 검증합니다.
    ///
    /// ## 환경 변수
    /// - `REDIS_URL`: Redis 연결 URI (기본값: "redis://localhost:6379")
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 테스트용 클라이언트. URL만 파싱하며 실제 연결은 하지 않습니다.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            client: Client::open("redis://localhost:6379")
                .expect("static test URL must parse"),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }
}
