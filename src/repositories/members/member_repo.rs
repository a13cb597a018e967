//! 회원 리포지토리
//!
//! 회원 엔티티의 데이터 액세스 계층입니다. MongoDB를 주 저장소로 사용하고
//! Redis를 통한 조회 캐싱을 지원합니다.
//!
//! ## 캐싱 전략
//!
//! - 개별 회원: `member:{uuid}` (TTL 10분)
//! - 이메일 조회: `member:email:{email}` (TTL 10분)
//! - 쓰기 연산 후에는 해당 회원의 캐시를 무효화합니다.

use std::sync::Arc;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::{
    caching::redis::RedisClient,
    db::{is_duplicate_key_error, Database},
    domain::entities::Member,
};
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "members";
const CACHE_TTL_SECONDS: u64 = 600;

/// 회원 데이터 액세스 리포지토리
pub struct MemberRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MemberRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Member> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    fn cache_key(id: Uuid) -> String {
        format!("member:{}", id)
    }

    fn email_cache_key(email: &str) -> String {
        format!("member:email:{}", email)
    }

    /// UUID로 회원을 조회합니다. 캐시 우선 조회입니다.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, AppError> {
        let cache_key = Self::cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        let member = self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref member) = member {
            let _ = self.redis
                .set_with_expiry(&cache_key, member, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(member)
    }

    /// 이메일로 회원을 조회합니다. 소셜 로그인 시 기존 가입 여부 확인에 사용됩니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AppError> {
        let cache_key = Self::email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        let member = self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref member) = member {
            let _ = self.redis
                .set_with_expiry(&cache_key, member, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(member)
    }

    /// 새 회원을 저장합니다. 이메일 중복은 충돌 에러입니다.
    ///
    /// 사전 조회와 삽입 사이에 같은 이메일이 끼어들 수 있으므로, 유니크
    /// 인덱스가 반환하는 중복 키 에러도 동일한 충돌 에러로 매핑합니다.
    pub async fn create(&self, member: Member) -> Result<Member, AppError> {
        if self.find_by_email(&member.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 가입된 이메일입니다".to_string()));
        }

        self.collection()
            .insert_one(&member)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 가입된 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(member)
    }

    /// 마지막 로그인 시각을 갱신합니다.
    pub async fn update_last_login(&self, id: Uuid) -> Result<(), AppError> {
        let now = mongodb::bson::DateTime::now();

        self.collection()
            .update_one(
                doc! { "_id": id.to_string() },
                doc! { "$set": { "last_login_at": now, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.invalidate_cache(id).await;
        Ok(())
    }

    /// 회원을 비활성화합니다 (소프트 삭제).
    ///
    /// 비활성 회원은 이후 인증 단계에서 principal 생성에 실패합니다.
    pub async fn deactivate(&self, id: Uuid) -> Result<bool, AppError> {
        let now = mongodb::bson::DateTime::now();

        let result = self.collection()
            .update_one(
                doc! { "_id": id.to_string() },
                doc! { "$set": { "is_active": false, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count > 0 {
            self.invalidate_cache(id).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 해당 회원의 캐시를 무효화합니다. 이메일 키까지 함께 지웁니다.
    async fn invalidate_cache(&self, id: Uuid) {
        let _ = self.redis.del(&Self::cache_key(id)).await;

        // 이메일 키는 회원 문서를 알아야 지울 수 있으므로 DB에서 직접 읽는다
        if let Ok(Some(member)) = self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
        {
            let _ = self.redis.del(&Self::email_cache_key(&member.email)).await;
        }
    }

    /// 컬렉션 인덱스를 생성합니다. 애플리케이션 초기화 시 한 번 호출됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
