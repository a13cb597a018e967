//! 쿠폰 리포지토리
//!
//! 회원별 쿠폰 목록의 페이지네이션 조회와 쿠폰 발급 저장을 담당합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::{
    db::Database,
    domain::dto::{Page, PageRequest},
    domain::entities::Coupon,
};
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "coupons";

/// 쿠폰 데이터 액세스 리포지토리
pub struct CouponRepository {
    db: Arc<Database>,
}

impl CouponRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Coupon> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 회원의 쿠폰 목록을 페이지 단위로 조회합니다.
    ///
    /// 존재하지 않는 회원이면 빈 페이지가 반환됩니다 (에러가 아님).
    /// 기본 정렬은 발급일 내림차순입니다.
    pub async fn find_all_by_member_id(
        &self,
        page_request: &PageRequest,
        member_id: Uuid,
    ) -> Result<Page<Coupon>, AppError> {
        let filter = doc! { "member_id": member_id.to_string() };

        let total = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection()
            .find(filter)
            .sort(page_request.sort_doc("issued_at"))
            .skip(page_request.offset())
            .limit(page_request.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let coupons: Vec<Coupon> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(coupons, page_request, total))
    }

    /// 쿠폰을 저장하고 생성된 ID가 채워진 엔티티를 반환합니다.
    pub async fn save(&self, mut coupon: Coupon) -> Result<Coupon, AppError> {
        let result = self.collection()
            .insert_one(&coupon)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        coupon.id = result.inserted_id.as_object_id();

        Ok(coupon)
    }

    /// 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let member_index = IndexModel::builder()
            .keys(doc! { "member_id": 1, "issued_at": -1 })
            .options(IndexOptions::builder()
                .name("member_issued_at".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([member_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
