//! 주문 리포지토리
//!
//! 주문 문서에는 상품 스냅샷이 내장되어 있으므로 저장/조회는 항상
//! 스냅샷을 포함한 주문 전체 단위로 이루어집니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::{
    db::Database,
    domain::dto::{Page, PageRequest},
    domain::entities::Order,
};
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "orders";

/// 주문 데이터 액세스 리포지토리
pub struct OrderRepository {
    db: Arc<Database>,
}

impl OrderRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Order> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 주문을 저장하고 생성된 ID가 채워진 엔티티를 반환합니다.
    pub async fn save(&self, mut order: Order) -> Result<Order, AppError> {
        let result = self.collection()
            .insert_one(&order)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        order.id = result.inserted_id.as_object_id();

        Ok(order)
    }

    /// 주문 ID로 단건 조회합니다. 잘못된 ID 형식은 검증 에러입니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Order>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 주문 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 회원의 주문 목록을 페이지 단위로 조회합니다. 기본 정렬은 주문일 내림차순입니다.
    pub async fn find_all_by_member_id(
        &self,
        page_request: &PageRequest,
        member_id: Uuid,
    ) -> Result<Page<Order>, AppError> {
        let filter = doc! { "member_id": member_id.to_string() };

        let total = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection()
            .find(filter)
            .sort(page_request.sort_doc("created_at"))
            .skip(page_request.offset())
            .limit(page_request.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let orders: Vec<Order> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(orders, page_request, total))
    }

    /// 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let member_index = IndexModel::builder()
            .keys(doc! { "member_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("member_created_at".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([member_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
