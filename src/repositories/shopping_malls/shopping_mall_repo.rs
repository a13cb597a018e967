//! 쇼핑몰 리포지토리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::{is_duplicate_key_error, Database},
    domain::dto::{Page, PageRequest},
    domain::entities::ShoppingMall,
};
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "shopping_malls";

/// 쇼핑몰 데이터 액세스 리포지토리
pub struct ShoppingMallRepository {
    db: Arc<Database>,
}

impl ShoppingMallRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ShoppingMall> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 등록된 쇼핑몰 전체를 페이지 단위로 조회합니다. 기본 정렬은 이름 내림차순입니다.
    pub async fn find_all(&self, page_request: &PageRequest) -> Result<Page<ShoppingMall>, AppError> {
        let filter = doc! {};

        let total = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection()
            .find(filter)
            .sort(page_request.sort_doc("name"))
            .skip(page_request.offset())
            .limit(page_request.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let malls: Vec<ShoppingMall> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(malls, page_request, total))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<ShoppingMall>, AppError> {
        self.collection()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 쇼핑몰을 저장합니다. 이름 중복은 충돌 에러입니다.
    ///
    /// 사전 조회와 삽입 사이에 같은 이름이 끼어들 수 있으므로, 유니크
    /// 인덱스가 반환하는 중복 키 에러도 동일한 충돌 에러로 매핑합니다.
    pub async fn save(&self, mut mall: ShoppingMall) -> Result<ShoppingMall, AppError> {
        if self.find_by_name(&mall.name).await?.is_some() {
            return Err(AppError::ConflictError("이미 등록된 쇼핑몰입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&mall)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 등록된 쇼핑몰입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        mall.id = result.inserted_id.as_object_id();

        Ok(mall)
    }

    /// 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
