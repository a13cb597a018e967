//! 쇼핑몰 서비스

use std::sync::Arc;
use crate::{
    domain::dto::shopping_malls::{CreateShoppingMallRequest, ShoppingMallRes},
    domain::dto::{Page, PageRequest},
    domain::entities::ShoppingMall,
    repositories::shopping_malls::shopping_mall_repo::ShoppingMallRepository,
};
use crate::errors::errors::AppError;

/// 쇼핑몰 카탈로그 서비스
pub struct ShoppingMallService {
    mall_repo: Arc<ShoppingMallRepository>,
}

impl ShoppingMallService {
    pub fn new(mall_repo: Arc<ShoppingMallRepository>) -> Self {
        Self { mall_repo }
    }

    /// 등록된 쇼핑몰 목록을 페이지 단위로 조회합니다.
    pub async fn find_mall_list(&self, page_request: &PageRequest) -> Result<Page<ShoppingMallRes>, AppError> {
        let page = self.mall_repo.find_all(page_request).await?;
        Ok(page.map(ShoppingMallRes::from))
    }

    /// 쇼핑몰을 등록합니다 (관리자 전용 경로).
    pub async fn register_mall(&self, request: CreateShoppingMallRequest) -> Result<ShoppingMallRes, AppError> {
        let mall = ShoppingMall::new(request.name, request.url);
        let saved = self.mall_repo.save(mall).await?;

        log::info!("쇼핑몰 등록 완료 - name: {}", saved.name);

        Ok(ShoppingMallRes::from(saved))
    }
}
