//! 주문 서비스
//!
//! 주문 생성 시 요청의 상품 라인을 스냅샷으로 변환해 주문 문서에
//! 내장합니다. 이후 상품 정보가 바뀌어도 주문 내역은 주문 시점
//! 그대로 보존됩니다.

use std::sync::Arc;
use uuid::Uuid;
use crate::{
    domain::dto::orders::{CreateOrderRequest, OrderRes},
    domain::dto::{Page, PageRequest},
    domain::entities::{Order, ProductHistory},
    repositories::orders::order_repo::OrderRepository,
};
use crate::errors::errors::AppError;

/// 주문 비즈니스 로직 서비스
pub struct OrderService {
    order_repo: Arc<OrderRepository>,
}

impl OrderService {
    pub fn new(order_repo: Arc<OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// 주문을 생성합니다. 합계는 스냅샷에서 계산됩니다.
    pub async fn create_order(
        &self,
        member_id: Uuid,
        request: CreateOrderRequest,
    ) -> Result<OrderRes, AppError> {
        let snapshots: Vec<ProductHistory> = request.products
            .into_iter()
            .map(ProductHistory::from)
            .collect();

        let order = Order::new(member_id, snapshots);
        let saved = self.order_repo.save(order).await?;

        log::info!(
            "주문 생성 완료 - member_id: {}, 합계: {}원",
            member_id,
            saved.total_price
        );

        Ok(OrderRes::from(saved))
    }

    /// 회원의 주문 목록을 페이지 단위로 조회합니다.
    pub async fn find_my_order_list(
        &self,
        page_request: &PageRequest,
        member_id: Uuid,
    ) -> Result<Page<OrderRes>, AppError> {
        let page = self.order_repo
            .find_all_by_member_id(page_request, member_id)
            .await?;

        Ok(page.map(OrderRes::from))
    }

    /// 주문 단건을 조회합니다. 본인 주문이 아니면 권한 에러입니다.
    pub async fn get_order_detail(&self, order_id: &str, member_id: Uuid) -> Result<OrderRes, AppError> {
        let order = self.order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("주문을 찾을 수 없습니다".to_string()))?;

        if !order.is_owned_by(member_id) {
            return Err(AppError::AuthorizationError(
                "본인의 주문만 조회할 수 있습니다".to_string(),
            ));
        }

        Ok(OrderRes::from(order))
    }
}
