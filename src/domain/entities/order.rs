//! 주문 엔티티
//!
//! 주문과 주문 시점의 상품 스냅샷(`ProductHistory`)입니다. 스냅샷은 주문
//! 문서에 내장되므로 주문 없이 존재할 수 없습니다. 상품 원본이 이후에
//! 바뀌어도 주문 내역은 주문 당시의 가격/옵션을 그대로 보존합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 주문 상태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderStatus {
    Created,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

/// 주문 시점의 상품 스냅샷
///
/// 상품명, 가격, 옵션(사이즈/색상), 배송비를 주문 당시 값으로 고정합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductHistory {
    pub product_count: i64,
    pub product_price: i64,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_color: Option<String>,
    pub product_fee: i64,
}

impl ProductHistory {
    /// 이 스냅샷 한 줄의 상품 금액 (수량 × 단가, 배송비 제외)
    pub fn line_price(&self) -> i64 {
        self.product_count * self.product_price
    }
}

/// 주문 엔티티 (`orders` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub member_id: Uuid,
    pub status: OrderStatus,
    pub total_price: i64,
    pub total_fee: i64,
    pub products: Vec<ProductHistory>,
    pub created_at: DateTime,
}

impl Order {
    /// 상품 스냅샷 목록으로 주문을 생성합니다. 합계는 서버에서 계산합니다.
    pub fn new(member_id: Uuid, products: Vec<ProductHistory>) -> Self {
        let total_price = products.iter().map(ProductHistory::line_price).sum();
        let total_fee = products.iter().map(|p| p.product_fee).sum();

        Self {
            id: None,
            member_id,
            status: OrderStatus::Created,
            total_price,
            total_fee,
            products,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_owned_by(&self, member_id: Uuid) -> bool {
        self.member_id == member_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(count: i64, price: i64, fee: i64) -> ProductHistory {
        ProductHistory {
            product_count: count,
            product_price: price,
            product_name: "오버핏 셔츠".to_string(),
            product_image: None,
            product_size: Some("L".to_string()),
            product_color: Some("black".to_string()),
            product_fee: fee,
        }
    }

    #[test]
    fn test_line_price() {
        assert_eq!(snapshot(3, 15000, 2500).line_price(), 45000);
        assert_eq!(snapshot(1, 9900, 0).line_price(), 9900);
    }

    #[test]
    fn test_order_totals() {
        let member_id = Uuid::new_v4();
        let order = Order::new(
            member_id,
            vec![snapshot(2, 10000, 3000), snapshot(1, 5000, 0)],
        );

        assert_eq!(order.total_price, 25000);
        assert_eq!(order.total_fee, 3000);
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.products.len(), 2);
    }

    #[test]
    fn test_order_ownership() {
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let order = Order::new(owner, vec![snapshot(1, 1000, 0)]);

        assert!(order.is_owned_by(owner));
        assert!(!order.is_owned_by(other));
    }

    #[test]
    fn test_empty_order_totals_are_zero() {
        let order = Order::new(Uuid::new_v4(), vec![]);
        assert_eq!(order.total_price, 0);
        assert_eq!(order.total_fee, 0);
    }
}
