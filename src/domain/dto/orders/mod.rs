//! 주문 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::{Order, OrderStatus, ProductHistory};
use crate::utils::string_utils::deserialize_optional_string;

/// 주문 생성 요청의 상품 한 줄
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductLineRequest {
    #[validate(range(min = 1, max = 999, message = "수량은 1-999개 사이여야 합니다"))]
    pub count: i64,

    #[validate(range(min = 0, message = "가격은 0원 이상이어야 합니다"))]
    pub price: i64,

    #[validate(length(min = 1, max = 200, message = "상품명은 1-200자 사이여야 합니다"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub size: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub color: Option<String>,

    #[validate(range(min = 0, message = "배송비는 0원 이상이어야 합니다"))]
    #[serde(default)]
    pub fee: i64,
}

impl From<ProductLineRequest> for ProductHistory {
    fn from(line: ProductLineRequest) -> Self {
        Self {
            product_count: line.count,
            product_price: line.price,
            product_name: line.name,
            product_image: line.image,
            product_size: line.size,
            product_color: line.color,
            product_fee: line.fee,
        }
    }
}

/// 주문 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "주문 상품이 최소 1개 필요합니다"))]
    #[validate(nested)]
    pub products: Vec<ProductLineRequest>,
}

/// 주문 응답
#[derive(Debug, Clone, Serialize)]
pub struct OrderRes {
    pub id: Option<String>,
    pub status: OrderStatus,
    pub total_price: i64,
    pub total_fee: i64,
    pub products: Vec<ProductHistory>,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderRes {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.as_ref().map(|id| id.to_hex()),
            status: order.status,
            total_price: order.total_price,
            total_fee: order.total_fee,
            products: order.products,
            created_at: order.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: i64, price: i64) -> ProductLineRequest {
        ProductLineRequest {
            count,
            price,
            name: "상품".to_string(),
            image: None,
            size: None,
            color: None,
            fee: 0,
        }
    }

    #[test]
    fn test_order_request_needs_at_least_one_product() {
        let empty = CreateOrderRequest { products: vec![] };
        assert!(empty.validate().is_err());

        let one = CreateOrderRequest { products: vec![line(1, 1000)] };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn test_nested_line_validation() {
        let zero_count = CreateOrderRequest { products: vec![line(0, 1000)] };
        assert!(zero_count.validate().is_err());

        let negative_price = CreateOrderRequest { products: vec![line(1, -1)] };
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_line_to_snapshot_conversion() {
        let request = ProductLineRequest {
            count: 2,
            price: 15000,
            name: "와이드 팬츠".to_string(),
            image: Some("https://cdn.example.com/p.jpg".to_string()),
            size: Some("M".to_string()),
            color: Some("beige".to_string()),
            fee: 2500,
        };

        let snapshot: ProductHistory = request.into();
        assert_eq!(snapshot.product_count, 2);
        assert_eq!(snapshot.product_price, 15000);
        assert_eq!(snapshot.product_name, "와이드 팬츠");
        assert_eq!(snapshot.product_fee, 2500);
        assert_eq!(snapshot.line_price(), 30000);
    }

    #[test]
    fn test_line_request_serde_roundtrip() {
        // 검증 파라미터 직렬화에 쓰이므로 양방향 serde가 유지되어야 한다
        let original = line(2, 5000);
        let json = serde_json::to_string(&original).unwrap();
        let restored: ProductLineRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.count, 2);
        assert_eq!(restored.price, 5000);
        assert!(restored.validate().is_ok());
    }

    #[test]
    fn test_optional_strings_deserialize_blank_as_none() {
        let json = r#"{"count":1,"price":1000,"name":"셔츠","size":"  ","color":""}"#;
        let line: ProductLineRequest = serde_json::from_str(json).unwrap();

        assert!(line.size.is_none());
        assert!(line.color.is_none());
        assert_eq!(line.fee, 0);
    }
}
