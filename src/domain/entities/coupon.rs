//! 쿠폰 엔티티
//!
//! 회원에게 발급되는 할인 쿠폰입니다. 회원 UUID로 조회되며,
//! 페이지네이션된 목록 조회의 대상입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 쿠폰 엔티티 (`coupons` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 회원의 UUID (문자열 저장)
    pub member_id: Uuid,
    pub name: String,
    /// 할인 금액 (원)
    pub discount_amount: i64,
    pub used: bool,
    pub issued_at: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
}

impl Coupon {
    pub fn new(member_id: Uuid, name: String, discount_amount: i64, expires_at: Option<DateTime>) -> Self {
        Self {
            id: None,
            member_id,
            name,
            discount_amount,
            used: false,
            issued_at: DateTime::now(),
            expires_at,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coupon_is_unused() {
        let member_id = Uuid::new_v4();
        let coupon = Coupon::new(member_id, "신규 가입 쿠폰".to_string(), 3000, None);

        assert!(coupon.id.is_none());
        assert!(!coupon.used);
        assert_eq!(coupon.member_id, member_id);
        assert_eq!(coupon.discount_amount, 3000);
        assert!(coupon.id_string().is_none());
    }
}
