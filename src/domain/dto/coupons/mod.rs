//! 쿠폰 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::domain::entities::Coupon;

/// 쿠폰 발급 요청 (관리자 전용)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueCouponRequest {
    /// 발급 대상 회원 UUID
    pub member_id: Uuid,

    #[validate(length(
        min = 1,
        max = 100,
        message = "쿠폰 이름은 1-100자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(range(min = 1, message = "할인 금액은 1원 이상이어야 합니다"))]
    pub discount_amount: i64,

    /// 발급일로부터의 유효 기간 (일). 생략하면 무기한입니다.
    #[validate(range(min = 1, max = 3650, message = "유효 기간은 1-3650일 사이여야 합니다"))]
    pub valid_days: Option<u32>,
}

/// 쿠폰 응답
#[derive(Debug, Clone, Serialize)]
pub struct CouponRes {
    pub id: Option<String>,
    pub name: String,
    pub discount_amount: i64,
    pub used: bool,
    pub issued_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<Coupon> for CouponRes {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id.as_ref().map(|id| id.to_hex()),
            name: coupon.name,
            discount_amount: coupon.discount_amount,
            used: coupon.used,
            issued_at: coupon.issued_at.to_chrono(),
            expires_at: coupon.expires_at.map(|d| d.to_chrono()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_coupon_request_validation() {
        let valid = IssueCouponRequest {
            member_id: Uuid::new_v4(),
            name: "가을 세일 쿠폰".to_string(),
            discount_amount: 5000,
            valid_days: Some(30),
        };
        assert!(valid.validate().is_ok());

        let empty_name = IssueCouponRequest {
            name: String::new(),
            ..valid.clone()
        };
        assert!(empty_name.validate().is_err());

        let zero_discount = IssueCouponRequest {
            discount_amount: 0,
            ..valid.clone()
        };
        assert!(zero_discount.validate().is_err());
    }

    #[test]
    fn test_coupon_res_from_entity() {
        let coupon = Coupon::new(Uuid::new_v4(), "웰컴 쿠폰".to_string(), 3000, None);
        let res = CouponRes::from(coupon.clone());

        assert_eq!(res.id, None);
        assert_eq!(res.name, "웰컴 쿠폰");
        assert_eq!(res.discount_amount, 3000);
        assert!(!res.used);
        assert!(res.expires_at.is_none());

        // BSON 시각과 응답 시각은 밀리초 단위로 동일해야 한다
        assert_eq!(res.issued_at.timestamp_millis(), coupon.issued_at.timestamp_millis());
    }
}
