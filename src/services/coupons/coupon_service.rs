//! 쿠폰 서비스
//!
//! 내 쿠폰 목록 조회는 페이지 요청과 회원 UUID를 리포지토리에 그대로
//! 전달하는 읽기 전용 위임입니다. 존재하지 않는 회원은 빈 페이지로
//! 응답하며 에러를 내지 않습니다.

use std::sync::Arc;
use uuid::Uuid;
use crate::{
    domain::dto::coupons::{CouponRes, IssueCouponRequest},
    domain::dto::{Page, PageRequest},
    domain::entities::Coupon,
    repositories::coupons::coupon_repo::CouponRepository,
    repositories::members::member_repo::MemberRepository,
};
use crate::errors::errors::AppError;

/// 쿠폰 비즈니스 로직 서비스
pub struct CouponService {
    coupon_repo: Arc<CouponRepository>,
    member_repo: Arc<MemberRepository>,
}

impl CouponService {
    pub fn new(coupon_repo: Arc<CouponRepository>, member_repo: Arc<MemberRepository>) -> Self {
        Self { coupon_repo, member_repo }
    }

    /// 회원의 쿠폰 목록을 페이지 단위로 조회합니다.
    pub async fn find_my_coupon_list(
        &self,
        page_request: &PageRequest,
        member_id: Uuid,
    ) -> Result<Page<CouponRes>, AppError> {
        let page = self.coupon_repo
            .find_all_by_member_id(page_request, member_id)
            .await?;

        Ok(page.map(CouponRes::from))
    }

    /// 회원에게 쿠폰을 발급합니다 (관리자 전용 경로).
    pub async fn issue_coupon(&self, request: IssueCouponRequest) -> Result<CouponRes, AppError> {
        // 실존 회원에게만 발급
        self.member_repo
            .find_by_id(request.member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("발급 대상 회원을 찾을 수 없습니다".to_string()))?;

        let expires_at = request.valid_days.map(|days| {
            let millis = mongodb::bson::DateTime::now().timestamp_millis()
                + i64::from(days) * 24 * 60 * 60 * 1000;
            mongodb::bson::DateTime::from_millis(millis)
        });

        let coupon = Coupon::new(
            request.member_id,
            request.name,
            request.discount_amount,
            expires_at,
        );

        let saved = self.coupon_repo.save(coupon).await?;

        log::info!(
            "쿠폰 발급 완료 - 회원: {}, 쿠폰: {}",
            request.member_id,
            saved.name
        );

        Ok(CouponRes::from(saved))
    }
}
