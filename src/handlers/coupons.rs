//! 쿠폰 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/coupons` | 내 쿠폰 목록 조회 (페이지네이션) |
//! | `POST` | `/coupons` | 쿠폰 발급 (admin 전용) |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::PageRequest;
use crate::domain::dto::coupons::IssueCouponRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 현재 로그인한 회원의 쿠폰 목록을 조회합니다.
///
/// 쿼리 파라미터 `page`, `size`, `sort`(예: `issued_at,desc`)를 받습니다.
/// 쿠폰이 없으면 빈 페이지가 반환됩니다.
///
/// # Endpoint
/// `GET /coupons` (인증 필요)
#[get("")]
pub async fn get_my_coupons(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.coupon_service
        .find_my_coupon_list(&query, user.member_id)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 회원에게 쿠폰을 발급합니다.
///
/// # Endpoint
/// `POST /coupons` (admin 역할 필요)
#[post("")]
pub async fn issue_coupon(
    state: web::Data<AppState>,
    body: web::Json<IssueCouponRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let coupon = state.coupon_service.issue_coupon(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(coupon))
}
