//! 주문 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/orders` | 주문 생성 (상품 스냅샷 내장) |
//! | `GET` | `/orders` | 내 주문 목록 조회 (페이지네이션) |
//! | `GET` | `/orders/{order_id}` | 주문 상세 조회 (본인만) |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::PageRequest;
use crate::domain::dto::orders::CreateOrderRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 주문을 생성합니다.
///
/// 요청의 상품 라인은 주문 시점 스냅샷으로 변환되어 주문 문서에
/// 내장됩니다. 합계는 서버에서 계산합니다.
///
/// # Endpoint
/// `POST /orders` (인증 필요)
#[post("")]
pub async fn create_order(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let order = state.order_service
        .create_order(user.member_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(order))
}

/// 현재 로그인한 회원의 주문 목록을 조회합니다.
///
/// # Endpoint
/// `GET /orders` (인증 필요)
#[get("")]
pub async fn get_my_orders(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.order_service
        .find_my_order_list(&query, user.member_id)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 주문 단건을 조회합니다. 본인의 주문만 조회할 수 있습니다.
///
/// # Endpoint
/// `GET /orders/{order_id}` (인증 필요)
#[get("/{order_id}")]
pub async fn get_order_detail(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    order_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = state.order_service
        .get_order_detail(&order_id, user.member_id)
        .await?;

    Ok(HttpResponse::Ok().json(order))
}
