//! 쇼핑몰 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/shopping-malls` | 쇼핑몰 목록 조회 (페이지네이션) |
//! | `POST` | `/shopping-malls` | 쇼핑몰 등록 (admin 전용) |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::PageRequest;
use crate::domain::dto::shopping_malls::CreateShoppingMallRequest;
use crate::errors::errors::AppError;

/// 등록된 쇼핑몰 목록을 조회합니다. 인증 없이 접근 가능합니다.
///
/// # Endpoint
/// `GET /shopping-malls`
#[get("")]
pub async fn get_mall_list(
    state: web::Data<AppState>,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.mall_service.find_mall_list(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// 쇼핑몰을 등록합니다.
///
/// # Endpoint
/// `POST /shopping-malls` (admin 역할 필요)
#[post("")]
pub async fn register_mall(
    state: web::Data<AppState>,
    body: web::Json<CreateShoppingMallRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let mall = state.mall_service.register_mall(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(mall))
}
