//! 회원 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/members/me` | 내 프로필 조회 |
//! | `DELETE` | `/members/me` | 회원 탈퇴 (소프트 삭제) |

use actix_web::{delete, get, web, HttpResponse};
use crate::core::AppState;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 현재 로그인한 회원의 프로필을 조회합니다.
///
/// # Endpoint
/// `GET /members/me` (인증 필요)
#[get("/me")]
pub async fn get_my_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let member = state.member_service.get_member_detail(user.member_id).await?;
    Ok(HttpResponse::Ok().json(member))
}

/// 회원을 탈퇴 처리합니다.
///
/// 문서 삭제가 아닌 비활성화이며, 이후 이 회원의 토큰은 인증 단계에서
/// 거부됩니다.
///
/// # Endpoint
/// `DELETE /members/me` (인증 필요)
#[delete("/me")]
pub async fn deactivate_my_account(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.member_service.deactivate_member(user.member_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
