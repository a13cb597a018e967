//! 인증 HTTP 핸들러
//!
//! Google 소셜 로그인과 토큰 재발급/로그아웃 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/auth/google` | Google 동의 화면 URL 생성 |
//! | `GET` | `/auth/google/callback` | OAuth 콜백 처리 및 JWT 발급 |
//! | `POST` | `/auth/refresh` | 리프레시 토큰으로 토큰 쌍 재발급 |
//! | `POST` | `/token/logout` | 리프레시 세션 삭제 |

use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::auth::{OAuthCallbackQuery, RefreshTokenRequest};
use crate::domain::dto::members::MemberRes;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::user_details_service::UserDetailsService;

/// Google OAuth 동의 화면 URL을 생성합니다.
///
/// # Endpoint
/// `GET /auth/google`
#[get("/google")]
pub async fn google_login_url(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = state.google_auth_service.get_login_url();
    Ok(HttpResponse::Ok().json(response))
}

/// Google OAuth 콜백을 처리하고 JWT 토큰 쌍을 발급합니다.
///
/// 미가입 이메일이면 회원이 자동 생성됩니다.
///
/// # Endpoint
/// `GET /auth/google/callback`
#[get("/google/callback")]
pub async fn google_oauth_callback(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 사용자가 동의를 거부한 경우
    if let Some(ref error) = query.error {
        log::warn!("Google OAuth 동의 거부 - error: {}", error);
        return Err(AppError::AuthenticationError(
            "Google 로그인이 취소되었습니다".to_string(),
        ));
    }

    query.validate()?;

    let (member, token_pair) = state.google_auth_service
        .login_with_code(&query.code)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "member": MemberRes::from(member),
        "access_token": token_pair.access_token,
        "refresh_token": token_pair.refresh_token.unwrap_or_default(),
        "expires_in": token_pair.expires_in,
        "token_type": "Bearer"
    })))
}

/// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    state: web::Data<AppState>,
    body: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let claims = state.token_service.verify_token(&body.refresh_token)?;

    let member_id = UserDetailsService::parse_username(&claims.sub)?;
    let member = state.member_repo
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("회원을 찾을 수 없습니다".to_string()))?;

    if !member.is_active {
        log::warn!("비활성 회원의 토큰 갱신 시도 - member_id: {}", claims.sub);
        return Err(AppError::AuthenticationError("계정이 비활성화되었습니다".to_string()));
    }

    let token_pair = state.token_service
        .refresh_token_pair(&body.refresh_token, &member)
        .await?;

    log::info!("토큰 갱신 성공 - member_id: {}", claims.sub);

    Ok(HttpResponse::Ok().json(token_pair))
}

/// 로그아웃 - 리프레시 세션을 삭제합니다.
///
/// # Endpoint
/// `POST /token/logout` (인증 필요)
#[post("/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.token_service
        .revoke_refresh_token(&user.member_id.to_string())
        .await?;

    log::info!("로그아웃 완료 - member_id: {}", user.member_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "로그아웃되었습니다"
    })))
}
