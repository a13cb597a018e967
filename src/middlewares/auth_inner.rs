//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::errors::errors::AppError;
use crate::services::auth::token_service::TokenService;
use crate::services::auth::user_details_service::UserDetailsService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Arc<TokenService>,
    pub user_details_service: Arc<UserDetailsService>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();
        let user_details_service = self.user_details_service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate_request(&req, &token_service, &user_details_service).await {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            };

            // 역할 검증
            if let Some(ref required) = required_role {
                if !required.is_satisfied(&user.roles) {
                    log::warn!("권한 부족: 회원 {} ({:?}), 필요 권한: {:?}",
                        user.member_id, user.roles, required);
                    let response = HttpResponse::Forbidden()
                        .json(serde_json::json!({
                            "error": "insufficient_permissions",
                            "message": "접근 권한이 부족합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            req.extensions_mut().insert(user.clone());
            log::debug!("인증 성공: 회원 {}", user.member_id);

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 JWT 토큰을 검증하고 회원 principal을 구성합니다.
///
/// 토큰 서명이 유효해도 sub가 실존하는 활성 회원을 가리키지 않으면
/// 인증은 실패합니다 (탈퇴한 회원의 살아있는 토큰 차단).
async fn authenticate_request(
    req: &ServiceRequest,
    token_service: &TokenService,
    user_details_service: &UserDetailsService,
) -> actix_web::Result<AuthenticatedUser, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = TokenService::extract_bearer_token(auth_header)
        .ok_or_else(|| AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string()))?;

    let claims = token_service.verify_token(token)?;

    // sub를 principal로 해석 - 회원 존재/활성 여부 확인
    user_details_service.load_user_by_username(&claims.sub).await?;

    let member_id = UserDetailsService::parse_username(&claims.sub)?;

    Ok(AuthenticatedUser {
        member_id,
        auth_provider: claims.auth_provider,
        roles: claims.roles,
    })
}
