//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고, 토큰의 sub
//! (회원 UUID)를 보안 principal로 해석해 Request Extensions에 넣습니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::token_service::TokenService;
use crate::services::auth::user_details_service::UserDetailsService;

/// JWT 인증 미들웨어
///
/// 토큰 검증은 [`TokenService`], 회원 존재/활성 확인은
/// [`UserDetailsService`]에 위임합니다. 적용된 라우트는 항상 인증을
/// 요구하며, 역할 조건은 선택적으로 추가합니다.
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
    user_details_service: Arc<UserDetailsService>,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required(
        token_service: Arc<TokenService>,
        user_details_service: Arc<UserDetailsService>,
    ) -> Self {
        Self {
            token_service,
            user_details_service,
            required_role: None,
        }
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(
        token_service: Arc<TokenService>,
        user_details_service: Arc<UserDetailsService>,
        role: &str,
    ) -> Self {
        let mut middleware = Self::required(token_service, user_details_service);
        middleware.required_role = Some(RequiredRole::Single(role.to_string()));
        middleware
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(
        token_service: Arc<TokenService>,
        user_details_service: Arc<UserDetailsService>,
        roles: Vec<&str>,
    ) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        let mut middleware = Self::required(token_service, user_details_service);
        middleware.required_role = Some(RequiredRole::Any(role_strings));
        middleware
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            user_details_service: self.user_details_service.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}
