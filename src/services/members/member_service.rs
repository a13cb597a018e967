//! 회원 서비스

use std::sync::Arc;
use uuid::Uuid;
use crate::{
    domain::dto::members::MemberRes,
    repositories::members::member_repo::MemberRepository,
    services::auth::token_service::TokenService,
};
use crate::errors::errors::AppError;

/// 회원 프로필 조회/탈퇴 서비스
pub struct MemberService {
    member_repo: Arc<MemberRepository>,
    token_service: Arc<TokenService>,
}

impl MemberService {
    pub fn new(member_repo: Arc<MemberRepository>, token_service: Arc<TokenService>) -> Self {
        Self { member_repo, token_service }
    }

    /// 회원 상세 정보를 조회합니다.
    pub async fn get_member_detail(&self, member_id: Uuid) -> Result<MemberRes, AppError> {
        let member = self.member_repo
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberRes::from(member))
    }

    /// 회원을 탈퇴 처리합니다 (소프트 삭제 + 세션 정리).
    pub async fn deactivate_member(&self, member_id: Uuid) -> Result<(), AppError> {
        let deactivated = self.member_repo.deactivate(member_id).await?;

        if !deactivated {
            return Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string()));
        }

        // 탈퇴 즉시 리프레시 세션을 지워 토큰 재발급을 차단
        self.token_service.revoke_refresh_token(&member_id.to_string()).await?;

        log::info!("회원 탈퇴 처리 완료 - member_id: {}", member_id);

        Ok(())
    }
}
