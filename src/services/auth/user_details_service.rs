//! 회원 → 보안 principal 어댑터
//!
//! 보안 계층이 요구하는 "username으로 사용자 조회" 계약을 회원 저장소
//! 위에 얹는 어댑터입니다. username 자리에는 회원 UUID 문자열이
//! 들어오며, 조회 결과는 [`UserSecurity`] principal로 변환됩니다.

use std::sync::Arc;
use uuid::Uuid;
use crate::{
    domain::entities::member::Member,
    domain::models::auth::UserSecurity,
    repositories::members::member_repo::MemberRepository,
};
use crate::errors::errors::AppError;

/// username(회원 UUID 문자열)을 보안 principal로 변환하는 서비스
pub struct UserDetailsService {
    member_repo: Arc<MemberRepository>,
}

impl UserDetailsService {
    pub fn new(member_repo: Arc<MemberRepository>) -> Self {
        Self { member_repo }
    }

    /// username 문자열을 회원 UUID로 해석합니다.
    ///
    /// UUID 형식이 아닌 입력은 검증 에러입니다. 토큰의 sub 클레임이
    /// 위조되었거나 호출자가 계약을 어긴 경우입니다.
    pub fn parse_username(username: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(username)
            .map_err(|_| AppError::ValidationError("유효하지 않은 회원 식별자 형식입니다".to_string()))
    }

    /// username으로 회원을 조회해 보안 principal을 생성합니다.
    ///
    /// - 회원이 없거나 비활성 상태면 NotFound
    /// - 소셜 principal은 빈 authorities로 생성됩니다
    pub async fn load_user_by_username(&self, username: &str) -> Result<UserSecurity, AppError> {
        let member_id = Self::parse_username(username)?;
        let member = self.member_repo.find_by_id(member_id).await?;
        Self::to_principal(member)
    }

    /// 조회된 회원을 보안 principal로 변환합니다.
    ///
    /// 비활성 회원은 존재하지 않는 회원과 동일하게 취급합니다.
    /// 탈퇴한 회원의 만료 전 토큰이 인증을 통과하면 안 되기 때문입니다.
    fn to_principal(member: Option<Member>) -> Result<UserSecurity, AppError> {
        let member = member
            .filter(|m| m.is_active)
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(UserSecurity::from_social(member.id_string(), vec![]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_username_accepts_uuid() {
        let id = Uuid::new_v4();
        let parsed = UserDetailsService::parse_username(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_username_rejects_non_uuid() {
        // 이메일처럼 생긴 입력도 UUID가 아니면 거부된다
        let result = UserDetailsService::parse_username("alice@example.com");
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = UserDetailsService::parse_username("");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_parse_username_rejects_truncated_uuid() {
        let id = Uuid::new_v4().to_string();
        let truncated = &id[..id.len() - 4];
        assert!(UserDetailsService::parse_username(truncated).is_err());
    }

    fn sample_member() -> Member {
        Member::new_social(
            "alice@example.com".to_string(),
            "alice".to_string(),
            crate::config::AuthProvider::Google,
            "google-sub-1".to_string(),
            None,
        )
    }

    #[test]
    fn test_to_principal_for_active_member() {
        let member = sample_member();
        let expected_username = member.id_string();

        let principal = UserDetailsService::to_principal(Some(member)).unwrap();

        assert_eq!(principal.username, expected_username);
        assert!(principal.authorities.is_empty());
    }

    #[test]
    fn test_to_principal_rejects_missing_member() {
        let result = UserDetailsService::to_principal(None);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_to_principal_rejects_inactive_member() {
        // 탈퇴한 회원은 존재하지 않는 회원과 동일하게 처리된다
        let mut member = sample_member();
        member.is_active = false;

        let result = UserDetailsService::to_principal(Some(member));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
