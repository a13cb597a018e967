//! 회원 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use crate::config::AuthProvider;
use crate::domain::entities::Member;

/// 회원 상세 응답
#[derive(Debug, Clone, Serialize)]
pub struct MemberRes {
    pub id: Uuid,
    pub email: String,
    pub nickname: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Member> for MemberRes {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            email: member.email,
            nickname: member.nickname,
            auth_provider: member.auth_provider,
            roles: member.roles,
            is_active: member.is_active,
            profile_image_url: member.profile_image_url,
            last_login_at: member.last_login_at.map(|d| d.to_chrono()),
            created_at: member.created_at.to_chrono(),
        }
    }
}
