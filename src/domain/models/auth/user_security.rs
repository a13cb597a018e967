//! 보안 계층 principal
//!
//! 인증된 신원을 보안 계층에 전달하는 평범한 데이터 구조입니다.
//! 소셜 로그인 전용 서비스이므로 password는 의미 없는 1회용 난수이며
//! 어디에서도 검사되지 않습니다.

use serde::Serialize;
use uuid::Uuid;

/// 보안 principal {username, password placeholder, authorities}
///
/// - `username`: 회원 UUID 문자열
/// - `password`: 생성 시마다 새로 만들어지는 난수 (직렬화 제외)
/// - `authorities`: 권한 목록. 소셜 principal은 빈 목록으로 생성됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserSecurity {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub authorities: Vec<String>,
}

impl UserSecurity {
    /// 소셜 로그인 회원의 principal을 생성합니다.
    ///
    /// 비밀번호 자리에는 호출 시점마다 새로 생성되는 UUID 문자열이 들어갑니다.
    pub fn from_social(username: String, authorities: Vec<String>) -> Self {
        Self {
            username,
            password: Uuid::new_v4().to_string(),
            authorities,
        }
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_social_keeps_username() {
        let member_id = Uuid::new_v4().to_string();
        let principal = UserSecurity::from_social(member_id.clone(), vec![]);

        assert_eq!(principal.username, member_id);
        assert!(principal.authorities.is_empty());
    }

    #[test]
    fn test_password_placeholder_differs_per_call() {
        // 같은 회원이라도 호출할 때마다 다른 1회용 비밀번호를 갖는다
        let member_id = Uuid::new_v4().to_string();
        let first = UserSecurity::from_social(member_id.clone(), vec![]);
        let second = UserSecurity::from_social(member_id.clone(), vec![]);

        assert_eq!(first.username, second.username);
        assert_ne!(first.password, second.password);
    }

    #[test]
    fn test_password_is_not_serialized() {
        let principal = UserSecurity::from_social("id".to_string(), vec![]);
        let json = serde_json::to_string(&principal).unwrap();

        assert!(!json.contains(&principal.password));
        assert!(json.contains("username"));
    }

    #[test]
    fn test_has_authority() {
        let principal =
            UserSecurity::from_social("id".to_string(), vec!["coupon:read".to_string()]);
        assert!(principal.has_authority("coupon:read"));
        assert!(!principal.has_authority("coupon:write"));
    }
}
