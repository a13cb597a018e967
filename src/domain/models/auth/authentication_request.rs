/// 라우트 접근에 필요한 역할 조건
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(String),
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required_role) => user_roles.contains(required_role),
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| user_roles.contains(role))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single("admin".to_string());
        let admin_roles = vec!["admin".to_string(), "user".to_string()];
        let user_roles = vec!["user".to_string()];

        assert!(required.is_satisfied(&admin_roles));
        assert!(!required.is_satisfied(&user_roles));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["admin".to_string(), "moderator".to_string()]);
        let admin_roles = vec!["admin".to_string(), "user".to_string()];
        let moderator_roles = vec!["moderator".to_string()];
        let user_roles = vec!["user".to_string()];

        assert!(required.is_satisfied(&admin_roles));
        assert!(required.is_satisfied(&moderator_roles));
        assert!(!required.is_satisfied(&user_roles));
    }

    #[test]
    fn test_required_role_empty_roles_never_satisfied() {
        let required = RequiredRole::Single("user".to_string());
        assert!(!required.is_satisfied(&[]));
    }
}
