//! 쇼핑몰 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::ShoppingMall;
use crate::domain::entities::shopping_mall::MALL_URL_MAX_LEN;

/// 쇼핑몰 등록 요청 (관리자 전용)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShoppingMallRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "쇼핑몰 이름은 1-100자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 2083,
        message = "URL은 1-2083자 사이여야 합니다"
    ))]
    #[validate(url(message = "유효한 URL 형식이어야 합니다"))]
    pub url: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로는 입력할 수 없습니다".into()));
    }
    Ok(())
}

/// 쇼핑몰 응답
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingMallRes {
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingMall> for ShoppingMallRes {
    fn from(mall: ShoppingMall) -> Self {
        Self {
            id: mall.id.as_ref().map(|id| id.to_hex()),
            name: mall.name,
            url: mall.url,
            created_at: mall.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, url: String) -> CreateShoppingMallRequest {
        CreateShoppingMallRequest {
            name: name.to_string(),
            url,
        }
    }

    #[test]
    fn test_valid_request() {
        let req = request("무신사", "https://www.musinsa.com".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(request("", "https://a.com".to_string()).validate().is_err());
        assert!(request("   ", "https://a.com".to_string()).validate().is_err());
    }

    #[test]
    fn test_url_length_boundary() {
        // 2083자까지는 허용, 2084자는 거부
        let base = "https://example.com/";
        let fill = MALL_URL_MAX_LEN as usize - base.len();

        let at_limit = format!("{}{}", base, "a".repeat(fill));
        assert_eq!(at_limit.len(), MALL_URL_MAX_LEN as usize);
        assert!(request("몰", at_limit.clone()).validate().is_ok());

        let over_limit = format!("{}a", at_limit);
        assert!(request("몰", over_limit).validate().is_err());
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(request("몰", "not-a-url".to_string()).validate().is_err());
    }
}
