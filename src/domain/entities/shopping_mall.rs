//! 쇼핑몰 엔티티
//!
//! 카탈로그 수집 대상이 되는 쇼핑몰입니다. 이름과 URL은 비어 있을 수 없고,
//! URL은 브라우저 호환 한계인 2083자로 제한됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 쇼핑몰 URL 최대 길이
pub const MALL_URL_MAX_LEN: u64 = 2083;

/// 쇼핑몰 엔티티 (`shopping_malls` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingMall {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub url: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ShoppingMall {
    pub fn new(name: String, url: String) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
