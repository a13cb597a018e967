//! 도메인 계층
//!
//! - `entities`: MongoDB 컬렉션에 매핑되는 영속 엔티티
//! - `dto`: HTTP 요청/응답 데이터 구조와 페이지네이션 모델
//! - `models`: 인증/토큰/OAuth 내부 모델

pub mod entities;
pub mod dto;
pub mod models;
