//! mallook 쇼핑몰 백엔드
//!
//! Rust 기반의 쇼핑몰 커머스 백엔드 서비스입니다.
//! Google OAuth 2.0 소셜 로그인과 JWT 토큰 기반 인증 위에서
//! 회원, 쿠폰, 쇼핑몰 카탈로그, 주문 API를 제공합니다.
//!
//! # Features
//!
//! - **소셜 로그인 전용 회원**: Google OAuth 가입, UUID 기반 식별
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **쿠폰**: 회원별 쿠폰 발급과 페이지네이션 목록 조회
//! - **쇼핑몰 카탈로그**: 수집 대상 쇼핑몰 등록/조회
//! - **주문**: 주문 시점 상품 스냅샷을 내장한 주문 내역
//! - **MongoDB**: 도메인 데이터 영구 저장
//! - **Redis**: 회원 조회 캐싱 및 리프레시 토큰 세션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 의존성은 프레임워크 DI 대신 [`core::AppState`]에서 명시적 생성자
//! 주입으로 조립됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mallook_backend::core::AppState;
//!
//! let state = AppState::new(database, redis);
//! state.initialize().await?;
//!
//! let page = state.coupon_service
//!     .find_my_coupon_list(&page_request, member_id)
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
