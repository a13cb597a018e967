//! 데이터 계층 관련 설정
//!
//! 페이지네이션 기본값을 환경 변수에서 읽어 제공합니다.

use std::env;

/// 페이지네이션 설정
///
/// 목록 조회 API의 페이지 크기 기본값과 상한을 관리합니다.
/// 클라이언트가 size를 생략하거나 상한을 초과하면 이 값으로 보정됩니다.
pub struct PageConfig;

impl PageConfig {
    /// 기본 페이지 크기 (기본값: 20)
    pub fn default_page_size() -> u64 {
        env::var("PAGE_DEFAULT_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20)
    }

    /// 최대 페이지 크기 (기본값: 100)
    pub fn max_page_size() -> u64 {
        env::var("PAGE_MAX_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_config_defaults() {
        assert!(PageConfig::default_page_size() >= 1);
        assert!(PageConfig::max_page_size() >= PageConfig::default_page_size());
    }
}
