//! 페이지네이션 요청/응답 모델
//!
//! Spring Data의 `Pageable`/`Page`에 해당하는 명시적 구조체입니다.
//! 목록 조회 API는 쿼리 파라미터 `page`(0부터), `size`, `sort`
//! (`필드,asc|desc`)를 받아 `Page<T>`로 응답합니다.

use serde::{Deserialize, Serialize};
use crate::config::PageConfig;

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// MongoDB sort 값 (1 / -1)
    pub fn as_bson_order(self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

/// 한 페이지 분량의 조회 조건 (페이지 번호, 크기, 정렬)
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    /// 0부터 시작하는 페이지 번호
    #[serde(default)]
    pub page: u64,
    /// 페이지 크기. 0이면 기본값, 상한 초과 시 상한으로 보정됩니다.
    #[serde(default)]
    pub size: u64,
    /// `필드,asc|desc` 형식의 정렬 조건 (생략 가능)
    #[serde(default)]
    pub sort: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 0, sort: None }
    }
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size, sort: None }
    }

    /// 기본값/상한이 반영된 실제 페이지 크기
    pub fn effective_size(&self) -> u64 {
        let max = PageConfig::max_page_size();
        match self.size {
            0 => PageConfig::default_page_size().min(max),
            s => s.min(max),
        }
    }

    /// 조회 시작 오프셋 (skip). 페이지 번호는 외부 입력이므로 곱셈은 포화 연산입니다.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.effective_size())
    }

    /// 조회 개수 제한 (limit)
    pub fn limit(&self) -> i64 {
        self.effective_size() as i64
    }

    /// 정렬 조건을 (필드, 방향)으로 해석합니다.
    ///
    /// 정렬이 없거나 형식이 어긋나면 기본 필드의 내림차순을 사용합니다.
    pub fn sort_spec(&self, default_field: &str) -> (String, SortDirection) {
        match self.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let mut parts = raw.splitn(2, ',');
                let field = parts.next().unwrap_or(default_field).trim();
                let field = if field.is_empty() { default_field } else { field };
                let direction = match parts.next().map(|d| d.trim().to_lowercase()) {
                    Some(d) if d == "asc" => SortDirection::Asc,
                    _ => SortDirection::Desc,
                };
                (field.to_string(), direction)
            }
            _ => (default_field.to_string(), SortDirection::Desc),
        }
    }

    /// MongoDB sort 도큐먼트를 생성합니다.
    pub fn sort_doc(&self, default_field: &str) -> mongodb::bson::Document {
        let (field, direction) = self.sort_spec(default_field);
        let mut sort = mongodb::bson::Document::new();
        sort.insert(field, direction.as_bson_order());
        sort
    }
}

/// 전체 결과 중 한 페이지
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// 조회된 슬라이스와 전체 개수로 페이지를 구성합니다.
    pub fn new(content: Vec<T>, page_request: &PageRequest, total_elements: u64) -> Self {
        let size = page_request.effective_size();
        let total_pages = if total_elements == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            content,
            page: page_request.page,
            size,
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// 내용물을 변환한 새 페이지를 만듭니다 (엔티티 → 응답 DTO 변환용).
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        // 쿠폰 3개, 크기 2: 0페이지는 [1,2], 1페이지는 [3]에 해당하는 구간
        let first = PageRequest::new(0, 2);
        assert_eq!(first.offset(), 0);
        assert_eq!(first.limit(), 2);

        let second = PageRequest::new(1, 2);
        assert_eq!(second.offset(), 2);
        assert_eq!(second.limit(), 2);
    }

    #[test]
    fn test_offset_saturates_on_huge_page_number() {
        // 쿼리 파라미터로 들어오는 극단값에도 패닉 없이 포화된다
        let request = PageRequest::new(u64::MAX, 2);
        assert_eq!(request.offset(), u64::MAX);

        let request = PageRequest::new(u64::MAX / 2 + 1, 2);
        assert_eq!(request.offset(), u64::MAX);
    }

    #[test]
    fn test_size_zero_falls_back_to_default() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.effective_size(), crate::config::PageConfig::default_page_size());
    }

    #[test]
    fn test_size_is_clamped_to_max() {
        let request = PageRequest::new(0, 1_000_000);
        assert_eq!(request.effective_size(), crate::config::PageConfig::max_page_size());
    }

    #[test]
    fn test_sort_spec_parsing() {
        let mut request = PageRequest::new(0, 10);

        request.sort = Some("name,asc".to_string());
        assert_eq!(request.sort_spec("created_at"), ("name".to_string(), SortDirection::Asc));

        request.sort = Some("issued_at,desc".to_string());
        assert_eq!(request.sort_spec("created_at"), ("issued_at".to_string(), SortDirection::Desc));

        // 방향이 없으면 내림차순
        request.sort = Some("name".to_string());
        assert_eq!(request.sort_spec("created_at"), ("name".to_string(), SortDirection::Desc));

        // 정렬이 없으면 기본 필드 내림차순
        request.sort = None;
        assert_eq!(request.sort_spec("created_at"), ("created_at".to_string(), SortDirection::Desc));

        // 공백/결손 필드는 기본 필드로
        request.sort = Some(" ,asc".to_string());
        assert_eq!(request.sort_spec("created_at").0, "created_at");
    }

    #[test]
    fn test_page_math_for_three_elements_size_two() {
        let request = PageRequest::new(0, 2);
        let page = Page::new(vec!["c1", "c2"], &request, 3);

        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next());

        let last_request = PageRequest::new(1, 2);
        let last = Page::new(vec!["c3"], &last_request, 3);
        assert_eq!(last.content.len(), 1);
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_result_is_a_page_not_an_error() {
        let request = PageRequest::new(0, 20);
        let page: Page<i32> = Page::new(vec![], &request, 0);

        assert!(page.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_map_preserves_totals() {
        let request = PageRequest::new(0, 2);
        let page = Page::new(vec![1, 2], &request, 5);
        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total_elements, 5);
        assert_eq!(mapped.total_pages, 3);
    }
}
