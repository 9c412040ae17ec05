// Common model types

use serde::{Deserialize, Serialize};

/// Paginated response as produced by the MES API
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page<T> {
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    pub content: Vec<T>,
    /// Current page number (0-based)
    pub number: u32,
    pub number_of_elements: u32,
    pub last: bool,
    pub first: bool,
    pub empty: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_pages: 0,
            total_elements: 0,
            size: 0,
            content: Vec::new(),
            number: 0,
            number_of_elements: 0,
            last: true,
            first: true,
            empty: true,
        }
    }
}

/// Optional pagination parameters; unset values fall back to the server
/// defaults (page 0, size 20)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialization() {
        let json = r#"{
            "totalPages": 3,
            "totalElements": 45,
            "size": 20,
            "content": ["a", "b"],
            "number": 0,
            "numberOfElements": 2,
            "last": false,
            "first": true,
            "empty": false
        }"#;

        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 45);
        assert_eq!(page.content.len(), 2);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn test_page_missing_fields_use_defaults() {
        let page: Page<String> = serde_json::from_str(r#"{"totalElements": 4}"#).unwrap();
        assert_eq!(page.total_elements, 4);
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_page_request_serializes_only_set_values() {
        let query = serde_json::to_value(PageRequest {
            page: Some(2),
            size: None,
        })
        .unwrap();
        assert_eq!(query, serde_json::json!({"page": 2}));

        assert!(PageRequest::default().is_empty());
        assert!(!PageRequest::new(0, 50).is_empty());
    }
}
