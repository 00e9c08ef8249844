//! Generic pagination envelope

use serde::{Deserialize, Serialize};

/// PaginatedResponse wraps any paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total number of matches across every page
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaEntity;
    use crate::testing::assert_required_keys;
    use serde_json::json;

    #[test]
    fn test_paginated_response_is_generic() {
        let page: PaginatedResponse<MediaEntity> = serde_json::from_str(
            r#"{"items": [], "total": 100, "limit": 20, "offset": 40}"#,
        )
        .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 100);
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 40);

        let encoded = serde_json::to_string(&page).unwrap();
        let decoded: PaginatedResponse<MediaEntity> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, page);
    }

    #[test]
    fn test_paginated_response_requires_items() {
        let result = serde_json::from_str::<PaginatedResponse<String>>(
            r#"{"total": 0, "limit": 20, "offset": 0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_paginated_response_over_plain_values() {
        let page: PaginatedResponse<String> = serde_json::from_str(
            r#"{"items": ["a", "b"], "total": 2, "limit": 10, "offset": 0}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_paginated_response_requires_every_key() {
        let valid = json!({"items": ["a"], "total": 1, "limit": 10, "offset": 0});

        assert_required_keys::<PaginatedResponse<String>>(
            &valid,
            &["items", "total", "limit", "offset"],
        );
    }
}
