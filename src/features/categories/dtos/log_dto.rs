use serde::{Deserialize, Serialize};

use crate::features::categories::models::CategoryLog;
use crate::shared::types::Pagination;

/// Raw reply of the log endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogListDto {
    #[serde(default)]
    pub logs: Vec<CategoryLog>,
    #[serde(default)]
    pub total: i64,
}

/// One page of audit entries with its paging metadata
#[derive(Debug, Clone)]
pub struct LogPage {
    pub logs: Vec<CategoryLog>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl LogPage {
    pub fn from_list(list: LogListDto, pagination: Pagination) -> Self {
        Self {
            total_pages: pagination.total_pages(list.total),
            page: pagination.page.max(1),
            logs: list.logs,
            total: list.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_page_metadata() {
        let list: LogListDto = serde_json::from_str(r#"{"logs": [], "total": 23}"#).unwrap();
        let page = LogPage::from_list(list, Pagination::new(2, 10));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        assert!(page.logs.is_empty());
    }
}
