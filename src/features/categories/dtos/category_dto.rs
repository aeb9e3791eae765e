use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::http::QueryPairs;
use crate::features::categories::models::CategoryStatus;

/// `status` filter accepted by the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }
}

/// Query params for listing categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoriesQuery {
    pub status: Option<StatusFilter>,
    pub group_ids: Vec<i64>,
    pub unit_ids: Vec<i64>,
}

impl CategoriesQuery {
    /// Encode as query pairs; id lists repeat the `[]` key once per id
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        for id in &self.group_ids {
            pairs.push(("groupIds[]".to_string(), id.to_string()));
        }
        for id in &self.unit_ids {
            pairs.push(("unitIds[]".to_string(), id.to_string()));
        }
        pairs
    }
}

/// Request body for creating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CategoryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_ids: Option<Vec<i64>>,
}

/// Partial update; absent fields are left untouched by the backend.
///
/// `parent_id` is doubly optional: `Some(None)` serializes as
/// `"parentId": null` and moves the category to the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub parent_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CategoryStatus>,
}

impl UpdateCategoryDto {
    pub fn parent(parent_id: Option<i64>) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }

    pub fn order(order: i32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    pub fn status(status: CategoryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Option<i64>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(Some)
    }
}

/// What happens to the contents of a category being inactivated or deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAction {
    /// Hide the contents together with the category
    Inactivate,
    /// Reassign the contents to another category
    Move,
    /// Detach the contents; they show up as uncategorized
    RemoveCategory,
}

/// Body of the inactivate and delete calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryActionDto {
    pub content_action: ContentAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_category_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContentsCountDto {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_repeats_array_keys() {
        let query = CategoriesQuery {
            status: Some(StatusFilter::All),
            group_ids: vec![1, 2],
            unit_ids: vec![7],
        };
        let pairs = query.to_query();
        assert_eq!(
            pairs,
            vec![
                ("status".to_string(), "all".to_string()),
                ("groupIds[]".to_string(), "1".to_string()),
                ("groupIds[]".to_string(), "2".to_string()),
                ("unitIds[]".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_parent_to_root_sends_null() {
        let body = serde_json::to_value(UpdateCategoryDto::parent(None)).unwrap();
        assert_eq!(body, json!({ "parentId": null }));

        let body = serde_json::to_value(UpdateCategoryDto::order(3)).unwrap();
        assert_eq!(body, json!({ "order": 3 }));
    }

    #[test]
    fn test_action_body_omits_target_unless_set() {
        let body = serde_json::to_value(CategoryActionDto {
            content_action: ContentAction::RemoveCategory,
            new_category_id: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "contentAction": "remove_category" }));

        let body = serde_json::to_value(CategoryActionDto {
            content_action: ContentAction::Move,
            new_category_id: Some(9),
        })
        .unwrap();
        assert_eq!(body, json!({ "contentAction": "move", "newCategoryId": 9 }));
    }

    #[test]
    fn test_create_validation() {
        let dto = CreateCategoryDto {
            name: String::new(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CreateCategoryDto {
            name: "Comunicados".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
