use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }
}

/// Category node as returned by the backend (nested through `children`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Sibling position; the backend may omit it, which sorts as 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default)]
    pub status: CategoryStatus,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Category>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Category {
    pub fn is_active(&self) -> bool {
        self.status == CategoryStatus::Active
    }
}

/// A category annotated with its depth, without children.
///
/// Rebuilt from the nested tree after every fetch; never sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: i32,
    pub status: CategoryStatus,
    /// Depth from the root (roots are 0)
    pub level: usize,
    /// Outline number such as `1.2.3`
    pub position: String,
}

impl FlatCategory {
    pub fn from_node(category: &Category, level: usize, position: String) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            parent_id: category.parent_id,
            icon: category.icon.clone(),
            color: category.color.clone(),
            order: category.order,
            status: category.status,
            level,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_category_with_defaults() {
        let json = r#"{
            "id": 1,
            "name": "Institucional",
            "parentId": null,
            "children": [
                {"id": 2, "name": "RH", "parentId": 1, "order": null, "status": "inactive", "children": null}
            ]
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.order, 0);
        assert_eq!(category.status, CategoryStatus::Active);
        assert_eq!(category.children.len(), 1);
        assert_eq!(category.children[0].parent_id, Some(1));
        assert_eq!(category.children[0].order, 0);
        assert!(category.children[0].children.is_empty());
        assert!(!category.children[0].is_active());
    }
}
