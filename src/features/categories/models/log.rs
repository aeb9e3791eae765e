use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::constants::{
    ACTION_ACTIVATE_CATEGORY, ACTION_CREATE_CATEGORY, ACTION_DELETE_CATEGORY,
    ACTION_INACTIVATE_CATEGORY, ACTION_UPDATE_CATEGORY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Audit entry for a category mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLog {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `{field: {before, after}}`, either inline or as a JSON string
    #[serde(default)]
    pub changes: Option<Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<LogUser>,
}

/// One changed field of an audit entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub field: String,
    pub label: String,
    pub before: Value,
    pub after: Value,
}

impl CategoryLog {
    pub fn action_label(&self) -> &str {
        match self.action.as_str() {
            ACTION_CREATE_CATEGORY => "Category created",
            ACTION_UPDATE_CATEGORY => "Category updated",
            ACTION_ACTIVATE_CATEGORY => "Category activated",
            ACTION_INACTIVATE_CATEGORY => "Category inactivated",
            ACTION_DELETE_CATEGORY => "Category deleted",
            other => other,
        }
    }

    /// Decode `changes` into per-field entries, sorted by field name.
    ///
    /// Malformed payloads yield an empty list rather than an error.
    pub fn field_changes(&self) -> Vec<FieldChange> {
        let parsed;
        let object = match &self.changes {
            Some(Value::Object(map)) => map,
            Some(Value::String(raw)) => {
                parsed = match serde_json::from_str::<Value>(raw) {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::debug!("Unparseable changes on log {}: {}", self.id, e);
                        return Vec::new();
                    }
                };
                match &parsed {
                    Value::Object(map) => map,
                    _ => return Vec::new(),
                }
            }
            _ => return Vec::new(),
        };

        let mut changes: Vec<FieldChange> = object
            .iter()
            .map(|(field, diff)| FieldChange {
                field: field.clone(),
                label: field_label(field).to_string(),
                before: diff.get("before").cloned().unwrap_or(Value::Null),
                after: diff.get("after").cloned().unwrap_or(Value::Null),
            })
            .collect();
        changes.sort_by(|a, b| a.field.cmp(&b.field));
        changes
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "name" => "Name",
        "description" => "Description",
        "parentId" => "Parent category",
        "order" => "Order",
        "status" => "Status",
        "icon" => "Icon",
        "color" => "Color",
        other => other,
    }
}
