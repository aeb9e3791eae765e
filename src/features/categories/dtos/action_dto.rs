use crate::features::categories::dtos::{CategoryActionDto, ContentAction};
use crate::features::categories::models::FlatCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryActionKind {
    Inactivate,
    Delete,
}

impl CategoryActionKind {
    /// Disposition preselected in the confirmation dialog
    pub fn default_content_action(&self) -> ContentAction {
        match self {
            CategoryActionKind::Inactivate => ContentAction::Inactivate,
            CategoryActionKind::Delete => ContentAction::RemoveCategory,
        }
    }
}

/// Everything the confirmation dialog needs before an inactivate/delete
#[derive(Debug, Clone)]
pub struct ActionPrompt {
    pub category: FlatCategory,
    pub kind: CategoryActionKind,
    pub contents_count: i64,
    pub default_content_action: ContentAction,
    /// Valid destinations when contents are moved
    pub move_targets: Vec<FlatCategory>,
}

impl ActionPrompt {
    /// With no contents the disposition choice has no effect
    pub fn requires_choice(&self) -> bool {
        self.contents_count > 0
    }

    /// Request with the preselected disposition
    pub fn default_request(&self) -> ActionRequest {
        ActionRequest {
            category_id: self.category.id,
            kind: self.kind,
            content_action: self.default_content_action,
            new_category_id: None,
        }
    }
}

/// A confirmed inactivate/delete, submitted as a single backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRequest {
    pub category_id: i64,
    pub kind: CategoryActionKind,
    pub content_action: ContentAction,
    pub new_category_id: Option<i64>,
}

impl ActionRequest {
    pub fn to_dto(&self) -> CategoryActionDto {
        CategoryActionDto {
            content_action: self.content_action,
            new_category_id: match self.content_action {
                ContentAction::Move => self.new_category_id,
                _ => None,
            },
        }
    }
}
