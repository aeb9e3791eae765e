use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::clients::CategoryApi;
use crate::features::categories::drag::DropGesture;
use crate::features::categories::dtos::{
    ActionPrompt, ActionRequest, CategoryActionKind, ContentAction, CreateCategoryDto, LogPage,
    UpdateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryStatus, FlatCategory};
use crate::features::categories::services::drop_resolver::{DropKind, DropPlan, DropResolver};
use crate::features::categories::tree;
use crate::features::context::FilterContext;
use crate::shared::types::{Notification, Notifier, Pagination};

/// Which audit log to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogScope {
    All,
    Category(i64),
}

/// Result of toggling a category's status
#[derive(Debug, Clone)]
pub enum StatusToggle {
    /// An inactive category was reactivated directly
    Reactivated,
    /// Inactivation needs a content disposition first
    NeedsConfirmation(ActionPrompt),
}

/// Admin-side category tree editor.
///
/// Holds the last tree fetched from the backend and never patches it
/// locally: every confirmed mutation is followed by a full refetch, and a
/// failed one leaves the previous tree in place.
pub struct CategoryService {
    api: Arc<dyn CategoryApi>,
    notifier: Arc<dyn Notifier>,
    resolver: DropResolver,
    context: FilterContext,
    tree: Vec<Category>,
    flat: Vec<FlatCategory>,
    loading: bool,
}

impl CategoryService {
    pub fn new(
        api: Arc<dyn CategoryApi>,
        notifier: Arc<dyn Notifier>,
        resolver: DropResolver,
        context: FilterContext,
    ) -> Self {
        Self {
            api,
            notifier,
            resolver,
            context,
            tree: Vec::new(),
            flat: Vec::new(),
            loading: false,
        }
    }

    pub fn tree(&self) -> &[Category] {
        &self.tree
    }

    pub fn flat(&self) -> &[FlatCategory] {
        &self.flat
    }

    /// Active-only view used by the public content browser
    pub fn public_tree(&self) -> Vec<Category> {
        tree::public_tree(&self.tree)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn context(&self) -> &FilterContext {
        &self.context
    }

    /// Replace the group/unit scope and reload the tree for it
    pub async fn set_context(&mut self, context: FilterContext) -> Result<()> {
        if self.context == context {
            return Ok(());
        }
        self.context = context;
        self.refresh().await
    }

    /// Fetch the whole tree for the current scope and replace the local copy.
    ///
    /// On failure the previous tree stays in place.
    pub async fn refresh(&mut self) -> Result<()> {
        if !self.context.is_ready() {
            tracing::debug!("Skipping category fetch: no group or unit scope yet");
            return Ok(());
        }

        self.loading = true;
        let result = self.api.list(&self.context.admin_query()).await;
        self.loading = false;

        match result {
            Ok(tree) => {
                self.flat = tree::flatten(&tree);
                self.tree = tree;
                tracing::debug!("Loaded {} categories", self.flat.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load categories: {}", e);
                self.fail(&e, "Failed to load categories");
                Err(e)
            }
        }
    }

    /// Resolve a finished drag and push the resulting updates, one at a time.
    ///
    /// A failure partway through stops the remaining updates; whatever the
    /// backend already applied shows up on the next refetch.
    pub async fn apply_drop(&mut self, gesture: &DropGesture) -> Result<DropPlan> {
        let plan = self.resolver.resolve(gesture, &self.flat);

        match plan.kind {
            DropKind::NoOp => return Ok(plan),
            DropKind::Circular { parent_id } => {
                self.notifier.notify(Notification::warning(
                    AppError::CircularReference {
                        category_id: plan.dragged_id,
                        parent_id,
                    }
                    .user_message(""),
                ));
                return Ok(plan);
            }
            _ => {}
        }

        for update in &plan.updates {
            if let Err(e) = self.api.update(update.id, &update.to_dto()).await {
                tracing::error!(
                    "Drop of category {} failed at {:?}: {}",
                    plan.dragged_id,
                    update,
                    e
                );
                self.fail(&e, drop_failure_message(plan.kind));
                return Err(e);
            }
        }

        tracing::info!(
            "Applied {:?} for category {} ({} updates)",
            plan.kind,
            plan.dragged_id,
            plan.updates.len()
        );
        self.refresh_after_mutation().await;
        Ok(plan)
    }

    pub async fn create(&mut self, dto: CreateCategoryDto) -> Result<Category> {
        validate(&dto)?;

        match self.api.create(&dto).await {
            Ok(category) => {
                self.notifier
                    .notify(Notification::success("Category created successfully"));
                self.refresh_after_mutation().await;
                Ok(category)
            }
            Err(e) => {
                self.fail(&e, "Failed to create category");
                Err(e)
            }
        }
    }

    pub async fn update(&mut self, id: i64, dto: UpdateCategoryDto) -> Result<Category> {
        validate(&dto)?;

        if let Some(parent_id) = dto.parent_id {
            if tree::is_circular(&self.flat, parent_id, id) {
                let e = AppError::CircularReference {
                    category_id: id,
                    parent_id,
                };
                self.fail(&e, "Failed to update category");
                return Err(e);
            }
        }

        match self.api.update(id, &dto).await {
            Ok(category) => {
                self.notifier
                    .notify(Notification::success("Category updated successfully"));
                self.refresh_after_mutation().await;
                Ok(category)
            }
            Err(e) => {
                self.fail(&e, "Failed to update category");
                Err(e)
            }
        }
    }

    /// Reactivate an inactive category, or prepare the inactivation dialog
    pub async fn toggle_status(&mut self, id: i64) -> Result<StatusToggle> {
        let category = self.require(id)?;

        if category.status == CategoryStatus::Active {
            let prompt = self.prepare_action(id, CategoryActionKind::Inactivate).await?;
            return Ok(StatusToggle::NeedsConfirmation(prompt));
        }

        match self
            .api
            .update(id, &UpdateCategoryDto::status(CategoryStatus::Active))
            .await
        {
            Ok(_) => {
                self.notifier
                    .notify(Notification::success("Category reactivated successfully"));
                self.refresh_after_mutation().await;
                Ok(StatusToggle::Reactivated)
            }
            Err(e) => {
                self.fail(&e, "Failed to reactivate category");
                Err(e)
            }
        }
    }

    /// Gather what the inactivate/delete confirmation needs.
    ///
    /// A failed contents count is logged and treated as zero.
    pub async fn prepare_action(
        &self,
        id: i64,
        kind: CategoryActionKind,
    ) -> Result<ActionPrompt> {
        let category = self.require(id)?.clone();

        let contents_count = match self.api.contents_count(id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("Error loading contents count for {}: {}", id, e);
                0
            }
        };

        Ok(ActionPrompt {
            move_targets: tree::move_targets(&self.flat, id)
                .into_iter()
                .cloned()
                .collect(),
            category,
            kind,
            contents_count,
            default_content_action: kind.default_content_action(),
        })
    }

    /// Submit a confirmed inactivate/delete as one call, then refetch
    pub async fn confirm_action(&mut self, request: ActionRequest) -> Result<()> {
        self.require(request.category_id)?;
        self.validate_move_target(&request)?;

        let dto = request.to_dto();
        let (result, done, failed) = match request.kind {
            CategoryActionKind::Inactivate => (
                self.api.inactivate(request.category_id, &dto).await,
                "Category inactivated successfully",
                "Failed to inactivate category",
            ),
            CategoryActionKind::Delete => (
                self.api.delete(request.category_id, &dto).await,
                "Category deleted successfully",
                "Failed to delete category",
            ),
        };

        match result {
            Ok(()) => {
                self.notifier.notify(Notification::success(done));
                self.refresh_after_mutation().await;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, failed);
                Err(e)
            }
        }
    }

    pub async fn logs(&self, scope: LogScope, pagination: Pagination) -> Result<LogPage> {
        let result = match scope {
            LogScope::All => self.api.all_logs(pagination).await,
            LogScope::Category(id) => self.api.logs(id, pagination).await,
        };

        match result {
            Ok(list) => Ok(LogPage::from_list(list, pagination)),
            Err(e) => {
                tracing::error!("Error loading logs: {}", e);
                Err(e)
            }
        }
    }

    fn require(&self, id: i64) -> Result<&FlatCategory> {
        tree::find_flat(&self.flat, id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    fn validate_move_target(&self, request: &ActionRequest) -> Result<()> {
        if request.content_action != ContentAction::Move {
            return Ok(());
        }

        let target = request.new_category_id.ok_or_else(|| {
            AppError::Validation("Select a category to receive the contents".to_string())
        })?;

        let allowed = tree::move_targets(&self.flat, request.category_id)
            .iter()
            .any(|c| c.id == target);
        if !allowed {
            return Err(AppError::Validation(format!(
                "Category {} cannot receive the contents of category {}",
                target, request.category_id
            )));
        }
        Ok(())
    }

    async fn refresh_after_mutation(&mut self) {
        // refresh() already notifies on failure
        let _ = self.refresh().await;
    }

    fn fail(&self, error: &AppError, fallback: &str) {
        // 401s are handled by the session's forced sign-out
        if error.is_unauthorized() {
            return;
        }
        self.notifier
            .notify(Notification::error(error.user_message(fallback)));
    }
}

fn validate<T: Validate>(dto: &T) -> Result<()> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn drop_failure_message(kind: DropKind) -> &'static str {
    match kind {
        DropKind::Nest { .. } => "Failed to nest category",
        DropKind::Unnest { .. } => "Failed to move category up a level",
        DropKind::Reorder => "Failed to reorder categories",
        _ => "Failed to move category",
    }
}
