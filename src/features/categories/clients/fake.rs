//! In-memory [`CategoryApi`] for editor tests.
//!
//! Stores categories flat, rebuilds the nested tree on every `list` the way
//! the backend does, and records every mutating call in issue order.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::categories::clients::CategoryApi;
use crate::features::categories::dtos::{
    CategoriesQuery, CategoryActionDto, CreateCategoryDto, LogListDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryStatus};
use crate::shared::types::Pagination;

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    calls: Vec<String>,
    list_calls: usize,
    list_queries: Vec<CategoriesQuery>,
    fail_on: HashSet<String>,
    contents_count: i64,
}

#[derive(Clone, Default)]
pub struct FakeCategoryApi {
    state: Arc<Mutex<State>>,
}

impl FakeCategoryApi {
    /// Seed with `(id, parent_id, order)` triples
    pub fn with_categories(items: &[(i64, Option<i64>, i32)]) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().categories = items
            .iter()
            .map(|(id, parent_id, order)| Category {
                id: *id,
                name: format!("Category {}", id),
                description: None,
                parent_id: *parent_id,
                icon: None,
                color: None,
                order: *order,
                status: CategoryStatus::Active,
                children: Vec::new(),
            })
            .collect();
        fake
    }

    /// Make every call whose record starts with `prefix` fail
    pub fn fail_on(&self, prefix: &str) {
        self.state.lock().unwrap().fail_on.insert(prefix.to_string());
    }

    pub fn set_contents_count(&self, count: i64) {
        self.state.lock().unwrap().contents_count = count;
    }

    pub fn set_status(&self, id: i64, status: CategoryStatus) {
        let mut state = self.state.lock().unwrap();
        if let Some(c) = state.categories.iter_mut().find(|c| c.id == id) {
            c.status = status;
        }
    }

    /// Mutating calls since the last `take_calls`
    pub fn take_calls(&self) -> Vec<String> {
        std::mem::take(&mut self.state.lock().unwrap().calls)
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    /// Queries seen by `list` since the last call
    pub fn take_list_queries(&self) -> Vec<CategoriesQuery> {
        std::mem::take(&mut self.state.lock().unwrap().list_queries)
    }

    fn record(&self, call: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let failing = state.fail_on.iter().any(|prefix| call.starts_with(prefix));
        state.calls.push(call.clone());
        if failing {
            return Err(AppError::ExternalServiceError {
                status: 500,
                message: format!("{} rejected", call),
            });
        }
        Ok(())
    }

    fn record_list(&self, query: &CategoriesQuery) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        state.list_queries.push(query.clone());
        if state.fail_on.contains("list") {
            return Err(AppError::ExternalServiceError {
                status: 503,
                message: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn build_tree(all: &[Category], parent_id: Option<i64>) -> Vec<Category> {
        let mut level: Vec<Category> = all
            .iter()
            .filter(|c| c.parent_id == parent_id)
            .map(|c| Category {
                children: Self::build_tree(all, Some(c.id)),
                ..c.clone()
            })
            .collect();
        level.sort_by_key(|c| c.order);
        level
    }
}

#[async_trait]
impl CategoryApi for FakeCategoryApi {
    async fn list(&self, query: &CategoriesQuery) -> Result<Vec<Category>> {
        self.record_list(query)?;
        let state = self.state.lock().unwrap();
        Ok(Self::build_tree(&state.categories, None))
    }

    async fn get(&self, id: i64) -> Result<Category> {
        let state = self.state.lock().unwrap();
        state
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn create(&self, dto: &CreateCategoryDto) -> Result<Category> {
        self.record(format!("create {}", dto.name))?;
        let mut state = self.state.lock().unwrap();
        let id = state.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category {
            id,
            name: dto.name.clone(),
            description: dto.description.clone(),
            parent_id: dto.parent_id,
            icon: dto.icon.clone(),
            color: dto.color.clone(),
            order: dto.order.unwrap_or(0),
            status: dto.status.unwrap_or_default(),
            children: Vec::new(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: i64, dto: &UpdateCategoryDto) -> Result<Category> {
        let body = serde_json::to_string(dto).unwrap();
        self.record(format!("update {} {}", id, body))?;

        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
        if let Some(parent_id) = dto.parent_id {
            category.parent_id = parent_id;
        }
        if let Some(order) = dto.order {
            category.order = order;
        }
        if let Some(status) = dto.status {
            category.status = status;
        }
        if let Some(name) = &dto.name {
            category.name = name.clone();
        }
        Ok(category.clone())
    }

    async fn inactivate(&self, id: i64, dto: &CategoryActionDto) -> Result<()> {
        let body = serde_json::to_string(dto).unwrap();
        self.record(format!("inactivate {} {}", id, body))?;
        self.set_status(id, CategoryStatus::Inactive);
        Ok(())
    }

    async fn delete(&self, id: i64, dto: &CategoryActionDto) -> Result<()> {
        let body = serde_json::to_string(dto).unwrap();
        self.record(format!("delete {} {}", id, body))?;
        self.state
            .lock()
            .unwrap()
            .categories
            .retain(|c| c.id != id);
        Ok(())
    }

    async fn contents_count(&self, id: i64) -> Result<i64> {
        if self.state.lock().unwrap().fail_on.contains("contents-count") {
            return Err(AppError::Internal(format!("count for {} unavailable", id)));
        }
        Ok(self.state.lock().unwrap().contents_count)
    }

    async fn logs(&self, _id: i64, _pagination: Pagination) -> Result<LogListDto> {
        Ok(LogListDto::default())
    }

    async fn all_logs(&self, _pagination: Pagination) -> Result<LogListDto> {
        Ok(LogListDto::default())
    }
}

