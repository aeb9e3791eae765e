use async_trait::async_trait;
use reqwest::Method;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::categories::dtos::{
    CategoriesQuery, CategoryActionDto, ContentsCountDto, CreateCategoryDto, LogListDto,
    UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::shared::constants::CATEGORIES_PATH;
use crate::shared::types::Pagination;

/// Category endpoints of the intranet backend
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// Nested tree filtered by status and group/unit scope
    async fn list(&self, query: &CategoriesQuery) -> Result<Vec<Category>>;

    async fn get(&self, id: i64) -> Result<Category>;

    async fn create(&self, dto: &CreateCategoryDto) -> Result<Category>;

    async fn update(&self, id: i64, dto: &UpdateCategoryDto) -> Result<Category>;

    async fn inactivate(&self, id: i64, dto: &CategoryActionDto) -> Result<()>;

    async fn delete(&self, id: i64, dto: &CategoryActionDto) -> Result<()>;

    async fn contents_count(&self, id: i64) -> Result<i64>;

    async fn logs(&self, id: i64, pagination: Pagination) -> Result<LogListDto>;

    async fn all_logs(&self, pagination: Pagination) -> Result<LogListDto>;
}

/// [`CategoryApi`] over HTTP
pub struct HttpCategoryClient {
    api: ApiClient,
}

impl HttpCategoryClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", CATEGORIES_PATH, id)
    }
}

#[async_trait]
impl CategoryApi for HttpCategoryClient {
    async fn list(&self, query: &CategoriesQuery) -> Result<Vec<Category>> {
        self.api.get_json(CATEGORIES_PATH, &query.to_query()).await
    }

    async fn get(&self, id: i64) -> Result<Category> {
        self.api.get_json(&Self::item_path(id), &Vec::new()).await
    }

    async fn create(&self, dto: &CreateCategoryDto) -> Result<Category> {
        let category: Category = self.api.post_json(CATEGORIES_PATH, dto).await?;
        tracing::info!("Created category {} ({})", category.id, category.name);
        Ok(category)
    }

    async fn update(&self, id: i64, dto: &UpdateCategoryDto) -> Result<Category> {
        self.api.put_json(&Self::item_path(id), dto).await
    }

    async fn inactivate(&self, id: i64, dto: &CategoryActionDto) -> Result<()> {
        let path = format!("{}/inactivate", Self::item_path(id));
        self.api.send_json(Method::PATCH, &path, dto).await?;
        tracing::info!("Inactivated category {} ({:?})", id, dto.content_action);
        Ok(())
    }

    async fn delete(&self, id: i64, dto: &CategoryActionDto) -> Result<()> {
        self.api
            .send_json(Method::DELETE, &Self::item_path(id), dto)
            .await?;
        tracing::info!("Deleted category {} ({:?})", id, dto.content_action);
        Ok(())
    }

    async fn contents_count(&self, id: i64) -> Result<i64> {
        let path = format!("{}/contents-count", Self::item_path(id));
        let dto: ContentsCountDto = self.api.get_json(&path, &Vec::new()).await?;
        Ok(dto.count)
    }

    async fn logs(&self, id: i64, pagination: Pagination) -> Result<LogListDto> {
        let path = format!("{}/logs", Self::item_path(id));
        self.api.get_json(&path, &pagination.as_query()).await
    }

    async fn all_logs(&self, pagination: Pagination) -> Result<LogListDto> {
        let path = format!("{}/logs/all", CATEGORIES_PATH);
        self.api.get_json(&path, &pagination.as_query()).await
    }
}
