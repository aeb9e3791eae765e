mod action_dto;
mod category_dto;
mod log_dto;

pub use action_dto::{ActionPrompt, ActionRequest, CategoryActionKind};
pub use category_dto::{
    CategoriesQuery, CategoryActionDto, ContentAction, ContentsCountDto, CreateCategoryDto,
    StatusFilter, UpdateCategoryDto,
};
pub use log_dto::{LogListDto, LogPage};
