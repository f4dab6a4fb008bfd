use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::news::{News, NewNews};
use crate::domain::types::TypeConstraintError;
use crate::dto::categories::CategoryDto;

/// Wire representation of a [`News`] item.
///
/// `category` is serialized only when the repository performed the join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    pub category_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
}

impl From<News> for NewsDto {
    fn from(value: News) -> Self {
        Self {
            id: value.id.get(),
            title: value.title,
            content: value.content,
            created_at: Some(value.created_at),
            category_id: value.category_id.get(),
            category: value.category.map(CategoryDto::from),
        }
    }
}

impl TryFrom<NewsDto> for News {
    type Error = TypeConstraintError;

    // The embedded `category`, if any, is ignored: write paths never touch
    // the relation.
    fn try_from(value: NewsDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.try_into()?,
            title: value.title,
            content: value.content,
            created_at: value.created_at.unwrap_or_default(),
            category_id: value.category_id.try_into()?,
            category: None,
        })
    }
}

impl NewsDto {
    /// Project into the insertable form, dropping any client-supplied id.
    pub fn into_new(self) -> Result<NewNews, TypeConstraintError> {
        Ok(NewNews {
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            category_id: self.category_id.try_into()?,
        })
    }
}
