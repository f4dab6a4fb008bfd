use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::news::{News as DomainNews, NewNews as DomainNewNews};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `news` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::news)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub category_id: i32,
}

/// Insertable form of [`News`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::news)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub category_id: i32,
}

impl TryFrom<News> for DomainNews {
    type Error = TypeConstraintError;

    fn try_from(news: News) -> Result<Self, Self::Error> {
        Ok(Self {
            id: news.id.try_into()?,
            title: news.title,
            content: news.content,
            created_at: news.created_at,
            category_id: news.category_id.try_into()?,
            category: None,
        })
    }
}

impl From<DomainNewNews> for NewNews {
    fn from(news: DomainNewNews) -> Self {
        Self {
            title: news.title,
            content: news.content,
            created_at: news
                .created_at
                .unwrap_or_else(|| Utc::now().naive_utc()),
            category_id: news.category_id.get(),
        }
    }
}
