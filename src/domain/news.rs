use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, NewsId};

/// Canonical news record belonging to one category.
///
/// `category` is a lookup relation resolved by the repository on read paths
/// that perform the join; write paths leave it unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct News {
    pub id: NewsId,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub category_id: CategoryId,
    pub category: Option<Category>,
}

/// Data required to insert a new [`News`] item.
///
/// `created_at` defaults to the current time when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
    pub category_id: CategoryId,
}
