use std::sync::Mutex;

use chrono::Utc;

use crate::domain::category::{Category, NewCategory};
use crate::domain::news::{News, NewNews};
use crate::domain::types::{CategoryId, NewsId};
use crate::repository::{Repository, RepositoryError, RepositoryResult};

#[derive(Default)]
struct TestState {
    categories: Vec<Category>,
    news: Vec<News>,
    next_category_id: i32,
    next_news_id: i32,
}

/// Simple in-memory repository used for unit tests.
///
/// Mirrors the storage-engine behavior the services rely on: key generation,
/// the eager category join on news reads, and cascade deletion of news when
/// their category goes away.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<TestState>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, news: Vec<News>) -> Self {
        let next_category_id = categories.iter().map(|c| c.id.get()).max().unwrap_or(0) + 1;
        let next_news_id = news.iter().map(|n| n.id.get()).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(TestState {
                categories,
                news,
                next_category_id,
                next_news_id,
            }),
        }
    }

    fn join_category(state: &TestState, news: &News) -> News {
        let mut news = news.clone();
        news.category = state
            .categories
            .iter()
            .find(|c| c.id == news.category_id)
            .cloned();
        news
    }
}

impl Repository<Category> for TestRepository {
    fn list_all(&self) -> RepositoryResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.clone())
    }

    fn get_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    fn create(&self, new: &NewCategory) -> RepositoryResult<Category> {
        let mut state = self.state.lock().unwrap();
        let id = CategoryId::new(state.next_category_id).unwrap();
        state.next_category_id += 1;
        let category = Category {
            id,
            name: new.name.clone(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    fn update(&self, category: &Category) -> RepositoryResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotUpdated),
        }
    }

    fn delete(&self, id: CategoryId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        let affected = before - state.categories.len();
        if affected > 0 {
            // ON DELETE CASCADE on news.category_id.
            state.news.retain(|n| n.category_id != id);
        }
        Ok(affected)
    }
}

impl Repository<News> for TestRepository {
    fn list_all(&self) -> RepositoryResult<Vec<News>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .news
            .iter()
            .map(|n| Self::join_category(&state, n))
            .collect())
    }

    fn get_by_id(&self, id: NewsId) -> RepositoryResult<Option<News>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .news
            .iter()
            .find(|n| n.id == id)
            .map(|n| Self::join_category(&state, n)))
    }

    fn create(&self, new: &NewNews) -> RepositoryResult<News> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.iter().any(|c| c.id == new.category_id) {
            // Mirrors the foreign-key constraint on news.category_id.
            return Err(RepositoryError::Database(
                diesel::result::Error::NotFound,
            ));
        }
        let id = NewsId::new(state.next_news_id).unwrap();
        state.next_news_id += 1;
        let news = News {
            id,
            title: new.title.clone(),
            content: new.content.clone(),
            created_at: new.created_at.unwrap_or_else(|| Utc::now().naive_utc()),
            category_id: new.category_id,
            category: None,
        };
        state.news.push(news.clone());
        Ok(news)
    }

    fn update(&self, news_item: &News) -> RepositoryResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.news.iter_mut().find(|n| n.id == news_item.id) {
            Some(existing) => {
                *existing = News {
                    category: None,
                    ..news_item.clone()
                };
                Ok(())
            }
            None => Err(RepositoryError::NotUpdated),
        }
    }

    fn delete(&self, id: NewsId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        let before = state.news.len();
        state.news.retain(|n| n.id != id);
        Ok(before - state.news.len())
    }
}
