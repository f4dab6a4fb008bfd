//! Business logic for news endpoints.

use crate::domain::news::News;
use crate::domain::types::NewsId;
use crate::dto::news::NewsDto;
use crate::repository::Repository;

use super::{ServiceError, ServiceResult};

pub fn list_news<R>(repo: &R) -> ServiceResult<Vec<NewsDto>>
where
    R: Repository<News>,
{
    match repo.list_all() {
        Ok(news) => Ok(news.into_iter().map(NewsDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list news: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_news<R>(id: i32, repo: &R) -> ServiceResult<NewsDto>
where
    R: Repository<News>,
{
    let id = NewsId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_by_id(id) {
        Ok(Some(news)) => Ok(news.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get news {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_news<R>(dto: NewsDto, repo: &R) -> ServiceResult<NewsDto>
where
    R: Repository<News>,
{
    let new_news = dto
        .into_new()
        .map_err(|e| ServiceError::BadRequest(e.to_string()))?;

    match repo.create(&new_news) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            log::error!("Failed to create news: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_news<R>(id: i32, dto: NewsDto, repo: &R) -> ServiceResult<()>
where
    R: Repository<News>,
{
    if id != dto.id {
        return Err(ServiceError::BadRequest(
            "path and body ids do not match".to_string(),
        ));
    }

    let news = News::try_from(dto).map_err(|e| ServiceError::BadRequest(e.to_string()))?;

    match repo.update(&news) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Failed to update news {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_news<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: Repository<News>,
{
    let id = NewsId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get news {id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete news {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::CategoryId;
    use crate::repository::test::TestRepository;
    use crate::services::categories::delete_category;
    use chrono::DateTime;

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: "Sports".to_string(),
        }
    }

    fn sample_news() -> News {
        News {
            id: NewsId::new(1).unwrap(),
            title: "Match Result".to_string(),
            content: "Home side won.".to_string(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            category_id: CategoryId::new(1).unwrap(),
            category: None,
        }
    }

    fn sample_dto(id: i32, category_id: i32) -> NewsDto {
        NewsDto {
            id,
            title: "Match Result".to_string(),
            content: "Home side won.".to_string(),
            created_at: None,
            category_id,
            category: None,
        }
    }

    #[test]
    fn read_paths_populate_the_category() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_news()]);

        let listed = list_news(&repo).unwrap();
        assert_eq!(listed[0].category.as_ref().unwrap().name, "Sports");

        let fetched = get_news(1, &repo).unwrap();
        assert_eq!(fetched.category.as_ref().unwrap().id, 1);
    }

    #[test]
    fn create_defaults_created_at_and_assigns_id() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        let created = create_news(sample_dto(0, 1), &repo).unwrap();

        assert_eq!(created.id, 1);
        assert!(created.created_at.is_some());
        assert!(created.category.is_none());
    }

    #[test]
    fn create_with_non_positive_category_id_is_bad_request() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        let result = create_news(sample_dto(0, 0), &repo);

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    #[test]
    fn create_with_unknown_category_fails_as_internal() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        assert_eq!(
            create_news(sample_dto(0, 42), &repo),
            Err(ServiceError::Internal)
        );
    }

    #[test]
    fn update_with_mismatched_ids_leaves_storage_unchanged() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_news()]);
        let mut dto = sample_dto(2, 1);
        dto.title = "Rewritten".to_string();

        let result = update_news(1, dto, &repo);

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        assert_eq!(get_news(1, &repo).unwrap().title, "Match Result");
    }

    #[test]
    fn update_missing_news_fails_as_internal() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        assert_eq!(
            update_news(9, sample_dto(9, 1), &repo),
            Err(ServiceError::Internal)
        );
    }

    #[test]
    fn delete_missing_news_is_not_found() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_news()]);

        assert_eq!(delete_news(2, &repo), Err(ServiceError::NotFound));
        assert_eq!(list_news(&repo).unwrap().len(), 1);
    }

    #[test]
    fn deleting_a_category_cascades_to_its_news() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_news()]);

        delete_category(1, &repo).unwrap();

        assert!(list_news(&repo).unwrap().is_empty());
        assert_eq!(get_news(1, &repo), Err(ServiceError::NotFound));
    }
}
