//! Business logic for category endpoints.
//!
//! All repository interactions happen here so that the HTTP routes can
//! remain thin wrappers.

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::repository::Repository;

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: Repository<Category>,
{
    match repo.list_all() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_category<R>(id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: Repository<Category>,
{
    let id = CategoryId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_by_id(id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_category<R>(dto: CategoryDto, repo: &R) -> ServiceResult<CategoryDto>
where
    R: Repository<Category>,
{
    match repo.create(&dto.into_new()) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_category<R>(id: i32, dto: CategoryDto, repo: &R) -> ServiceResult<()>
where
    R: Repository<Category>,
{
    if id != dto.id {
        return Err(ServiceError::BadRequest(
            "path and body ids do not match".to_string(),
        ));
    }

    let category = Category::try_from(dto).map_err(|e| ServiceError::BadRequest(e.to_string()))?;

    match repo.update(&category) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Failed to update category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_category<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: Repository<Category>,
{
    let id = CategoryId::new(id).map_err(|_| ServiceError::NotFound)?;

    // Lookup first: a missing row is 404 here even though the storage-level
    // delete below would be a silent no-op.
    match repo.get_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
