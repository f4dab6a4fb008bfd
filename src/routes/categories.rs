//! HTTP handlers for the `/api/categories` resource.
//!
//! Handlers stay thin: they move the repository onto the blocking pool,
//! delegate to the service layer and translate the outcome into a status
//! code.

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::categories::CategoryDto;
use crate::repository::CategoryRepository;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

#[get("/categories")]
pub async fn list_categories(repo: web::Data<CategoryRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match web::block(move || list_categories_service(&repo)).await {
        Ok(Ok(categories)) => HttpResponse::Ok().json(categories),
        Ok(Err(err)) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    category_id: web::Path<i32>,
    repo: web::Data<CategoryRepository>,
) -> impl Responder {
    let id = category_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || get_category_service(id, &repo)).await {
        Ok(Ok(category)) => HttpResponse::Ok().json(category),
        Ok(Err(ServiceError::NotFound)) => HttpResponse::NotFound().finish(),
        Ok(Err(err)) => {
            log::error!("Failed to get category: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/categories")]
pub async fn create_category(
    repo: web::Data<CategoryRepository>,
    web::Json(dto): web::Json<CategoryDto>,
) -> impl Responder {
    let repo = repo.get_ref().clone();

    match web::block(move || create_category_service(dto, &repo)).await {
        Ok(Ok(created)) => {
            let location = format!("/api/categories/{}", created.id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(created)
        }
        Ok(Err(ServiceError::BadRequest(message))) => HttpResponse::BadRequest().body(message),
        Ok(Err(err)) => {
            log::error!("Failed to create category: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    repo: web::Data<CategoryRepository>,
    web::Json(dto): web::Json<CategoryDto>,
) -> impl Responder {
    let id = category_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || update_category_service(id, dto, &repo)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::BadRequest(message))) => HttpResponse::BadRequest().body(message),
        Ok(Err(err)) => {
            log::error!("Failed to update category: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<CategoryRepository>,
) -> impl Responder {
    let id = category_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || delete_category_service(id, &repo)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::NotFound)) => HttpResponse::NotFound().finish(),
        Ok(Err(err)) => {
            log::error!("Failed to delete category: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
