//! HTTP handlers for the `/api/news` resource.

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::news::NewsDto;
use crate::repository::NewsRepository;
use crate::services::ServiceError;
use crate::services::news::{
    create_news as create_news_service, delete_news as delete_news_service,
    get_news as get_news_service, list_news as list_news_service,
    update_news as update_news_service,
};

#[get("/news")]
pub async fn list_news(repo: web::Data<NewsRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match web::block(move || list_news_service(&repo)).await {
        Ok(Ok(news)) => HttpResponse::Ok().json(news),
        Ok(Err(err)) => {
            log::error!("Failed to list news: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/news/{news_id}")]
pub async fn get_news(
    news_id: web::Path<i32>,
    repo: web::Data<NewsRepository>,
) -> impl Responder {
    let id = news_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || get_news_service(id, &repo)).await {
        Ok(Ok(news)) => HttpResponse::Ok().json(news),
        Ok(Err(ServiceError::NotFound)) => HttpResponse::NotFound().finish(),
        Ok(Err(err)) => {
            log::error!("Failed to get news: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/news")]
pub async fn create_news(
    repo: web::Data<NewsRepository>,
    web::Json(dto): web::Json<NewsDto>,
) -> impl Responder {
    let repo = repo.get_ref().clone();

    match web::block(move || create_news_service(dto, &repo)).await {
        Ok(Ok(created)) => {
            let location = format!("/api/news/{}", created.id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(created)
        }
        Ok(Err(ServiceError::BadRequest(message))) => HttpResponse::BadRequest().body(message),
        Ok(Err(err)) => {
            log::error!("Failed to create news: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/news/{news_id}")]
pub async fn update_news(
    news_id: web::Path<i32>,
    repo: web::Data<NewsRepository>,
    web::Json(dto): web::Json<NewsDto>,
) -> impl Responder {
    let id = news_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || update_news_service(id, dto, &repo)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::BadRequest(message))) => HttpResponse::BadRequest().body(message),
        Ok(Err(err)) => {
            log::error!("Failed to update news: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/news/{news_id}")]
pub async fn delete_news(
    news_id: web::Path<i32>,
    repo: web::Data<NewsRepository>,
) -> impl Responder {
    let id = news_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || delete_news_service(id, &repo)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::NotFound)) => HttpResponse::NotFound().finish(),
        Ok(Err(err)) => {
            log::error!("Failed to delete news: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
