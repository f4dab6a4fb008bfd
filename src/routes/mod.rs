use actix_web::web;

pub mod categories;
pub mod news;

/// Register the full `/api` surface on an Actix application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(categories::list_categories)
            .service(categories::get_category)
            .service(categories::create_category)
            .service(categories::update_category)
            .service(categories::delete_category)
            .service(news::list_news)
            .service(news::get_news)
            .service(news::create_news)
            .service(news::update_news)
            .service(news::delete_news),
    );
}
