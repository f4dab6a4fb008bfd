use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};
use dotenvy::dotenv;

use newsdesk::db::establish_connection_pool;
use newsdesk::models::config::ServerConfig;
use newsdesk::repository::{CategoryRepository, NewsRepository};
use newsdesk::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings: ServerConfig = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&settings.database_url).map_err(std::io::Error::other)?;

    let category_repo = CategoryRepository::new(pool.clone());
    let news_repo = NewsRepository::new(pool);

    log::info!("Starting server at {}", settings.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            // Any origin, method and header, as required for the existing
            // clients of this API.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(category_repo.clone()))
            .app_data(web::Data::new(news_repo.clone()))
            .configure(routes::configure)
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
