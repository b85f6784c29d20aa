use std::sync::Arc;

use product_recommender::app::create_app;
use product_recommender::config::{self, Config};
use product_recommender::corpus::Corpus;
use product_recommender::errors::RecommenderError;
use product_recommender::service::RecommendationService;

fn build_service(config: &Config) -> Result<RecommendationService, RecommenderError> {
    let corpus = match &config.training_data_file {
        Some(path) => Corpus::from_file(path)?,
        None => Corpus::builtin(),
    };
    log::info!("loaded {} training examples", corpus.len());

    let http_client = config.llm.http_client()?;
    RecommendationService::from_config(config, Arc::new(corpus), http_client)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing product recommender service...");

    let (config, service) = match config::load_config()
        .and_then(|config| build_service(&config).map(|service| (config, service)))
    {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("startup failed: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    log::info!(
        "fallback model {} at {}",
        config.llm.model,
        config.llm.api_url
    );

    let service = Arc::new(service);
    let server = actix_web::HttpServer::new(move || create_app(service.clone()));

    log::info!("listening on {}:{}", config.server.host, config.server.port);
    server
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await
}
