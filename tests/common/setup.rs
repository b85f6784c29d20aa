use std::sync::Arc;

use reqwest::Client;

use product_recommender::config::Config;
use product_recommender::corpus::{Corpus, TrainingExample};
use product_recommender::service::RecommendationService;

pub fn create_test_corpus() -> Arc<Corpus> {
    Arc::new(Corpus::new(vec![
        TrainingExample::new(
            "Busco un portátil para programar",
            "Te recomiendo un portátil con 16 GB de RAM.",
        ),
        TrainingExample::new(
            "Necesito un teléfono barato",
            "Un teléfono de gama media es lo más equilibrado.",
        ),
        TrainingExample::new("Hola", "¡Hola! ¿Qué producto buscas?"),
    ]))
}

pub fn create_test_config(api_url: String) -> Config {
    let mut config = Config::default();
    config.llm.api_url = api_url;
    config.llm.model = "test-model".to_string();
    config
}

pub fn create_test_service(api_url: String) -> Arc<RecommendationService> {
    let config = create_test_config(api_url);
    let service = RecommendationService::from_config(&config, create_test_corpus(), Client::new())
        .expect("test config should be valid");
    Arc::new(service)
}
