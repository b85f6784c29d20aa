use actix_web::web::{Data, Json};

use crate::consts;
use crate::models::recommendation::{RecommendationRequest, RecommendationResponse, Welcome};
use crate::service::RecommendationService;

pub async fn root() -> impl actix_web::Responder {
    actix_web::HttpResponse::Ok().json(Welcome {
        message: consts::WELCOME_MESSAGE.to_string(),
    })
}

/// Always answers 200; fallback failures are reported in the text.
pub async fn recommendations(
    service: Data<RecommendationService>,
    request: Json<RecommendationRequest>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    let recommendation = service.recommend(&request.user_input).await;
    log::debug!("recommendation: {:?}", recommendation);

    actix_web::HttpResponse::Ok().json(RecommendationResponse::from(recommendation))
}
