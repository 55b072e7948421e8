pub mod analysis;

use actix_web::{get, web, HttpResponse, Responder};

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api")
            .route("/profile/analyze", web::post().to(analysis::analyze_profile))
            .route(
                "/transactions/analyze",
                web::post().to(analysis::analyze_transactions),
            ),
    );
}
