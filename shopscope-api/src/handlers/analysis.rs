use actix_web::{web, HttpResponse};
use chrono::Local;
use shared_types::AnalyzeRequest;
use tracing::info;

use crate::analysis::{AnalysisError, AnalysisState};

pub async fn analyze_profile(
    state: web::Data<AnalysisState>,
    request: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, AnalysisError> {
    let today = Local::now().date_naive();
    let analysis = state.analyze_profile(&request.text, today)?;

    info!(
        "Profile analysis completed: shop={:?}, review_events={}, items={}",
        analysis.profile.shop_name,
        analysis.profile.sales.event_count(),
        analysis.profile.items.len()
    );

    Ok(HttpResponse::Ok().json(analysis))
}

pub async fn analyze_transactions(
    state: web::Data<AnalysisState>,
    request: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, AnalysisError> {
    let analysis = state.analyze_transactions(&request.text)?;

    info!(
        "Transaction analysis completed: transactions={}, net_profit={}",
        analysis.history.transactions.len(),
        analysis.metrics.net_profit
    );

    Ok(HttpResponse::Ok().json(analysis))
}

#[cfg(test)]
mod tests {
    use crate::analysis::AnalysisState;
    use crate::handlers::configure;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    const HISTORY: &str = "Solde initial 120,50 €\n\
        Solde final 132,50 €\n\
        Vente produit X\n\
        +25,00 €\n\
        3 janvier 2024\n\
        Boost article\n\
        -13,00 €\n\
        4 janvier 2024\n";

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_transactions_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AnalysisState::new(50)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/transactions/analyze")
            .set_json(json!({ "text": HISTORY }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["history"]["summary"]["initial_balance"], "120.50");
        assert_eq!(body["history"]["transactions"][1]["type"], "marketing");
        assert_eq!(body["metrics"]["total_revenue"], "25.00");
        assert_eq!(body["metrics"]["net_profit"], "12.00");
        assert_eq!(body["metrics"]["expenses_by_category"]["marketing"], "13.00");
    }

    #[actix_web::test]
    async fn test_profile_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AnalysisState::new(10)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/profile/analyze")
            .set_json(json!({
                "text": "ma_boutique\n12 Abonnés\n3 Abonnements\nil y a 2 jours merci"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["profile"]["shop_name"], "ma_boutique");
        assert_eq!(body["profile"]["stats"]["followers"], 12);
        assert_eq!(body["profile"]["sales"]["by_country"]["france"], 1);
    }

    #[actix_web::test]
    async fn test_empty_text_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AnalysisState::new(50)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/profile/analyze")
            .set_json(json!({ "text": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Veuillez coller le contenu du profil");
    }

    #[actix_web::test]
    async fn test_short_text_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AnalysisState::new(50)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/transactions/analyze")
            .set_json(json!({ "text": "Vente\n+1,00 €" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Le contenu collé semble trop court");
    }
}
