use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Serves one catalogued document verbatim. Every catalogue entry is
/// loaded at startup, so a miss here means the library and route table
/// disagree.
fn serve(library: &Library, name: &str) -> HttpResponse {
    match library.doc(name) {
        Some(doc) => HttpResponse::Ok().json(doc),
        None => {
            log::error!("[library] document {} missing from library", name);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn game_client_config(library: web::Data<Library>) -> impl Responder {
    serve(&library, GAME_CLIENT_CONFIG)
}
pub async fn war_info(library: web::Data<Library>) -> impl Responder {
    serve(&library, WAR_INFO)
}
pub async fn galactic_war_effects(library: web::Data<Library>) -> impl Responder {
    serve(&library, GALACTIC_WAR_EFFECTS)
}
pub async fn news_ticker(library: web::Data<Library>) -> impl Responder {
    serve(&library, NEWS_TICKER)
}
pub async fn war_assignment(library: web::Data<Library>) -> impl Responder {
    serve(&library, WAR_ASSIGNMENT)
}
pub async fn war_status(library: web::Data<Library>) -> impl Responder {
    serve(&library, WAR_STATUS)
}
pub async fn operation(library: web::Data<Library>) -> impl Responder {
    serve(&library, OPERATION)
}
pub async fn item_packages(library: web::Data<Library>) -> impl Responder {
    serve(&library, ITEM_PACKAGES)
}
pub async fn progression_packages(library: web::Data<Library>) -> impl Responder {
    serve(&library, PROGRESSION_PACKAGES)
}
pub async fn progression_items(library: web::Data<Library>) -> impl Responder {
    serve(&library, PROGRESSION_ITEMS)
}
pub async fn level_spec(library: web::Data<Library>) -> impl Responder {
    serve(&library, LEVEL_SPEC)
}
pub async fn progression(library: web::Data<Library>) -> impl Responder {
    serve(&library, PROGRESSION)
}
pub async fn progression_inventory(library: web::Data<Library>) -> impl Responder {
    serve(&library, PROGRESSION_INVENTORY)
}
pub async fn reward_entries(library: web::Data<Library>) -> impl Responder {
    serve(&library, REWARD_ENTRIES)
}
pub async fn season_pass(library: web::Data<Library>) -> impl Responder {
    serve(&library, SEASON_PASS)
}
pub async fn news_feed(library: web::Data<Library>) -> impl Responder {
    serve(&library, NEWS_FEED)
}

/// The single mocked war season id.
pub async fn war_id() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "id": df_core::WAR_ID }))
}
/// Elapsed war clock, computed rather than read from content.
pub async fn time_since_start() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "secondsSinceStart": seconds_since_start() }))
}
/// The client expects these two to exist; upstream serves them empty.
pub async fn customization() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({}))
}
pub async fn discounts() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn library() -> web::Data<Library> {
        web::Data::new(
            [(WAR_STATUS.to_string(), serde_json::json!({"active": [801]}))]
                .into_iter()
                .collect::<Library>(),
        )
    }

    #[actix_web::test]
    async fn documents_are_served_verbatim() {
        let app = test::init_service(
            App::new()
                .app_data(library())
                .route("/api/WarSeason/801/Status", web::get().to(war_status)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/WarSeason/801/Status")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({"active": [801]}));
    }

    #[actix_web::test]
    async fn missing_document_is_server_fault() {
        let app = test::init_service(
            App::new()
                .app_data(library())
                .route("/api/NewsFeed/801", web::get().to(news_feed)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/NewsFeed/801").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn war_clock_reports_elapsed_seconds() {
        let app = test::init_service(
            App::new().route("/api/WarSeason/801/timeSinceStart", web::get().to(time_since_start)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/WarSeason/801/timeSinceStart")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["secondsSinceStart"].as_u64().expect("seconds") > 0);
    }
}
