//! Unified Backend Server
//!
//! Combines the account pairing surface and the static content
//! read-through surface into a single actix-web server.
//!
//! ## Route groups
//!
//! - `/api/Account/*` + `/api/lobby` — login, lobby pairing, key lookup
//! - `/api/*` — configuration, war season, progression, and news content
//! - `/`, `/health` — banner and liveness

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use df_account::Keyring;
use df_account::Pairing;
use df_account::Sessions;
use df_content::Library;
use std::sync::Arc;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn banner() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "darkfluid backend running on this host" }))
}

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let library = web::Data::new(Library::load(std::path::Path::new(&dir))?);
    let pairing = web::Data::new(Pairing::new(
        Arc::new(Sessions::default()),
        Arc::new(Keyring::default()),
    ));
    log::info!("starting darkfluid server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(library.clone())
            .app_data(pairing.clone())
            .route("/", web::get().to(banner))
            .route("/health", web::get().to(health))
            .service(
                web::scope("/api")
                    .route("/Account/Login", web::post().to(df_account::login))
                    .route("/Account/Keys", web::get().to(df_account::keys))
                    .route("/lobby", web::put().to(df_account::lobby))
                    .route("/Configuration/GameClient", web::get().to(df_content::game_client_config))
                    .route("/WarSeason/current/WarId", web::get().to(df_content::war_id))
                    .route("/WarSeason/801/warinfo", web::get().to(df_content::war_info))
                    .route("/WarSeason/801/timeSinceStart", web::get().to(df_content::time_since_start))
                    .route("/WarSeason/801/Status", web::get().to(df_content::war_status))
                    .route("/WarSeason/GalacticWarEffects", web::get().to(df_content::galactic_war_effects))
                    .route("/WarSeason/NewsTicker", web::get().to(df_content::news_ticker))
                    .route("/v2/Assignment/War/801", web::get().to(df_content::war_assignment))
                    .route("/NewsFeed/801", web::get().to(df_content::news_feed))
                    .route("/Operation", web::get().to(df_content::operation))
                    .route("/Progression", web::get().to(df_content::progression))
                    .route("/Progression/ItemPackages", web::get().to(df_content::item_packages))
                    .route("/Progression/ProgressionPackages", web::get().to(df_content::progression_packages))
                    .route("/Progression/items", web::get().to(df_content::progression_items))
                    .route("/Progression/items/discounts/801", web::get().to(df_content::discounts))
                    .route("/Progression/levelspec", web::get().to(df_content::level_spec))
                    .route("/Progression/inventory", web::get().to(df_content::progression_inventory))
                    .route("/Progression/customization", web::get().to(df_content::customization))
                    .route("/Mission/RewardEntries", web::get().to(df_content::reward_entries))
                    .route("/SeasonPass", web::get().to(df_content::season_pass)),
            )
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await?;
    Ok(())
}
