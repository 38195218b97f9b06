use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::collections::HashMap;

/// POST login. Tolerates an absent or malformed body; a missing public
/// key is accepted and merely limits what pairing can later achieve.
pub async fn login(
    pairing: web::Data<Pairing>,
    req: Option<web::Json<LoginRequest>>,
) -> impl Responder {
    let public_key = req.and_then(|r| r.into_inner().public_key);
    let id = pairing.login(public_key);
    HttpResponse::Ok().json(LoginResponse {
        session_id: id.to_string(),
    })
}

/// PUT lobby roster. Every outcome (malformed credential, unknown
/// session, already paired, no host, null account id, success) is
/// acknowledged identically; the distinguishing detail goes to the log.
pub async fn lobby(
    pairing: web::Data<Pairing>,
    credential: Credential,
    body: Option<web::Json<LobbyUpdate>>,
) -> impl Responder {
    let roster = body.map(|b| b.into_inner().players).unwrap_or_default();
    pairing.lobby_update(credential.session(), &roster);
    HttpResponse::Accepted().finish()
}

/// GET key lookup by account id. A missing `id` parameter is the one
/// caller error on this surface; an unknown id is an empty result.
pub async fn keys(
    pairing: web::Data<Pairing>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    match query.get("id") {
        None => {
            log::warn!("[keys] request with no id parameter");
            HttpResponse::BadRequest().json(serde_json::json!({"error": "missing id parameter"}))
        }
        Some(id) => match pairing.keys(id) {
            None => {
                log::info!("[keys] lookup for unknown account {}", id);
                HttpResponse::Ok().json(KeysResponse {
                    account_keys: vec![],
                })
            }
            Some(key) => HttpResponse::Ok().json(KeysResponse {
                account_keys: vec![AccountKey {
                    platform_account_id: id.clone(),
                    key,
                }],
            }),
        },
    }
}
