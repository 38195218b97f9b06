use super::*;
use df_core::ID;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use std::future::Ready;

/// Extractor for the opaque session credential carried in the
/// Authorization header as `session <token>` (scheme case-insensitive).
/// Extraction never rejects a request: anything absent or unparseable
/// yields an empty credential, which the workflow absorbs as a no-op.
pub struct Credential(pub Option<ID<Session>>);

impl Credential {
    pub fn session(&self) -> Option<ID<Session>> {
        self.0
    }
}

fn parse(header: &str) -> Option<ID<Session>> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("session") {
        return None;
    }
    uuid::Uuid::parse_str(token.trim()).ok().map(ID::from)
}

impl FromRequest for Credential {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(parse);
        std::future::ready(Ok(Credential(session)))
    }
}
