use super::*;
use df_core::ID;
use std::sync::Arc;

/// The login → lobby-update → key-pairing workflow.
///
/// A session moves through exactly one transition: created, then paired
/// by its first effective lobby update. Every rejected update leaves the
/// session where it was and is retryable; no rejection is ever surfaced
/// to the caller.
pub struct Pairing {
    sessions: Arc<Sessions>,
    keyring: Arc<Keyring>,
}

impl Pairing {
    pub fn new(sessions: Arc<Sessions>, keyring: Arc<Keyring>) -> Self {
        Self { sessions, keyring }
    }

    /// Creates a session for a fresh login and returns its token.
    /// A login without a public key is accepted; it limits the later
    /// pairing to identity only.
    pub fn login(&self, public_key: Option<String>) -> ID<Session> {
        let id = self.sessions.create(public_key.clone());
        match public_key {
            Some(key) => log::info!("[login] session {} created | key={}", id, key),
            None => log::warn!("[login] session {} created without a public key", id),
        }
        id
    }

    /// Processes a lobby roster submission for the credentialed session.
    ///
    /// Absorbs every rejection as a logged no-op: absent or unrecognized
    /// credential, an already-paired session, a roster with no host, and
    /// a host with a missing or null account id all leave state untouched.
    /// A valid host identity pairs the session; the public key is written
    /// through to the keyring only when the session captured one at login.
    pub fn lobby_update(&self, credential: Option<ID<Session>>, roster: &[Player]) {
        let Some(id) = credential else {
            log::warn!("[lobby] update with no parseable session credential");
            return;
        };
        let Some(session) = self.sessions.get(id) else {
            log::warn!("[lobby] update for unrecognized session {}", id);
            return;
        };
        if session.lobby_processed() {
            return;
        }
        let Some(host) = roster.iter().find(|p| p.is_host) else {
            log::warn!("[lobby] no host in roster for session {}", id);
            return;
        };
        let account = match host.member_account_id.as_deref() {
            None | Some("") | Some("0") => {
                log::warn!("[lobby] host has missing or null account id | session={}", id);
                return;
            }
            Some(account) => account,
        };
        // a concurrent update may have latched the session since the
        // check above; mark_paired arbitrates and only one caller wins
        let Some(session) = self.sessions.mark_paired(id, account) else {
            return;
        };
        match session.public_key() {
            Some(key) => {
                self.keyring.insert(account, key);
                log::info!(
                    "[lobby] paired account {} to public key | session={} key={}",
                    account,
                    id,
                    key
                );
            }
            None => log::warn!(
                "[lobby] account {} resolved but session {} has no key to pair",
                account,
                id
            ),
        }
    }

    /// Read-through key lookup by account id.
    pub fn keys(&self, account: &str) -> Option<String> {
        self.keyring.lookup(account)
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }
}
