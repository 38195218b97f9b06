use df_core::AccountId;
use df_core::ID;
use df_core::Unique;
use std::collections::HashMap;
use std::sync::RwLock;

/// One client login lifecycle.
///
/// Created anonymously at login, optionally carrying the client's public
/// key. The account identity arrives later, with the first effective
/// lobby roster submission. Once `lobby_processed` latches, neither it
/// nor `account_id` ever changes again.
#[derive(Debug, Clone)]
pub struct Session {
    id: ID<Self>,
    public_key: Option<String>,
    account_id: Option<AccountId>,
    lobby_processed: bool,
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Session {
    fn new(id: ID<Self>, public_key: Option<String>) -> Self {
        Self {
            id,
            public_key,
            account_id: None,
            lobby_processed: false,
        }
    }
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }
    pub fn lobby_processed(&self) -> bool {
        self.lobby_processed
    }
}

/// Registry of live sessions, keyed by token.
///
/// Sessions are owned by the registry for the process lifetime; lookups
/// hand out clones, never references into the map.
#[derive(Debug, Default)]
pub struct Sessions {
    sessions: RwLock<HashMap<ID<Session>, Session>>,
}

impl Sessions {
    /// Creates a fresh unpaired session and returns its token.
    pub fn create(&self, public_key: Option<String>) -> ID<Session> {
        let id = ID::default();
        self.sessions
            .write()
            .expect("sessions lock")
            .insert(id, Session::new(id, public_key));
        id
    }
    /// Pure lookup by token.
    pub fn get(&self, id: ID<Session>) -> Option<Session> {
        self.sessions.read().expect("sessions lock").get(&id).cloned()
    }
    /// Latches the session into its paired state.
    ///
    /// The check-and-set runs under the write lock, so of any number of
    /// concurrent attempts on the same session exactly one observes the
    /// unprocessed state and performs the transition. Returns the updated
    /// snapshot to that winning caller only; `None` means the token is
    /// unknown or the session already processed a lobby update.
    pub fn mark_paired(&self, id: ID<Session>, account: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().expect("sessions lock");
        match sessions.get_mut(&id) {
            Some(session) if !session.lobby_processed => {
                session.account_id = Some(account.to_string());
                session.lobby_processed = true;
                Some(session.clone())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_starts_unpaired() {
        let sessions = Sessions::default();
        let id = sessions.create(Some("PK1".to_string()));
        let session = sessions.get(id).expect("session exists");
        assert_eq!(session.public_key(), Some("PK1"));
        assert_eq!(session.account_id(), None);
        assert!(!session.lobby_processed());
    }

    #[test]
    fn get_unknown_token_is_none() {
        let sessions = Sessions::default();
        assert!(sessions.get(ID::default()).is_none());
    }

    #[test]
    fn tokens_never_repeat() {
        let sessions = Sessions::default();
        let issued: std::collections::HashSet<_> =
            (0..1000).map(|_| sessions.create(None)).collect();
        assert_eq!(issued.len(), 1000);
    }

    #[test]
    fn mark_paired_transitions_once() {
        let sessions = Sessions::default();
        let id = sessions.create(Some("PK1".to_string()));
        let won = sessions.mark_paired(id, "42").expect("first attempt wins");
        assert_eq!(won.id(), id);
        assert_eq!(won.account_id(), Some("42"));
        assert!(won.lobby_processed());
        assert!(sessions.mark_paired(id, "43").is_none());
        let session = sessions.get(id).expect("session exists");
        assert_eq!(session.account_id(), Some("42"));
    }

    #[test]
    fn mark_paired_unknown_token_is_none() {
        let sessions = Sessions::default();
        assert!(sessions.mark_paired(ID::default(), "42").is_none());
    }

    #[test]
    fn mark_paired_preserves_public_key() {
        let sessions = Sessions::default();
        let id = sessions.create(Some("PK1".to_string()));
        let won = sessions.mark_paired(id, "42").expect("attempt wins");
        assert_eq!(won.public_key(), Some("PK1"));
    }

    #[test]
    fn concurrent_attempts_have_one_winner() {
        let sessions = std::sync::Arc::new(Sessions::default());
        let id = sessions.create(None);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sessions = sessions.clone();
                std::thread::spawn(move || sessions.mark_paired(id, "42").is_some())
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread joins"))
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
    }
}
