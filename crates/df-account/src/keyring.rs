use df_core::AccountId;
use std::collections::HashMap;
use std::sync::RwLock;

/// Account id → public key registry.
///
/// Holds the durable side effect of a successful pairing for the process
/// lifetime. Re-pairing an account overwrites its previous key; the
/// registry keeps at most one current value per account.
#[derive(Debug, Default)]
pub struct Keyring {
    keys: RwLock<HashMap<AccountId, String>>,
}

impl Keyring {
    /// Unconditional upsert.
    pub fn insert(&self, account: &str, key: &str) {
        self.keys
            .write()
            .expect("keyring lock")
            .insert(account.to_string(), key.to_string());
    }
    /// Pure lookup.
    pub fn lookup(&self, account: &str) -> Option<String> {
        self.keys.read().expect("keyring lock").get(account).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_unknown_account_is_none() {
        let keyring = Keyring::default();
        assert!(keyring.lookup("42").is_none());
    }

    #[test]
    fn insert_then_lookup() {
        let keyring = Keyring::default();
        keyring.insert("42", "PK1");
        assert_eq!(keyring.lookup("42"), Some("PK1".to_string()));
    }

    #[test]
    fn insert_overwrites_prior_key() {
        let keyring = Keyring::default();
        keyring.insert("42", "PK1");
        keyring.insert("42", "PK2");
        assert_eq!(keyring.lookup("42"), Some("PK2".to_string()));
    }
}
