use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// DOCUMENT CATALOGUE
// Logical document names; each loads from `<name>.json` under the content
// directory and backs exactly one read-through route.
// ============================================================================
pub const GAME_CLIENT_CONFIG: &str = "GameClientConfig";
pub const WAR_INFO: &str = "WarInfo";
pub const GALACTIC_WAR_EFFECTS: &str = "GalacticWarEffects";
pub const NEWS_TICKER: &str = "NewsTicker";
pub const WAR_ASSIGNMENT: &str = "WarAssignment";
pub const WAR_STATUS: &str = "WarStatus";
pub const OPERATION: &str = "Operation";
pub const ITEM_PACKAGES: &str = "ItemPackages";
pub const PROGRESSION_PACKAGES: &str = "ProgressionPackages";
pub const PROGRESSION_ITEMS: &str = "ProgressionItems";
pub const LEVEL_SPEC: &str = "LevelSpec";
pub const PROGRESSION: &str = "Progression";
pub const PROGRESSION_INVENTORY: &str = "ProgressionInventory";
pub const REWARD_ENTRIES: &str = "RewardEntries";
pub const SEASON_PASS: &str = "SeasonPass";
pub const NEWS_FEED: &str = "NewsFeed";

pub const DOCUMENTS: &[&str] = &[
    GAME_CLIENT_CONFIG,
    WAR_INFO,
    GALACTIC_WAR_EFFECTS,
    NEWS_TICKER,
    WAR_ASSIGNMENT,
    WAR_STATUS,
    OPERATION,
    ITEM_PACKAGES,
    PROGRESSION_PACKAGES,
    PROGRESSION_ITEMS,
    LEVEL_SPEC,
    PROGRESSION,
    PROGRESSION_INVENTORY,
    REWARD_ENTRIES,
    SEASON_PASS,
    NEWS_FEED,
];

/// Pre-loaded static content, keyed by logical document name.
/// Loaded once at startup and served verbatim for the process lifetime;
/// a content change means a restart.
#[derive(Debug, Default)]
pub struct Library {
    docs: HashMap<String, serde_json::Value>,
}

impl Library {
    /// Loads every catalogued document from `dir`, failing fast on the
    /// first missing or malformed file.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let mut docs = HashMap::new();
        for name in DOCUMENTS {
            let path = dir.join(format!("{}.json", name));
            let text = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))?;
            let doc = serde_json::from_str(&text)
                .map_err(|e| anyhow::anyhow!("parse {}: {}", path.display(), e))?;
            docs.insert(name.to_string(), doc);
        }
        log::info!("[library] loaded {} documents from {}", docs.len(), dir.display());
        Ok(Self { docs })
    }
    /// Verbatim read-through by document name.
    pub fn doc(&self, name: &str) -> Option<&serde_json::Value> {
        self.docs.get(name)
    }
}

impl FromIterator<(String, serde_json::Value)> for Library {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        Self {
            docs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tempdir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("df-library-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn load_reads_full_catalogue() {
        let dir = tempdir("full");
        for name in DOCUMENTS {
            std::fs::write(dir.join(format!("{}.json", name)), "{\"stub\": true}")
                .expect("write doc");
        }
        let library = Library::load(&dir).expect("load succeeds");
        assert_eq!(
            library.doc(WAR_INFO),
            Some(&serde_json::json!({"stub": true}))
        );
        assert!(library.doc("NoSuchDocument").is_none());
    }

    #[test]
    fn load_fails_on_missing_document() {
        let dir = tempdir("missing");
        std::fs::write(dir.join(format!("{}.json", GAME_CLIENT_CONFIG)), "{}").expect("write doc");
        assert!(Library::load(&dir).is_err());
    }

    #[test]
    fn load_fails_on_malformed_document() {
        let dir = tempdir("malformed");
        for name in DOCUMENTS {
            std::fs::write(dir.join(format!("{}.json", name)), "{}").expect("write doc");
        }
        std::fs::write(dir.join(format!("{}.json", NEWS_FEED)), "not json").expect("write doc");
        assert!(Library::load(&dir).is_err());
    }

    #[test]
    fn collected_library_reads_through() {
        let library: Library =
            [(WAR_STATUS.to_string(), serde_json::json!({"active": true}))]
                .into_iter()
                .collect();
        assert_eq!(
            library.doc(WAR_STATUS),
            Some(&serde_json::json!({"active": true}))
        );
    }
}
