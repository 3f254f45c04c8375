use serde::{Deserialize, Serialize};

use crate::level::LEVEL_DATA_KEY;

/// Viewport dimensions handed to the UI component once at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitFlags {
    pub width: u32,
    pub height: u32,
}

/// Where level saves go and where fetches come from.
/// The policy is picked once at construction, never per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistencePolicy {
    /// Keep the payload in the host's key-value storage under one fixed key,
    /// last write wins. Fetch reads the same key back.
    Local,
    /// POST saves to `save_endpoint`; GET level payloads from `level_url`.
    Remote {
        save_endpoint: String,
        level_url: String,
    },
}

impl PersistencePolicy {
    /// Remote policy pointed at the development server defaults.
    pub fn remote_defaults() -> Self {
        Self::Remote {
            save_endpoint: "http://localhost:3000/".to_string(),
            level_url: "levels/level1.json".to_string(),
        }
    }
}

/// Configuration for the bridge, provided by the host page.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Viewport dimensions passed to the UI component at init.
    pub flags: InitFlags,
    /// Persistence policy for the level-data channels.
    pub persistence: PersistencePolicy,
    /// Storage key for local saves (default: "levelData").
    pub storage_key: String,
    /// Key code that requests fullscreen on the game canvas (default: "KeyF").
    pub fullscreen_key: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            flags: InitFlags {
                width: 800,
                height: 600,
            },
            persistence: PersistencePolicy::Local,
            storage_key: LEVEL_DATA_KEY.to_string(),
            fullscreen_key: "KeyF".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = BridgeConfig::default();
        assert_eq!(config.persistence, PersistencePolicy::Local);
        assert_eq!(config.storage_key, "levelData");
        assert_eq!(config.fullscreen_key, "KeyF");
    }

    #[test]
    fn remote_defaults_point_at_dev_server() {
        match PersistencePolicy::remote_defaults() {
            PersistencePolicy::Remote {
                save_endpoint,
                level_url,
            } => {
                assert_eq!(save_endpoint, "http://localhost:3000/");
                assert_eq!(level_url, "levels/level1.json");
            }
            other => panic!("expected remote policy, got {:?}", other),
        }
    }

    #[test]
    fn flags_serialize_as_plain_numbers() {
        let flags = InitFlags {
            width: 1280,
            height: 720,
        };
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json, serde_json::json!({ "width": 1280, "height": 720 }));
    }
}
