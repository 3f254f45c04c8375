pub mod bridge;
pub mod config;
pub mod error;
pub mod gamepad;
pub mod level;

// Re-export key types at crate root for convenience
pub use bridge::protocol::{HostReply, UiRequest};
pub use bridge::{HostBridge, HostCapabilities, Notifier, ReplySink};
pub use config::{BridgeConfig, InitFlags, PersistencePolicy};
pub use error::{BridgeError, BridgeResult};
pub use gamepad::{GamepadSnapshot, GamepadSource};
pub use level::remote::{HttpResponse, RemoteTransport, TransportCallback};
pub use level::{KeyValueStorage, LevelStore, LEVEL_DATA_KEY};
