use thiserror::Error;

/// Everything that can go wrong while servicing a channel request.
/// None of these reach the UI component; callers log them and move on.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The UI posted on a channel the bridge does not know.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// A channel payload did not decode to its declared shape.
    #[error("bad payload on {channel}: {source}")]
    BadPayload {
        channel: &'static str,
        source: serde_json::Error,
    },

    /// The stored level payload exists but is not valid JSON.
    #[error("stored level data is not valid JSON: {0}")]
    CorruptLevelData(serde_json::Error),

    /// The remote request never completed (network down, CORS, aborted page).
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The remote endpoint answered, but not with 200.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The mount selector matched nothing in the document.
    #[error("mount element not found: {0}")]
    MountNotFound(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
