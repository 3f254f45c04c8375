/// Channel names and payload shapes.
/// Must stay in sync with the UI component's port declarations.
use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};
use crate::gamepad::GamepadSnapshot;

/// UI→host: persist or upload a serialized level payload.
pub const WRITE_LEVEL_DATA: &str = "writeLevelData";
/// UI→host: request the saved level payload.
pub const FETCH_LEVEL_DATA: &str = "fetchLevelData";
/// UI→host: request a one-shot gamepad snapshot.
pub const GET_GAMEPAD_STATE: &str = "getGamePadState";
/// Host→UI: decoded level payload, or null when none exists.
pub const RECEIVE_LEVEL_DATA: &str = "receiveLevelData";
/// Host→UI: gamepad snapshot.
pub const RECEIVE_GAMEPAD_STATE: &str = "receiveGamePadState";

/// A request posted by the UI component on one of its outbound channels.
#[derive(Debug, Clone, PartialEq)]
pub enum UiRequest {
    /// Serialized level data, passed through uninterpreted.
    WriteLevelData { payload: String },
    /// Level number. Accepted for shape stability; storage is single-slot.
    FetchLevelData { level: u32 },
    /// Player slot to poll.
    GetGamePadState { slot: usize },
}

impl UiRequest {
    /// Channel this request arrives on.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::WriteLevelData { .. } => WRITE_LEVEL_DATA,
            Self::FetchLevelData { .. } => FETCH_LEVEL_DATA,
            Self::GetGamePadState { .. } => GET_GAMEPAD_STATE,
        }
    }

    /// Decode a raw (channel, payload) pair from the UI side.
    ///
    /// `writeLevelData` is deliberately not parsed; the payload is the value.
    /// The numeric channels carry a bare JSON number.
    pub fn decode(channel: &str, payload: &str) -> BridgeResult<Self> {
        match channel {
            WRITE_LEVEL_DATA => Ok(Self::WriteLevelData {
                payload: payload.to_string(),
            }),
            FETCH_LEVEL_DATA => {
                let level = serde_json::from_str(payload).map_err(|source| {
                    BridgeError::BadPayload {
                        channel: FETCH_LEVEL_DATA,
                        source,
                    }
                })?;
                Ok(Self::FetchLevelData { level })
            }
            GET_GAMEPAD_STATE => {
                let slot = serde_json::from_str(payload).map_err(|source| {
                    BridgeError::BadPayload {
                        channel: GET_GAMEPAD_STATE,
                        source,
                    }
                })?;
                Ok(Self::GetGamePadState { slot })
            }
            other => Err(BridgeError::UnknownChannel(other.to_string())),
        }
    }
}

/// A response the host sends back on one of the UI's inbound channels.
#[derive(Debug, Clone, PartialEq)]
pub enum HostReply {
    /// Decoded level data, or `None` when no save exists (sent as null).
    ReceiveLevelData(Option<Value>),
    ReceiveGamePadState(GamepadSnapshot),
}

impl HostReply {
    /// Channel this reply goes out on.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::ReceiveLevelData(_) => RECEIVE_LEVEL_DATA,
            Self::ReceiveGamePadState(_) => RECEIVE_GAMEPAD_STATE,
        }
    }

    /// Wire payload for the UI side.
    pub fn payload(&self) -> Value {
        match self {
            Self::ReceiveLevelData(Some(value)) => value.clone(),
            Self::ReceiveLevelData(None) => Value::Null,
            Self::ReceiveGamePadState(snapshot) => {
                serde_json::to_value(snapshot).unwrap_or(Value::Null)
            }
        }
    }
}
