//! Messages crossing the widget/host boundary.
//!
//! Every frame is a JSON object tagged by `type`. Unknown types and
//! malformed frames are rejected here, before they reach widget or host state.
//! A `render` whose payload does not decode is an empty render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use checklist_core::model::PrincipleSnapshot;

pub const API_VERSION: u32 = 1;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported api version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    #[serde(rename = "json")]
    Json,
}

/// Widget to host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WidgetMessage {
    ComponentReady {
        #[serde(rename = "apiVersion")]
        api_version: u32,
    },
    SetFrameHeight {
        height: u32,
    },
    SetComponentValue {
        value: usize,
        #[serde(rename = "dataType", default)]
        data_type: DataType,
    },
}

impl WidgetMessage {
    #[must_use]
    pub fn ready() -> Self {
        Self::ComponentReady {
            api_version: API_VERSION,
        }
    }

    #[must_use]
    pub fn select(index: usize) -> Self {
        Self::SetComponentValue {
            value: index,
            data_type: DataType::Json,
        }
    }
}

/// Host to widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// A missing or `null` `args` renders nothing.
    Render {
        #[serde(default)]
        args: Option<RenderArgs>,
    },
}

/// Snapshot payload of a `render` push.
///
/// `principles_data` keeps the host's key order. Values are left as raw JSON
/// so one bad entry only breaks its own card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderArgs {
    #[serde(default)]
    pub principles_names: Vec<String>,
    #[serde(default)]
    pub principles_data: Map<String, Value>,
    #[serde(default)]
    pub current_index: usize,
    /// Explicit key per name. When present, cards are paired by key instead of position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_keys: Option<Vec<String>>,
}

impl RenderArgs {
    /// Build the payload for a snapshot, keyed by principle.
    #[must_use]
    pub fn from_snapshot(snapshot: &PrincipleSnapshot) -> Self {
        let mut principles_names = Vec::with_capacity(snapshot.len());
        let mut principles_keys = Vec::with_capacity(snapshot.len());
        let mut principles_data = Map::new();

        for entry in snapshot.entries() {
            principles_names.push(entry.name.clone());
            principles_keys.push(entry.key.as_str().to_owned());
            let counts = serde_json::json!({
                "total_checks": entry.progress.total_checks,
                "answered_checks": entry.progress.answered_checks,
            });
            principles_data.insert(entry.key.as_str().to_owned(), counts);
        }

        Self {
            principles_names,
            principles_data,
            current_index: snapshot.current_index(),
            principles_keys: Some(principles_keys),
        }
    }

    #[must_use]
    pub fn render(self) -> HostMessage {
        HostMessage::Render { args: Some(self) }
    }
}

/// # Errors
///
/// Returns `ProtocolError::Malformed` for invalid JSON or an unknown `type`.
pub fn decode_host(frame: &str) -> Result<HostMessage, ProtocolError> {
    let value: Value = serde_json::from_str(frame)?;
    match HostMessage::deserialize(&value) {
        Ok(message) => Ok(message),
        Err(error) if value.get("type").and_then(Value::as_str) == Some("render") => {
            tracing::warn!(%error, "malformed render payload, rendering empty state");
            Ok(HostMessage::Render { args: None })
        }
        Err(error) => Err(error.into()),
    }
}

/// # Errors
///
/// Returns `ProtocolError::Malformed` for invalid JSON or an unknown `type`, and
/// `ProtocolError::UnsupportedVersion` for a ready handshake of another api version.
pub fn decode_widget(frame: &str) -> Result<WidgetMessage, ProtocolError> {
    let message: WidgetMessage = serde_json::from_str(frame)?;
    if let WidgetMessage::ComponentReady { api_version } = message {
        if api_version != API_VERSION {
            return Err(ProtocolError::UnsupportedVersion(api_version));
        }
    }
    Ok(message)
}

/// # Errors
///
/// Returns `ProtocolError::Malformed` if serialization fails.
pub fn encode_widget(message: &WidgetMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}

/// # Errors
///
/// Returns `ProtocolError::Malformed` if serialization fails.
pub fn encode_host(message: &HostMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}
