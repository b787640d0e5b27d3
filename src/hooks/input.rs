// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook stdin payload.

use crate::error::{AutoTagError, InputError, Result};
use serde::Deserialize;
use std::io::Read;

/// The JSON document the host writes to stdin.
///
/// Only `session_id` is used, and only for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
    pub cwd: Option<String>,
    pub hook_event_name: Option<String>,
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: serde_json::Value,
}

impl HookInput {
    /// Session id for log lines.
    pub fn session(&self) -> &str {
        self.session_id.as_deref().unwrap_or("unknown")
    }
}

/// Parse the hook payload from a string.
pub fn parse_input(raw: &str) -> Result<HookInput> {
    if raw.trim().is_empty() {
        return Err(AutoTagError::Input(InputError::Empty));
    }

    let input: HookInput = serde_json::from_str(raw).map_err(|e| {
        AutoTagError::Input(InputError::ParseFailed {
            message: e.to_string(),
        })
    })?;

    tracing::debug!("Received input for session: {}", input.session());
    Ok(input)
}

/// Read and parse the hook payload from a reader (normally stdin).
pub fn read_input(mut reader: impl Read) -> Result<HookInput> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).map_err(|e| {
        AutoTagError::Input(InputError::ReadFailed {
            message: e.to_string(),
        })
    })?;
    parse_input(&raw)
}
