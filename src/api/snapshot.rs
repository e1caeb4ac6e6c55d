use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

use super::prefs::PreferenceStore;
use super::{DashboardEngine, SessionState};

pub const SESSION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire form of a session snapshot. Hosts that persist sessions
/// should write this envelope; the reader also accepts a bare
/// [`SessionState`] object for payloads predating the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub session: SessionState,
}

impl SessionState {
    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = SessionSnapshotJsonContractV1 {
            schema_version: SESSION_SNAPSHOT_JSON_SCHEMA_V1,
            session: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize session contract v1: {e}"))
        })
    }

    /// Reads a session from either wire form.
    ///
    /// The envelope is tried first: every field of a bare session is
    /// defaulted, so an enveloped payload would otherwise parse as an empty
    /// bare session and lose its content.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(payload) = serde_json::from_str::<SessionSnapshotJsonContractV1>(input) {
            if payload.schema_version != SESSION_SNAPSHOT_JSON_SCHEMA_V1 {
                return Err(DashboardError::InvalidData(format!(
                    "unsupported session schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.session);
        }
        serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse session json payload: {e}"))
        })
    }
}

impl<P: PreferenceStore> DashboardEngine<P> {
    pub fn session_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        self.session.to_json_contract_v1_pretty()
    }

    /// Replaces the whole session in one step, for restoring a persisted
    /// snapshot. The restored theme is written through to preferences so the
    /// next session start agrees with it. Entities named by the snapshot are
    /// not checked against the dataset; stale ids simply yield empty views.
    pub fn restore_session(&mut self, session: SessionState) {
        debug!(
            entity = session.selected_entity.as_deref().unwrap_or("<none>"),
            compare_mode = session.compare_mode,
            comparison = session.comparison.len(),
            "restore session"
        );
        session.theme.persist(&mut self.prefs);
        self.session = session;
    }

    pub fn restore_session_json(&mut self, input: &str) -> DashboardResult<()> {
        let session = SessionState::from_json_compat_str(input)?;
        self.restore_session(session);
        Ok(())
    }
}
