//! Concept approval status. A single global value stored as a raw string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::design::UnknownOption;
use crate::error::Result;
use crate::keys;
use crate::view_model::ViewModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved,
    #[serde(rename = "Revision Requested")]
    RevisionRequested,
}

impl ApprovalState {
    pub fn label(self) -> &'static str {
        match self {
            ApprovalState::Pending => "Pending",
            ApprovalState::Approved => "Approved",
            ApprovalState::RevisionRequested => "Revision Requested",
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApprovalState {
    type Err = UnknownOption;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ApprovalState::Pending),
            "Approved" => Ok(ApprovalState::Approved),
            "Revision Requested" => Ok(ApprovalState::RevisionRequested),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    RequestRevision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalView {
    pub state: ApprovalState,
    pub status: &'static str,
}

/// The approval slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Approvals;

impl ViewModel for Approvals {
    type State = ApprovalState;
    type Action = ApprovalAction;
    type View = ApprovalView;

    fn key(&self) -> &'static str {
        keys::APPROVAL
    }

    fn default_state(&self) -> ApprovalState {
        ApprovalState::Pending
    }

    fn decode(&self, raw: &str) -> Option<ApprovalState> {
        raw.parse().ok()
    }

    fn encode(&self, state: &ApprovalState) -> Result<String> {
        Ok(state.label().to_string())
    }

    fn mutate(&self, _state: ApprovalState, action: ApprovalAction) -> Result<ApprovalState> {
        Ok(match action {
            ApprovalAction::Approve => ApprovalState::Approved,
            ApprovalAction::RequestRevision => ApprovalState::RevisionRequested,
        })
    }

    fn render(&self, state: &ApprovalState) -> ApprovalView {
        ApprovalView {
            state: *state,
            status: state.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::view_model::Binding;

    #[test]
    fn stored_as_raw_string() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, Approvals);
        assert_eq!(binding.current_view().status, "Pending");

        binding.dispatch(ApprovalAction::RequestRevision).unwrap();
        assert_eq!(store.get(keys::APPROVAL).as_deref(), Some("Revision Requested"));

        binding.dispatch(ApprovalAction::Approve).unwrap();
        assert_eq!(binding.load(), ApprovalState::Approved);
    }

    #[test]
    fn unknown_raw_value_loads_pending() {
        let store = MemoryStore::new();
        store.set(keys::APPROVAL, "\"Approved\"").unwrap();
        assert_eq!(Binding::new(&store, Approvals).load(), ApprovalState::Pending);
    }
}
