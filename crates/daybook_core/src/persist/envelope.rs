//! JSON state envelope shared by all persisted stores.

use super::PersistResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const NAMESPACE_PREFIX: &str = "daybook";

/// Wrapper written to storage around a store's full state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEnvelope<S> {
    pub state: S,
}

/// Storage key for a store name, e.g. `daybook-tasks`.
pub fn namespace_key(store: &str) -> String {
    format!("{NAMESPACE_PREFIX}-{store}")
}

pub fn encode_state<S: Serialize>(state: &S) -> PersistResult<String> {
    Ok(serde_json::to_string(&StateEnvelope { state })?)
}

pub fn decode_state<S: DeserializeOwned>(payload: &str) -> PersistResult<S> {
    let envelope: StateEnvelope<S> = serde_json::from_str(payload)?;
    Ok(envelope.state)
}
