/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - task entity as owned by the remote service
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// A task record as stored by the remote service.
///
/// The client only ever holds transient copies; `id` is assigned server-side
/// and may be absent in payloads that predate persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
