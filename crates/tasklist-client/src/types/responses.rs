/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - non-entity response bodies
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
