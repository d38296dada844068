//! Response models returned by the restmail API.

use serde::Deserialize;
use std::collections::HashMap;

/// One delivered email, as echoed back by the restmail service.
///
/// Messages carry no identity beyond their position in the mailbox; the
/// service returns them in delivery order (oldest first) and this client
/// does not reorder them.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Plain-text body exactly as delivered, including the trailing
    /// newline from the wire format.
    #[serde(default)]
    pub text: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Mail headers keyed by lower-cased name. Values keep whatever JSON
    /// shape the service echoed (string, array, nested object), since raw
    /// mail headers are not uniformly structured.
    #[serde(default)]
    pub headers: HashMap<String, serde_json::Value>,
}
