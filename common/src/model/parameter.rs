use serde::{Deserialize, Serialize};

/// A named scalar reading shown on the current-readings page.
///
/// Parameters are independent of samples: they have no validation workflow
/// and are replaced wholesale when an administrator saves a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub updated_at: String,
}
