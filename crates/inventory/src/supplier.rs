use serde::{Deserialize, Serialize};

use stockbook_core::ValueObject;

/// Supplier metadata. Contact info is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub contact_info: String,
}

impl Supplier {
    pub fn new(name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }
}

impl ValueObject for Supplier {}
