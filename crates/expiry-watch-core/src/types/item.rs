//! Expired item type

use serde::{Deserialize, Serialize};

/// An item whose expiration time has passed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpiredItem {
    /// Expiration time the item was registered with (Unix seconds)
    pub expiration_time_seconds: i64,
    /// Caller-supplied identifier
    pub id: String,
}

impl ExpiredItem {
    /// Create a new expired item
    pub fn new(expiration_time_seconds: i64, id: impl Into<String>) -> Self {
        Self {
            expiration_time_seconds,
            id: id.into(),
        }
    }
}

/// Items produced by a single prune pass
pub type ExpiredBatch = Vec<ExpiredItem>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let item = ExpiredItem::new(1_700_000_000, "0xabc");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["expiration_time_seconds"], 1_700_000_000i64);
        assert_eq!(json["id"], "0xabc");
    }
}
