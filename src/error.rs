use thiserror::Error;

/// Rejected store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("unknown checklist item: {0}")]
    UnknownItemId(String),

    #[error("evidence index {index} out of range for item {item_id} ({len} attached)")]
    IndexOutOfRange {
        item_id: String,
        index: usize,
        len: usize,
    },

    #[error("evidence limit exceeded for item {item_id}: {reason}")]
    EvidenceLimitExceeded { item_id: String, reason: String },
}

/// Problems found while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog has no checklist items")]
    Empty,

    #[error("category #{0} has an empty name")]
    EmptyCategoryName(usize),

    #[error("category {0} contains an item with an empty id")]
    EmptyItemId(String),

    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),

    #[error("duplicate item id {id} (categories {first} and {second})")]
    DuplicateItemId {
        id: String,
        first: String,
        second: String,
    },

    #[error("failed to parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}
