//! Error types for building block trees.

use crate::types::BlockId;
use thiserror::Error;

/// Top-level error type for block tree construction.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("Invalid options for block \"{block}\": {source}")]
    InvalidOptions {
        block: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Block \"{parent}\" already has a child named \"{name}\"")]
    DuplicateChild { parent: String, name: String },

    #[error("Unknown block {0}")]
    UnknownBlock(BlockId),

    #[error("No block type registered for \"{kind}\"")]
    UnregisteredType { kind: String },
}

/// Fatal layout configuration errors raised while attaching blocks.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("The \"panel_section\" parent block (name: \"{section}\") must be a \"panel\" block type, found \"{parent}\"")]
    InvalidParent { section: String, parent: String },

    #[error("The panel section block \"{section}\" has already panel section title. Removes the label option of the panel section block.")]
    DuplicateHeading { section: String },
}
