//! Block tree framework for Gluon.
//!
//! This crate provides the generic machinery block types plug into:
//! - An arena of blocks addressed by [`BlockId`](gluon_core::BlockId)
//! - The [`BlockType`] hook trait and a registry of types
//! - The [`BlockFactory`] that creates, attaches and views blocks
//!
//! # Example
//!
//! ```ignore
//! use gluon_block::{BlockFactory, BlockTypeRegistry, GenericType};
//!
//! let mut registry = BlockTypeRegistry::new();
//! registry.register(GenericType);
//!
//! let mut factory = BlockFactory::new(registry);
//! let root = factory.create("root", BlockKind::Other, OptionMap::new())?;
//! let view = factory.view(root)?;
//! ```

mod block_type;
mod factory;
mod names;
mod registry;
mod tree;
mod view;

pub use block_type::{BlockType, GenericType};
pub use factory::BlockFactory;
pub use names::NameGenerator;
pub use registry::BlockTypeRegistry;
pub use tree::{Block, BlockTree, SectionState};
pub use view::BlockView;
