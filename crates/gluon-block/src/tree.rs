//! Block tree data structures.
//!
//! Blocks live in an arena keyed by [`BlockId`]. Parents keep their children
//! as an ordered name → id map; children hold no back-references, so every
//! hook that needs the parent receives it explicitly.

use std::collections::HashMap;

use gluon_core::{BlockError, BlockId, BlockKind, OptionMap};
use indexmap::IndexMap;
use serde_json::Value;

/// Cross-hook memory kept by a panel section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionState {
    /// Row that receives the next cell while it has capacity
    pub last_row: Option<BlockId>,
    /// Actions group currently owned by the section
    pub actions_group: Option<BlockId>,
}

/// A node in the block tree.
#[derive(Debug, Clone)]
pub struct Block {
    /// Unique ID for this block
    pub id: BlockId,
    /// Name, unique among its parent's children
    pub name: String,
    /// Block kind
    pub kind: BlockKind,
    /// Resolved options
    pub options: OptionMap,
    /// Scalar value, or null
    pub value: Value,
    /// Children in insertion order
    pub children: IndexMap<String, BlockId>,
    /// Section bookkeeping (unused by other kinds)
    pub section: SectionState,
}

impl Block {
    /// Create a new block without options or children.
    pub fn new(id: BlockId, name: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            options: OptionMap::new(),
            value: Value::Null,
            children: IndexMap::new(),
            section: SectionState::default(),
        }
    }

    /// Set the options.
    pub fn with_options(mut self, options: OptionMap) -> Self {
        self.options = options;
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the block has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if a direct child with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Get an option, treating `null` as absent.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key).filter(|v| !v.is_null())
    }
}

/// Arena owning every block of a build.
#[derive(Debug, Clone, Default)]
pub struct BlockTree {
    /// All blocks, indexed by ID
    nodes: HashMap<BlockId, Block>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl BlockTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique block ID.
    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a detached block.
    pub fn insert(&mut self, block: Block) -> BlockId {
        let id = block.id;
        self.nodes.insert(id, block);
        id
    }

    /// Get a block by ID.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.nodes.get(&id)
    }

    /// Get a block, failing if it does not exist.
    pub fn require(&self, id: BlockId) -> Result<&Block, BlockError> {
        self.nodes.get(&id).ok_or(BlockError::UnknownBlock(id))
    }

    /// Get a mutable block, failing if it does not exist.
    pub fn require_mut(&mut self, id: BlockId) -> Result<&mut Block, BlockError> {
        self.nodes.get_mut(&id).ok_or(BlockError::UnknownBlock(id))
    }

    /// Check if a block exists.
    pub fn contains(&self, id: BlockId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live blocks.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a direct child by name.
    pub fn child(&self, parent: BlockId, name: &str) -> Option<BlockId> {
        self.nodes.get(&parent)?.children.get(name).copied()
    }

    /// Iterate over the children of a block, in order.
    pub fn children(&self, id: BlockId) -> impl Iterator<Item = &Block> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|b| b.children.values())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: BlockId, child: BlockId) -> Result<(), BlockError> {
        let name = self.require(child)?.name.clone();
        let parent_block = self.require_mut(parent)?;
        if parent_block.children.contains_key(&name) {
            return Err(BlockError::DuplicateChild {
                parent: parent_block.name.clone(),
                name,
            });
        }
        parent_block.children.insert(name, child);
        Ok(())
    }

    /// Unlink a child from its parent, keeping it alive in the arena.
    pub fn detach_child(&mut self, parent: BlockId, name: &str) -> Option<BlockId> {
        self.nodes.get_mut(&parent)?.children.shift_remove(name)
    }

    /// Unlink a child and discard it together with its descendants.
    pub fn remove_child(&mut self, parent: BlockId, name: &str) -> Option<Block> {
        let id = self.detach_child(parent, name)?;
        self.remove_subtree(id)
    }

    /// Discard a block and all of its descendants.
    pub fn remove_subtree(&mut self, id: BlockId) -> Option<Block> {
        let root = self.nodes.remove(&id)?;
        let mut stack: Vec<BlockId> = root.children.values().copied().collect();
        while let Some(next) = stack.pop() {
            if let Some(block) = self.nodes.remove(&next) {
                stack.extend(block.children.values().copied());
            }
        }
        Some(root)
    }

    /// Move the last `count` children of `parent` to the front, keeping
    /// their relative order.
    pub fn rotate_children(&mut self, parent: BlockId, count: usize) -> Result<(), BlockError> {
        let block = self.require_mut(parent)?;
        let count = count.min(block.children.len());
        if count == 0 {
            return Ok(());
        }
        let mut entries: Vec<(String, BlockId)> = block.children.drain(..).collect();
        entries.rotate_right(count);
        block.children = entries.into_iter().collect();
        Ok(())
    }

    /// Overwrite the given options of a block, leaving the others intact.
    pub fn merge_options(&mut self, id: BlockId, options: OptionMap) -> Result<(), BlockError> {
        let block = self.require_mut(id)?;
        for (key, value) in options {
            block.options.insert(key, value);
        }
        Ok(())
    }
}
