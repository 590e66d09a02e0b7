//! Registry mapping block kinds to their types.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use gluon_core::BlockKind;

use crate::block_type::BlockType;

/// A registry of block types, one per kind.
#[derive(Clone, Default)]
pub struct BlockTypeRegistry {
    types: HashMap<BlockKind, Rc<dyn BlockType>>,
}

impl BlockTypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register a block type, replacing any type already bound to its kind.
    pub fn register<T: BlockType + 'static>(&mut self, block_type: T) {
        self.types.insert(block_type.kind(), Rc::new(block_type));
    }

    /// Get the type for a kind.
    pub fn get(&self, kind: BlockKind) -> Option<Rc<dyn BlockType>> {
        self.types.get(&kind).cloned()
    }

    /// Check if a kind has a type.
    pub fn contains(&self, kind: BlockKind) -> bool {
        self.types.contains_key(&kind)
    }

    /// Get all registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = BlockKind> + '_ {
        self.types.keys().copied()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for BlockTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockTypeRegistry")
            .field("kinds", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_type::GenericType;

    #[test]
    fn test_registry_new() {
        let registry = BlockTypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(BlockKind::Other).is_none());
    }

    #[test]
    fn test_registry_register() {
        let mut registry = BlockTypeRegistry::new();
        registry.register(GenericType);
        assert!(registry.contains(BlockKind::Other));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(BlockKind::Other).map(|t| t.kind()), Some(BlockKind::Other));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = BlockTypeRegistry::new();
        registry.register(GenericType);
        registry.register(GenericType);
        assert_eq!(registry.kinds().count(), 1);
    }
}
