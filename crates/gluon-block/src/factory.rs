//! Tree construction driver.
//!
//! The factory owns the tree and runs the block type hooks:
//! 1. Creating a block resolves its options and runs `build`
//! 2. Attaching a child checks its parent, inserts it, then notifies the parent;
//!    a refused child is unlinked again
//! 3. Building a view assembles the block, then its children, then finalizes it

use std::rc::Rc;

use gluon_core::{BlockError, BlockId, BlockKind, OptionMap};
use serde_json::Value;
use tracing::{debug, trace};

use crate::block_type::BlockType;
use crate::names::NameGenerator;
use crate::registry::BlockTypeRegistry;
use crate::tree::{Block, BlockTree};
use crate::view::BlockView;

/// Builds block trees and their views.
#[derive(Debug, Default)]
pub struct BlockFactory {
    registry: BlockTypeRegistry,
    tree: BlockTree,
    names: NameGenerator,
}

impl BlockFactory {
    /// Create a factory over an empty tree.
    pub fn new(registry: BlockTypeRegistry) -> Self {
        Self {
            registry,
            tree: BlockTree::new(),
            names: NameGenerator::new(),
        }
    }

    pub fn tree(&self) -> &BlockTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut BlockTree {
        &mut self.tree
    }

    fn block_type(&self, kind: BlockKind) -> Result<Rc<dyn BlockType>, BlockError> {
        self.registry
            .get(kind)
            .ok_or_else(|| BlockError::UnregisteredType {
                kind: kind.to_string(),
            })
    }

    /// Create a detached block and run its `build` hook.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        kind: BlockKind,
        options: OptionMap,
    ) -> Result<BlockId, BlockError> {
        let name = name.into();
        let block_type = self.block_type(kind)?;
        let resolved = block_type.configure_options(&name, &options)?;

        let id = self.tree.next_id();
        trace!(block = %name, %kind, %id, "creating block");
        self.tree.insert(Block::new(id, name, kind).with_options(resolved.clone()));

        block_type.build(self, id, &resolved)?;
        Ok(id)
    }

    /// Create a block and attach it to `parent`.
    pub fn add(
        &mut self,
        parent: BlockId,
        name: impl Into<String>,
        kind: BlockKind,
        options: OptionMap,
    ) -> Result<BlockId, BlockError> {
        let child = self.create(name, kind, options)?;
        if let Err(err) = self.attach(parent, child) {
            self.tree.remove_subtree(child);
            return Err(err);
        }
        Ok(child)
    }

    /// Create a block under a generated name and attach it to `parent`.
    pub fn add_unique(
        &mut self,
        parent: BlockId,
        kind: BlockKind,
        options: OptionMap,
    ) -> Result<BlockId, BlockError> {
        let name = self.names.generate(self.tree.require(parent)?, kind.prefix());
        self.add(parent, name, kind, options)
    }

    /// Attach an existing block to `parent`.
    ///
    /// The child's type may veto the parent before anything changes. Once
    /// inserted, the parent's type is told about the new child; if it
    /// refuses, the child is unlinked again and left detached.
    pub fn attach(&mut self, parent: BlockId, child: BlockId) -> Result<(), BlockError> {
        let (name, child_kind, child_options) = {
            let block = self.tree.require(child)?;
            (block.name.clone(), block.kind, block.options.clone())
        };
        let (parent_kind, parent_options) = {
            let block = self.tree.require(parent)?;
            (block.kind, block.options.clone())
        };

        self.block_type(child_kind)?
            .check_parent(&self.tree, parent, child, &child_options)?;
        self.tree.add_child(parent, child)?;
        debug!(%parent, %child, %parent_kind, %child_kind, "attached block");

        let result = self
            .block_type(parent_kind)?
            .on_child_attached(self, child, parent, &parent_options);
        if result.is_err() && self.tree.child(parent, &name) == Some(child) {
            self.tree.detach_child(parent, &name);
        }
        result
    }

    /// Set the value of a block.
    pub fn set_value(&mut self, id: BlockId, value: impl Into<Value>) -> Result<(), BlockError> {
        self.tree.require_mut(id)?.value = value.into();
        Ok(())
    }

    /// Build the view of a block and its descendants.
    pub fn view(&self, id: BlockId) -> Result<BlockView, BlockError> {
        let block = self.tree.require(id)?;
        let block_type = self.block_type(block.kind)?;

        let mut view = BlockView::new(block.name.clone(), block.kind);
        view.set_rendered(
            block
                .option("rendered")
                .and_then(Value::as_bool)
                .unwrap_or(true),
        );
        view.set_value(block.value.clone());
        view.set_var(
            "attr",
            block
                .option("attr")
                .cloned()
                .unwrap_or_else(|| Value::Object(OptionMap::new())),
        );

        block_type.assemble_view(&mut view, &self.tree, id, &block.options)?;

        for &child in block.children.values() {
            let child_view = self.view(child)?;
            view.children.insert(child_view.name.clone(), child_view);
        }
        trace!(block = %block.name, children = view.children.len(), "assembled view");

        block_type.finalize_view(&mut view, &self.tree, id, &block.options)?;
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_type::GenericType;
    use gluon_core::ConfigurationError;

    /// Only accepts parents named "home".
    struct Picky;

    impl BlockType for Picky {
        fn kind(&self) -> BlockKind {
            BlockKind::Cell
        }

        fn check_parent(
            &self,
            tree: &BlockTree,
            parent: BlockId,
            block: BlockId,
            _options: &OptionMap,
        ) -> Result<(), BlockError> {
            let parent = tree.require(parent)?;
            if parent.name == "home" {
                return Ok(());
            }
            Err(ConfigurationError::InvalidParent {
                section: tree.require(block)?.name.clone(),
                parent: parent.name.clone(),
            }
            .into())
        }
    }

    /// Refuses every child once it has been inserted.
    struct Sealed;

    impl BlockType for Sealed {
        fn kind(&self) -> BlockKind {
            BlockKind::Panel
        }

        fn on_child_attached(
            &self,
            factory: &mut BlockFactory,
            _child: BlockId,
            block: BlockId,
            _options: &OptionMap,
        ) -> Result<(), BlockError> {
            Err(ConfigurationError::DuplicateHeading {
                section: factory.tree().require(block)?.name.clone(),
            }
            .into())
        }
    }

    fn factory() -> BlockFactory {
        let mut registry = BlockTypeRegistry::new();
        registry.register(GenericType);
        registry.register(Picky);
        registry.register(Sealed);
        BlockFactory::new(registry)
    }

    #[test]
    fn test_add_and_view() {
        let mut factory = factory();
        let root = factory.create("home", BlockKind::Other, OptionMap::new()).unwrap();
        let child = factory.add(root, "c", BlockKind::Cell, OptionMap::new()).unwrap();
        factory.set_value(child, "hello").unwrap();

        let view = factory.view(root).unwrap();
        assert!(view.rendered());
        assert_eq!(view.value(), &Value::Null);
        assert_eq!(view.children["c"].value(), &Value::from("hello"));
    }

    #[test]
    fn test_rejected_parent_leaves_tree_untouched() {
        let mut factory = factory();
        let root = factory.create("away", BlockKind::Other, OptionMap::new()).unwrap();
        let err = factory.add(root, "c", BlockKind::Cell, OptionMap::new()).unwrap_err();
        assert!(matches!(err, BlockError::InvalidConfiguration(_)));
        assert!(factory.tree().require(root).unwrap().is_empty());
    }

    #[test]
    fn test_refused_child_is_unlinked() {
        let mut factory = factory();
        let sealed = factory.create("sealed", BlockKind::Panel, OptionMap::new()).unwrap();
        let child = factory.create("c", BlockKind::Other, OptionMap::new()).unwrap();

        assert!(factory.attach(sealed, child).is_err());
        assert!(factory.tree().require(sealed).unwrap().is_empty());
        assert!(factory.tree().contains(child));
    }

    #[test]
    fn test_refused_add_discards_block() {
        let mut factory = factory();
        let sealed = factory.create("sealed", BlockKind::Panel, OptionMap::new()).unwrap();
        let before = factory.tree().len();

        assert!(factory.add(sealed, "c", BlockKind::Other, OptionMap::new()).is_err());
        assert!(factory.tree().require(sealed).unwrap().is_empty());
        assert_eq!(factory.tree().len(), before);
    }

    #[test]
    fn test_unregistered_type() {
        let mut factory = factory();
        let err = factory.create("p", BlockKind::Panel, OptionMap::new()).unwrap_err();
        assert!(matches!(err, BlockError::UnregisteredType { ref kind } if kind == "panel"));
    }

    #[test]
    fn test_add_unique_names() {
        let mut factory = factory();
        let root = factory.create("root", BlockKind::Other, OptionMap::new()).unwrap();
        let a = factory.add_unique(root, BlockKind::Other, OptionMap::new()).unwrap();
        let b = factory.add_unique(root, BlockKind::Other, OptionMap::new()).unwrap();
        let tree = factory.tree();
        assert_ne!(tree.get(a).unwrap().name, tree.get(b).unwrap().name);
        assert_eq!(tree.get(root).unwrap().len(), 2);
    }

    #[test]
    fn test_view_reads_rendered_option() {
        let mut factory = factory();
        let mut options = OptionMap::new();
        options.insert("rendered".into(), Value::Bool(false));
        let root = factory.create("root", BlockKind::Other, options).unwrap();
        assert!(!factory.view(root).unwrap().rendered());
    }
}
