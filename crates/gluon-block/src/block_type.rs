//! The hook interface implemented by every block type.

use gluon_core::{BlockError, BlockId, BlockKind, OptionMap};

use crate::factory::BlockFactory;
use crate::tree::BlockTree;
use crate::view::BlockView;

/// Behaviour attached to a [`BlockKind`].
///
/// The factory drives the hooks in a fixed order:
///
/// 1. [`configure_options`](Self::configure_options) when the block is created
/// 2. [`build`](Self::build) right after, to synthesize initial children
/// 3. [`check_parent`](Self::check_parent) when the block is attached, before insertion
/// 4. [`on_child_attached`](Self::on_child_attached) on the parent, after insertion
/// 5. [`assemble_view`](Self::assemble_view) before child views are built
/// 6. [`finalize_view`](Self::finalize_view) after child views are built
///
/// Every hook receives the block's resolved options.
pub trait BlockType {
    /// The kind this type handles.
    fn kind(&self) -> BlockKind;

    /// Validate raw options and fill in defaults.
    fn configure_options(&self, _name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        Ok(options.clone())
    }

    fn build(
        &self,
        _factory: &mut BlockFactory,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        Ok(())
    }

    fn check_parent(
        &self,
        _tree: &BlockTree,
        _parent: BlockId,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        Ok(())
    }

    fn on_child_attached(
        &self,
        _factory: &mut BlockFactory,
        _child: BlockId,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        Ok(())
    }

    fn assemble_view(
        &self,
        _view: &mut BlockView,
        _tree: &BlockTree,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        Ok(())
    }

    fn finalize_view(
        &self,
        _view: &mut BlockView,
        _tree: &BlockTree,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        Ok(())
    }
}

/// Passthrough type for [`BlockKind::Other`]: accepts any options and has no hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericType;

impl BlockType for GenericType {
    fn kind(&self) -> BlockKind {
        BlockKind::Other
    }
}
