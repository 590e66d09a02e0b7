//! Rows, spacer rows and cells.

use gluon_block::{BlockTree, BlockType, BlockView};
use gluon_core::{resolve, resolve_map, BlockError, BlockId, BlockKind, OptionMap};

use crate::options::{CellOptions, RowOptions};

/// Row of cells; with `spacer` set, a spacer row.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelRowType {
    spacer: bool,
}

impl PanelRowType {
    pub fn new() -> Self {
        Self { spacer: false }
    }

    /// A row that only adds vertical space and never receives cells.
    pub fn spacer() -> Self {
        Self { spacer: true }
    }
}

impl BlockType for PanelRowType {
    fn kind(&self) -> BlockKind {
        if self.spacer {
            BlockKind::Spacer
        } else {
            BlockKind::Row
        }
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        resolve_map::<RowOptions>(name, options)
    }

    fn assemble_view(
        &self,
        view: &mut BlockView,
        tree: &BlockTree,
        block: BlockId,
        options: &OptionMap,
    ) -> Result<(), BlockError> {
        let options: RowOptions = resolve(&tree.require(block)?.name, options)?;
        view.set_var("column", options.column);
        view.set_var("layout_max", options.layout_max);
        view.set_var("layout_size", options.layout_size);
        view.set_var("layout_style", options.layout_style);
        view.set_var("cell_label_style", options.cell_label_style);
        Ok(())
    }
}

/// Leaf content block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelCellType;

impl BlockType for PanelCellType {
    fn kind(&self) -> BlockKind {
        BlockKind::Cell
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        resolve_map::<CellOptions>(name, options)
    }

    fn assemble_view(
        &self,
        view: &mut BlockView,
        tree: &BlockTree,
        block: BlockId,
        options: &OptionMap,
    ) -> Result<(), BlockError> {
        let options: CellOptions = resolve(&tree.require(block)?.name, options)?;
        view.set_var("label", options.label);
        Ok(())
    }
}
