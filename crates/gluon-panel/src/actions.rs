//! Actions groups and their buttons.

use gluon_block::{BlockTree, BlockType, BlockView};
use gluon_core::{resolve, resolve_map, BlockError, BlockId, BlockKind, OptionMap};

use crate::options::{ButtonOptions, ContainerOptions};
use crate::section::COLLAPSE_BUTTON_NAME;

/// View slot marking an actions group that carries a collapse toggle.
pub const COLLAPSE_SLOT: &str = "panel_button_collapse";

/// Group of action buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelActionsType;

impl BlockType for PanelActionsType {
    fn kind(&self) -> BlockKind {
        BlockKind::Actions
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        resolve_map::<ContainerOptions>(name, options)
    }

    fn finalize_view(
        &self,
        view: &mut BlockView,
        _tree: &BlockTree,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        // The toggle is drawn apart from the other buttons.
        if let Some(button) = view.children.shift_remove(COLLAPSE_BUTTON_NAME) {
            view.slots.insert(COLLAPSE_SLOT.to_string(), button);
        }
        Ok(())
    }
}

/// Action button.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonType;

impl BlockType for ButtonType {
    fn kind(&self) -> BlockKind {
        BlockKind::Button
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        resolve_map::<ButtonOptions>(name, options)
    }

    fn assemble_view(
        &self,
        view: &mut BlockView,
        tree: &BlockTree,
        block: BlockId,
        options: &OptionMap,
    ) -> Result<(), BlockError> {
        let options: ButtonOptions = resolve(&tree.require(block)?.name, options)?;
        view.set_var("label", options.label);
        view.set_var("style", options.style);
        view.set_var("prepend", options.prepend);
        Ok(())
    }
}
