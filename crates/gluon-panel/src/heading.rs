//! Heading block type.

use gluon_block::{BlockTree, BlockType, BlockView};
use gluon_core::{invalid_option, resolve, to_option_map, BlockError, BlockId, BlockKind, OptionMap};

use crate::options::HeadingOptions;

/// Title block, levels 1 to 6.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingType;

impl BlockType for HeadingType {
    fn kind(&self) -> BlockKind {
        BlockKind::Heading
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        let options: HeadingOptions = resolve(name, options)?;
        if !(1..=6).contains(&options.size) {
            return Err(invalid_option(
                name,
                format!("heading size must be between 1 and 6, got {}", options.size),
            ));
        }
        to_option_map(name, &options)
    }

    fn assemble_view(
        &self,
        view: &mut BlockView,
        tree: &BlockTree,
        block: BlockId,
        options: &OptionMap,
    ) -> Result<(), BlockError> {
        let options: HeadingOptions = resolve(&tree.require(block)?.name, options)?;
        view.set_var("size", options.size);
        view.set_var("label", options.label);
        Ok(())
    }
}
