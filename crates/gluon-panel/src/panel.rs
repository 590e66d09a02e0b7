//! Panel container.

use gluon_block::BlockType;
use gluon_core::{resolve_map, BlockError, BlockKind, OptionMap};

use crate::options::ContainerOptions;

/// The container sections attach to.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelType;

impl BlockType for PanelType {
    fn kind(&self) -> BlockKind {
        BlockKind::Panel
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        resolve_map::<ContainerOptions>(name, options)
    }
}
