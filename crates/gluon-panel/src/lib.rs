//! Panel block types for Gluon.
//!
//! A panel holds sections; a section holds a heading, an actions group and
//! rows of cells. Cells added straight to a section are packed into rows of
//! at most `column` cells.
//!
//! # Example
//!
//! ```ignore
//! use gluon_panel::panel_factory;
//!
//! let mut factory = panel_factory();
//! let panel = factory.create("panel", BlockKind::Panel, OptionMap::new())?;
//! let section = factory.add(panel, "details", BlockKind::Section, options)?;
//! factory.add(section, "email", BlockKind::Cell, OptionMap::new())?;
//!
//! let view = factory.view(panel)?;
//! ```

mod actions;
mod heading;
mod options;
mod panel;
mod row;
mod section;

pub use actions::{ButtonType, PanelActionsType, COLLAPSE_SLOT};
pub use heading::HeadingType;
pub use options::{
    ButtonOptions, CellOptions, ContainerOptions, HeadingOptions, RowOptions, SectionOptions,
};
pub use panel::PanelType;
pub use row::{PanelCellType, PanelRowType};
pub use section::{
    derived_row_options, PanelSectionType, ACTIONS_NAME, ACTIONS_SLOT, COLLAPSE_BUTTON_NAME,
    HEADING_NAME, HEADING_SLOT,
};

use gluon_block::{BlockFactory, BlockTypeRegistry, GenericType};

/// Register every panel block type, plus the passthrough type for other blocks.
pub fn register_panel_types(registry: &mut BlockTypeRegistry) {
    registry.register(PanelType);
    registry.register(PanelSectionType);
    registry.register(HeadingType);
    registry.register(PanelActionsType);
    registry.register(ButtonType);
    registry.register(PanelRowType::new());
    registry.register(PanelRowType::spacer());
    registry.register(PanelCellType);
    registry.register(GenericType);
}

/// A factory with all panel block types registered.
pub fn panel_factory() -> BlockFactory {
    let mut registry = BlockTypeRegistry::new();
    register_panel_types(&mut registry);
    BlockFactory::new(registry)
}
