//! Panel section block type.
//!
//! A section groups an optional heading, one actions group and rows of cells
//! inside a panel. While children are attached it:
//! 1. Rejects a second heading
//! 2. Merges repeated actions groups into the newest one
//! 3. Pushes its layout options down into rows
//! 4. Packs cells into rows of at most `column` cells
//!
//! When its view is finalized, the heading and actions views move into
//! dedicated slots and an empty section hides itself.

use gluon_block::{BlockFactory, BlockTree, BlockType, BlockView};
use gluon_core::{
    is_defined, is_empty_value, is_scalar, resolve, resolve_map, to_option_map, BlockError,
    BlockId, BlockKind, ConfigurationError, OptionMap,
};
use serde_json::Value;
use tracing::debug;

use crate::actions::COLLAPSE_SLOT;
use crate::options::{ButtonOptions, ContainerOptions, HeadingOptions, RowOptions, SectionOptions};

/// Name of the heading synthesized from the `label` option.
pub const HEADING_NAME: &str = "_heading";
/// Name of the actions group synthesized for collapsible sections.
pub const ACTIONS_NAME: &str = "_panel_section_actions";
/// Name of the collapse toggle inside the synthesized actions group.
pub const COLLAPSE_BUTTON_NAME: &str = "_button_collapse";

/// View slot receiving the heading.
pub const HEADING_SLOT: &str = "panel_section_heading";
/// View slot receiving the actions group.
pub const ACTIONS_SLOT: &str = "panel_section_actions";

const HEADING_CLASS: &str = "panel-section-title";

/// The panel section type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelSectionType;

impl PanelSectionType {
    fn options(tree: &BlockTree, block: BlockId, options: &OptionMap) -> Result<SectionOptions, BlockError> {
        resolve(&tree.require(block)?.name, options)
    }

    fn attach_heading(tree: &BlockTree, child: BlockId, block: BlockId) -> Result<(), BlockError> {
        let section = tree.require(block)?;
        let duplicate = section
            .children
            .iter()
            .filter(|(_, &id)| id != child)
            .any(|(name, &id)| {
                name == HEADING_NAME || tree.get(id).is_some_and(|b| b.kind == BlockKind::Heading)
            });

        if duplicate {
            return Err(ConfigurationError::DuplicateHeading {
                section: section.name.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn attach_actions(factory: &mut BlockFactory, child: BlockId, block: BlockId) -> Result<(), BlockError> {
        let previous = factory
            .tree()
            .require(block)?
            .section
            .actions_group
            .filter(|&id| id != child && factory.tree().contains(id));

        if let Some(previous) = previous {
            let (old_name, moved) = {
                let old = factory.tree().require(previous)?;
                (old.name.clone(), old.children.keys().cloned().collect::<Vec<_>>())
            };

            let target = factory.tree().require(child)?;
            if let Some(name) = moved.iter().find(|name| target.has(name.as_str())) {
                return Err(BlockError::DuplicateChild {
                    parent: target.name.clone(),
                    name: name.clone(),
                });
            }

            // The old group keeps its children until every one is accepted.
            let mut donated: Vec<&str> = Vec::with_capacity(moved.len());
            for name in &moved {
                let Some(id) = factory.tree().child(previous, name) else {
                    continue;
                };
                if let Err(err) = factory.attach(child, id) {
                    for name in &donated {
                        factory.tree_mut().detach_child(child, name);
                    }
                    return Err(err);
                }
                donated.push(name.as_str());
            }
            for name in &donated {
                factory.tree_mut().detach_child(previous, name);
            }

            // Donated children go first, ahead of the group's own.
            factory.tree_mut().rotate_children(child, donated.len())?;
            factory.tree_mut().remove_child(block, &old_name);
            debug!(section = %block, from = %old_name, into = %child, moved = moved.len(), "merged actions groups");
        }

        factory.tree_mut().require_mut(block)?.section.actions_group = Some(child);
        Ok(())
    }

    fn attach_row(
        tree: &mut BlockTree,
        child: BlockId,
        block: BlockId,
        options: &SectionOptions,
    ) -> Result<(), BlockError> {
        let (kind, derived) = {
            let row = tree.require(child)?;
            (row.kind, derived_row_options(options, &row.options))
        };
        tree.merge_options(child, derived)?;

        if kind != BlockKind::Spacer {
            tree.require_mut(block)?.section.last_row = Some(child);
        }
        Ok(())
    }

    fn attach_cell(factory: &mut BlockFactory, child: BlockId, block: BlockId) -> Result<(), BlockError> {
        let row = match Self::open_row(factory.tree(), block)? {
            Some(row) => row,
            None => {
                let row = factory.add_unique(block, BlockKind::Row, OptionMap::new())?;
                debug!(section = %block, %row, "opened new row");
                row
            }
        };

        let name = factory.tree().require(child)?.name.clone();
        factory.attach(row, child)?;
        factory.tree_mut().detach_child(block, &name);
        Ok(())
    }

    /// The last row, if it still has room for a cell.
    ///
    /// A row without a `column` capacity is never reused.
    fn open_row(tree: &BlockTree, block: BlockId) -> Result<Option<BlockId>, BlockError> {
        let Some(row_id) = tree.require(block)?.section.last_row else {
            return Ok(None);
        };
        let Some(row) = tree.get(row_id) else {
            return Ok(None);
        };

        let options: RowOptions = resolve(&row.name, &row.options)?;
        Ok(options
            .column
            .filter(|&column| row.len() < column as usize)
            .map(|_| row_id))
    }
}

/// Options a section pushes down into an attached row.
///
/// Sizing options always win over the row's; styles only fill in what the
/// row leaves undefined.
pub fn derived_row_options(section: &SectionOptions, row: &OptionMap) -> OptionMap {
    let mut derived = OptionMap::new();

    if let Some(column) = section.column {
        derived.insert("column".to_string(), Value::from(column));
    }
    if let Some(layout_max) = section.layout_max {
        derived.insert("layout_max".to_string(), Value::from(layout_max));
    }
    if let Some(layout_size) = &section.layout_size {
        derived.insert("layout_size".to_string(), Value::from(layout_size.as_str()));
    }
    if let Some(layout_style) = &section.layout_style {
        if !is_defined(row, "layout_style") {
            derived.insert("layout_style".to_string(), Value::from(layout_style.as_str()));
        }
    }
    if let Some(cell_label_style) = &section.cell_label_style {
        if !is_defined(row, "cell_label_style") {
            derived.insert("cell_label_style".to_string(), Value::from(cell_label_style.as_str()));
        }
    }

    derived
}

impl BlockType for PanelSectionType {
    fn kind(&self) -> BlockKind {
        BlockKind::Section
    }

    fn configure_options(&self, name: &str, options: &OptionMap) -> Result<OptionMap, BlockError> {
        resolve_map::<SectionOptions>(name, options)
    }

    fn build(&self, factory: &mut BlockFactory, block: BlockId, options: &OptionMap) -> Result<(), BlockError> {
        let options = Self::options(factory.tree(), block, options)?;

        if let Some(label) = options.label.filter(|l| !l.is_empty()) {
            let heading = HeadingOptions {
                size: 6,
                label: Some(label),
                ..HeadingOptions::default()
            };
            factory.add(block, HEADING_NAME, BlockKind::Heading, to_option_map(HEADING_NAME, &heading)?)?;
        }

        if options.collapsible {
            let actions = factory.add(
                block,
                ACTIONS_NAME,
                BlockKind::Actions,
                to_option_map(ACTIONS_NAME, &ContainerOptions::default())?,
            )?;

            let mut attr = OptionMap::new();
            attr.insert("class".to_string(), Value::from("btn-panel-collapse"));
            let button = ButtonOptions {
                label: Some(String::new()),
                style: Some("default".to_string()),
                prepend: Some(r#"<span class="caret"></span>"#.to_string()),
                attr,
                ..ButtonOptions::default()
            };
            factory.add(
                actions,
                COLLAPSE_BUTTON_NAME,
                BlockKind::Button,
                to_option_map(COLLAPSE_BUTTON_NAME, &button)?,
            )?;
        }

        Ok(())
    }

    fn check_parent(
        &self,
        tree: &BlockTree,
        parent: BlockId,
        block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        let parent = tree.require(parent)?;
        if parent.kind == BlockKind::Panel {
            return Ok(());
        }

        Err(ConfigurationError::InvalidParent {
            section: tree.require(block)?.name.clone(),
            parent: parent.kind.to_string(),
        }
        .into())
    }

    fn on_child_attached(
        &self,
        factory: &mut BlockFactory,
        child: BlockId,
        block: BlockId,
        options: &OptionMap,
    ) -> Result<(), BlockError> {
        let kind = factory.tree().require(child)?.kind;
        match kind {
            BlockKind::Heading => Self::attach_heading(factory.tree(), child, block),
            BlockKind::Actions => Self::attach_actions(factory, child, block),
            BlockKind::Row | BlockKind::Spacer => {
                let options = Self::options(factory.tree(), block, options)?;
                Self::attach_row(factory.tree_mut(), child, block, &options)
            }
            BlockKind::Cell => Self::attach_cell(factory, child, block),
            _ => Ok(()),
        }
    }

    fn assemble_view(
        &self,
        view: &mut BlockView,
        tree: &BlockTree,
        block: BlockId,
        options: &OptionMap,
    ) -> Result<(), BlockError> {
        let options = Self::options(tree, block, options)?;

        view.set_rendered(options.rendered);
        view.set_var("collapsible", options.collapsible);
        view.set_var("collapsed", options.collapsed);
        view.set_var("hidden_if_empty", options.hidden_if_empty);
        view.set_var("column", options.column);
        view.set_var("layout_max", options.layout_max);
        view.set_var("layout_size", options.layout_size);
        view.set_var("layout_style", options.layout_style);
        view.set_var("cell_label_style", options.cell_label_style);
        Ok(())
    }

    fn finalize_view(
        &self,
        view: &mut BlockView,
        _tree: &BlockTree,
        _block: BlockId,
        _options: &OptionMap,
    ) -> Result<(), BlockError> {
        let mut row_count = 0;
        let mut has_rendered_row = false;

        let names: Vec<String> = view.children.keys().cloned().collect();
        for name in names {
            let Some(child) = view.children.get(&name) else {
                continue;
            };

            if child.has_prefix("heading") {
                if let Some(mut heading) = view.children.shift_remove(&name) {
                    heading.add_class(HEADING_CLASS);
                    view.slots.insert(HEADING_SLOT.to_string(), heading);
                }
            } else if child.has_prefix("panel_actions") {
                if let Some(actions) = view.children.shift_remove(&name) {
                    if !actions.children.is_empty() || actions.slots.contains_key(COLLAPSE_SLOT) {
                        view.slots.insert(ACTIONS_SLOT.to_string(), actions);
                    }
                }
            } else if child.has_prefix("panel_row") {
                row_count += 1;
                has_rendered_row |= child.rendered();
            }
        }

        if !is_scalar(view.value()) {
            view.set_value(Value::String(String::new()));
        }

        let hidden_if_empty = view
            .vars
            .get("hidden_if_empty")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        if hidden_if_empty
            && is_empty_value(view.value())
            && row_count == view.children.len()
            && !has_rendered_row
        {
            debug!(section = %view.name, "hiding empty section");
            view.set_rendered(false);
        }

        Ok(())
    }
}
