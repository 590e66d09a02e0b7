//! Typed options of the panel block types.

use gluon_core::OptionMap;
use serde::{Deserialize, Serialize};

/// Options of a panel section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionOptions {
    pub rendered: bool,
    pub collapsible: bool,
    pub collapsed: bool,
    /// Hide the section when it has no value and no rendered row
    pub hidden_if_empty: bool,
    /// Maximum number of cells per row
    pub column: Option<u32>,
    pub layout_max: Option<u32>,
    pub layout_size: Option<String>,
    pub layout_style: Option<String>,
    pub cell_label_style: Option<String>,
    /// Title; consumed at build time only
    pub label: Option<String>,
    /// Informs the host that the section shares its parent's data
    pub inherit_data: bool,
    pub attr: OptionMap,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            rendered: true,
            collapsible: false,
            collapsed: false,
            hidden_if_empty: true,
            column: None,
            layout_max: None,
            layout_size: None,
            layout_style: None,
            cell_label_style: None,
            label: None,
            inherit_data: true,
            attr: OptionMap::new(),
        }
    }
}

/// Options of a row or spacer row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowOptions {
    pub rendered: bool,
    pub column: Option<u32>,
    pub layout_max: Option<u32>,
    pub layout_size: Option<String>,
    pub layout_style: Option<String>,
    pub cell_label_style: Option<String>,
    pub attr: OptionMap,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            rendered: true,
            column: None,
            layout_max: None,
            layout_size: None,
            layout_style: None,
            cell_label_style: None,
            attr: OptionMap::new(),
        }
    }
}

/// Options of a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CellOptions {
    pub rendered: bool,
    pub label: Option<String>,
    pub attr: OptionMap,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            rendered: true,
            label: None,
            attr: OptionMap::new(),
        }
    }
}

/// Options of a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingOptions {
    pub rendered: bool,
    /// Heading level, 1 to 6
    pub size: u8,
    pub label: Option<String>,
    pub attr: OptionMap,
}

impl Default for HeadingOptions {
    fn default() -> Self {
        Self {
            rendered: true,
            size: 3,
            label: None,
            attr: OptionMap::new(),
        }
    }
}

/// Options of a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonOptions {
    pub rendered: bool,
    pub label: Option<String>,
    pub style: Option<String>,
    /// Markup rendered before the label
    pub prepend: Option<String>,
    pub attr: OptionMap,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            rendered: true,
            label: None,
            style: None,
            prepend: None,
            attr: OptionMap::new(),
        }
    }
}

/// Options shared by panels and actions groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerOptions {
    pub rendered: bool,
    pub attr: OptionMap,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            rendered: true,
            attr: OptionMap::new(),
        }
    }
}
