//! Identifier and kind types for blocks.

use std::fmt;

/// Handle to a block stored in a block tree.
///
/// Ids are handed out from a monotonic counter and never reused, so a stale
/// id simply fails to resolve once its block has been discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of block kinds a tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Container that sections attach to
    Panel,
    /// Panel section grouping a heading, actions and rows
    Section,
    /// Title block
    Heading,
    /// Group of action buttons
    Actions,
    /// Capacity-bounded container of cells
    Row,
    /// Row variant excluded from last-row tracking
    Spacer,
    /// Leaf content block
    Cell,
    /// Action button
    Button,
    /// Anything else; passed through untouched
    Other,
}

impl BlockKind {
    /// The most specific prefix of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            BlockKind::Panel => "panel",
            BlockKind::Section => "panel_section",
            BlockKind::Heading => "heading",
            BlockKind::Actions => "panel_actions",
            BlockKind::Row => "panel_row",
            BlockKind::Spacer => "panel_row_spacer",
            BlockKind::Cell => "panel_cell",
            BlockKind::Button => "button",
            BlockKind::Other => "block",
        }
    }

    /// Prefix chain from the most generic to the most specific.
    ///
    /// A spacer is a row, so its chain contains `panel_row`.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            BlockKind::Panel => &["block", "panel"],
            BlockKind::Section => &["block", "panel_section"],
            BlockKind::Heading => &["block", "heading"],
            BlockKind::Actions => &["block", "panel_actions"],
            BlockKind::Row => &["block", "panel_row"],
            BlockKind::Spacer => &["block", "panel_row", "panel_row_spacer"],
            BlockKind::Cell => &["block", "panel_cell"],
            BlockKind::Button => &["block", "button"],
            BlockKind::Other => &["block"],
        }
    }

    /// Whether this kind is a row or one of its variants.
    pub fn is_row(&self) -> bool {
        matches!(self, BlockKind::Row | BlockKind::Spacer)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_is_row() {
        assert!(BlockKind::Spacer.is_row());
        assert!(BlockKind::Row.is_row());
        assert!(!BlockKind::Cell.is_row());
        assert!(BlockKind::Spacer.prefixes().contains(&"panel_row"));
    }

    #[test]
    fn test_prefix_chain_ends_with_prefix() {
        for kind in [
            BlockKind::Panel,
            BlockKind::Section,
            BlockKind::Heading,
            BlockKind::Actions,
            BlockKind::Row,
            BlockKind::Spacer,
            BlockKind::Cell,
            BlockKind::Button,
            BlockKind::Other,
        ] {
            assert_eq!(kind.prefixes().last(), Some(&kind.prefix()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockKind::Section.to_string(), "panel_section");
        assert_eq!(BlockId(7).to_string(), "#7");
    }
}
