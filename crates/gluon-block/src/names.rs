//! Unique names for synthesized blocks.

use crate::tree::Block;

/// Generates child names that cannot collide with names already taken.
///
/// Names look like `_panel_row3`; the counter is shared across the whole
/// build and a candidate is skipped while the parent already has it.
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    counter: u64,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next free name under `parent`.
    pub fn generate(&mut self, parent: &Block, prefix: &str) -> String {
        loop {
            self.counter += 1;
            let candidate = format!("_{}{}", prefix, self.counter);
            if !parent.has(&candidate) {
                return candidate;
            }
        }
    }
}
