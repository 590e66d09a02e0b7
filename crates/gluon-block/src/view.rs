//! Render-time view model.
//!
//! A [`BlockView`] is built once per block after the tree is complete and is
//! handed read-only to a renderer afterwards.

use gluon_core::{BlockKind, OptionMap};
use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

/// View of a single block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockView {
    /// Name of the block this view was built from
    pub name: String,
    /// Kind of the block
    pub kind: BlockKind,
    /// Prefix chain, generic first
    pub prefixes: SmallVec<[&'static str; 4]>,
    /// Template variables
    pub vars: OptionMap,
    /// Views promoted out of `children` into named slots
    pub slots: IndexMap<String, BlockView>,
    /// Child views in order
    pub children: IndexMap<String, BlockView>,
}

impl BlockView {
    /// Create an empty view for a block.
    pub fn new(name: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            name: name.into(),
            kind,
            prefixes: kind.prefixes().iter().copied().collect(),
            vars: OptionMap::new(),
            slots: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// Check if the prefix chain contains `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|p| *p == prefix)
    }

    /// The `rendered` variable; views render unless told otherwise.
    pub fn rendered(&self) -> bool {
        self.vars.get("rendered").and_then(Value::as_bool).unwrap_or(true)
    }

    pub fn set_rendered(&mut self, rendered: bool) {
        self.vars.insert("rendered".to_string(), Value::Bool(rendered));
    }

    /// The `value` variable.
    pub fn value(&self) -> &Value {
        self.vars.get("value").unwrap_or(&Value::Null)
    }

    pub fn set_value(&mut self, value: Value) {
        self.vars.insert("value".to_string(), value);
    }

    /// Set a template variable.
    pub fn set_var(&mut self, key: &str, value: impl Into<Value>) {
        self.vars.insert(key.to_string(), value.into());
    }

    /// Append a class to `attr.class`.
    pub fn add_class(&mut self, class: &str) {
        let attr = self
            .vars
            .entry("attr")
            .or_insert_with(|| Value::Object(OptionMap::new()));
        if !attr.is_object() {
            *attr = Value::Object(OptionMap::new());
        }
        let Value::Object(attr) = attr else {
            return;
        };
        let merged = match attr.get("class").and_then(Value::as_str) {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        attr.insert("class".to_string(), Value::String(merged));
    }

    /// The `attr.class` variable, if any.
    pub fn class(&self) -> Option<&str> {
        self.vars.get("attr")?.get("class")?.as_str()
    }
}
