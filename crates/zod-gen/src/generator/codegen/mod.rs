//! Text rendering for the five artifact kinds.
//!
//! Each submodule renders fragments for one kind via the same recursive
//! descent over `SchemaGraph` and assembles them into a complete file. The
//! fragment functions are pure folds; fault collection happens in the
//! orchestrator, which validates the snapshot once before rendering.

pub(crate) mod client;
pub(crate) mod enums;
pub(crate) mod interfaces;
pub(crate) mod types;
pub(crate) mod validators;

use indexmap::IndexMap;

use super::{naming::to_pascal_identifier, schema_graph::SchemaGraph};

/// Immutable lookup shared by all renderers: which schema names exist in the
/// frozen snapshot, so references resolve by name regardless of emission
/// order. An unresolvable reference renders as the untyped fallback, keeping
/// downstream artifacts syntactically well-formed.
pub(crate) struct RenderContext<'a> {
  schemas: &'a IndexMap<String, SchemaGraph>,
}

impl<'a> RenderContext<'a> {
  pub fn new(schemas: &'a IndexMap<String, SchemaGraph>) -> Self {
    Self { schemas }
  }

  pub fn type_name(&self, target: &str) -> Option<String> {
    self
      .schemas
      .contains_key(target)
      .then(|| to_pascal_identifier(target))
  }

  pub fn validator_name(&self, target: &str) -> Option<String> {
    self.type_name(target).map(|name| format!("{name}Schema"))
  }
}

pub(crate) fn file_header(what: &str) -> String {
  format!("// Generated {what} from OpenAPI specification\n// This file is auto-generated, do not edit manually")
}

/// Joins top-level blocks with blank lines and a trailing newline.
pub(crate) fn join_blocks(blocks: &[String]) -> String {
  let mut content = blocks.join("\n\n");
  content.push('\n');
  content
}
