//! Interface declarations (`interfaces.ts`), one per object-shaped schema.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{RenderContext, file_header, join_blocks, types};
use crate::generator::{naming::to_pascal_identifier, schema_graph::SchemaGraph, spec_index::SchemaEntry};

/// Only object shapes declare an interface; every other shape yields nothing
/// for this kind.
pub(crate) fn fragment(entry: &SchemaEntry, ctx: &RenderContext<'_>) -> anyhow::Result<Option<String>> {
  match &entry.graph {
    SchemaGraph::Object { properties, required } => {
      let name = to_pascal_identifier(&entry.name);
      Ok(Some(object_declaration(&name, properties, required, ctx)?))
    }
    _ => Ok(None),
  }
}

/// A named interface declaration. A property is optional exactly when its
/// name is absent from the schema's `required` set; property order follows
/// the declaration.
pub(crate) fn object_declaration(
  name: &str,
  properties: &IndexMap<String, SchemaGraph>,
  required: &BTreeSet<String>,
  ctx: &RenderContext<'_>,
) -> anyhow::Result<String> {
  let mut lines = vec![format!("export interface {name} {{")];
  for (property, graph) in properties {
    let marker = if required.contains(property) { "" } else { "?" };
    lines.push(format!("  {property}{marker}: {};", types::type_expr(graph, ctx)?));
  }
  lines.push("}".to_string());
  Ok(lines.join("\n"))
}

pub(crate) fn assemble(fragments: &[String]) -> String {
  let mut blocks = vec![file_header("interfaces")];
  blocks.extend_from_slice(fragments);
  join_blocks(&blocks)
}
