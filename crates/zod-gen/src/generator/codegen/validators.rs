//! Zod runtime validator declarations (`schemas.ts`).
//!
//! The emitted validator and the structural type must never disagree about
//! which properties are mandatory: a property is wrapped in `.optional()`
//! exactly when the interface marks it with `?`.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use itertools::Itertools;

use super::{RenderContext, file_header, join_blocks};
use crate::generator::{naming::to_pascal_identifier, schema_graph::SchemaGraph, spec_index::SchemaEntry};

pub(crate) fn fragment(entry: &SchemaEntry, ctx: &RenderContext<'_>) -> anyhow::Result<String> {
  let name = to_pascal_identifier(&entry.name);
  let expr = match &entry.graph {
    SchemaGraph::Object { properties, required } => object_validator(properties, required, ctx, false)?,
    graph => validator_expr(graph, ctx)?,
  };
  Ok(format!("export const {name}Schema = {expr};"))
}

/// The zod expression for a schema graph in property position.
pub(crate) fn validator_expr(graph: &SchemaGraph, ctx: &RenderContext<'_>) -> anyhow::Result<String> {
  Ok(match graph {
    SchemaGraph::String => "z.string()".to_string(),
    SchemaGraph::Number => "z.number()".to_string(),
    SchemaGraph::Boolean => "z.boolean()".to_string(),
    SchemaGraph::Array(item) => format!("z.array({})", validator_expr(item, ctx)?),
    SchemaGraph::Object { properties, required } => object_validator(properties, required, ctx, true)?,
    SchemaGraph::Enum(values) => {
      let rendered: Vec<String> = values.iter().map(serde_json::to_string).try_collect()?;
      format!("z.enum([{}])", rendered.join(", "))
    }
    SchemaGraph::Reference(target) => ctx.validator_name(target).unwrap_or_else(|| "z.any()".to_string()),
    SchemaGraph::Untyped => "z.any()".to_string(),
  })
}

fn object_validator(
  properties: &IndexMap<String, SchemaGraph>,
  required: &BTreeSet<String>,
  ctx: &RenderContext<'_>,
  inline: bool,
) -> anyhow::Result<String> {
  if properties.is_empty() {
    return Ok("z.object({})".to_string());
  }

  let fields: Vec<String> = properties
    .iter()
    .map(|(name, graph)| {
      let suffix = if required.contains(name) { "" } else { ".optional()" };
      Ok(format!("{name}: {}{suffix}", validator_expr(graph, ctx)?))
    })
    .collect::<anyhow::Result<_>>()?;

  if inline {
    Ok(format!("z.object({{ {} }})", fields.join(", ")))
  } else {
    let body = fields.iter().map(|field| format!("  {field},")).join("\n");
    Ok(format!("z.object({{\n{body}\n}})"))
  }
}

pub(crate) fn assemble(fragments: &[String]) -> String {
  let mut blocks = vec![
    "import { z } from 'zod';".to_string(),
    file_header("Zod schemas"),
  ];
  blocks.extend_from_slice(fragments);
  join_blocks(&blocks)
}
