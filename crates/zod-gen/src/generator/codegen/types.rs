//! Structural type declarations (`types.ts`).

use std::collections::BTreeSet;

use indexmap::IndexMap;
use itertools::Itertools;

use super::{RenderContext, file_header, interfaces, join_blocks};
use crate::generator::{naming::to_pascal_identifier, schema_graph::SchemaGraph, spec_index::SchemaEntry};

/// Baseline type emitted on every run, so downstream code always has a
/// response envelope to name even for an empty document.
const RESPONSE_ENVELOPE: &str = "export type ApiResponse<T> = {\n  data: T;\n  message?: string;\n  success: boolean;\n};";

pub(crate) fn fragment(entry: &SchemaEntry, ctx: &RenderContext<'_>) -> anyhow::Result<String> {
  let name = to_pascal_identifier(&entry.name);
  match &entry.graph {
    // Object types and interfaces share one shape.
    SchemaGraph::Object { properties, required } => interfaces::object_declaration(&name, properties, required, ctx),
    graph => Ok(format!("export type {name} = {};", type_expr(graph, ctx)?)),
  }
}

/// The TypeScript type expression for a schema graph in property position.
pub(crate) fn type_expr(graph: &SchemaGraph, ctx: &RenderContext<'_>) -> anyhow::Result<String> {
  Ok(match graph {
    SchemaGraph::String => "string".to_string(),
    SchemaGraph::Number => "number".to_string(),
    SchemaGraph::Boolean => "boolean".to_string(),
    SchemaGraph::Array(item) => {
      let inner = type_expr(item, ctx)?;
      if inner.contains(' ') {
        format!("({inner})[]")
      } else {
        format!("{inner}[]")
      }
    }
    SchemaGraph::Object { properties, required } => object_literal(properties, required, ctx)?,
    SchemaGraph::Enum(values) => literal_union(values)?,
    SchemaGraph::Reference(target) => ctx.type_name(target).unwrap_or_else(|| "any".to_string()),
    SchemaGraph::Untyped => "any".to_string(),
  })
}

/// Exact literal values joined with the union combinator.
fn literal_union(values: &[serde_json::Value]) -> anyhow::Result<String> {
  let rendered: Vec<String> = values.iter().map(serde_json::to_string).try_collect()?;
  Ok(rendered.join(" | "))
}

/// An inline object shape for nested property positions.
fn object_literal(
  properties: &IndexMap<String, SchemaGraph>,
  required: &BTreeSet<String>,
  ctx: &RenderContext<'_>,
) -> anyhow::Result<String> {
  if properties.is_empty() {
    return Ok("{}".to_string());
  }

  let fields: Vec<String> = properties
    .iter()
    .map(|(name, graph)| {
      let marker = if required.contains(name) { "" } else { "?" };
      Ok(format!("{name}{marker}: {}", type_expr(graph, ctx)?))
    })
    .collect::<anyhow::Result<_>>()?;

  Ok(format!("{{ {} }}", fields.join("; ")))
}

pub(crate) fn assemble(fragments: &[String]) -> String {
  let mut blocks = vec![
    file_header("types"),
    format!("// Type aliases\n{RESPONSE_ENVELOPE}"),
  ];
  blocks.extend_from_slice(fragments);
  join_blocks(&blocks)
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;
  use serde_json::json;

  use super::*;

  fn empty_schemas() -> IndexMap<String, SchemaGraph> {
    IndexMap::new()
  }

  #[test]
  fn test_primitive_alias() {
    let schemas = empty_schemas();
    let ctx = RenderContext::new(&schemas);
    let entry = SchemaEntry {
      name: "user-id".to_string(),
      graph: SchemaGraph::Number,
      required: false,
      description: None,
    };
    assert_eq!(fragment(&entry, &ctx).unwrap(), "export type UserId = number;");
  }

  #[test]
  fn test_literal_union_alias() {
    let schemas = empty_schemas();
    let ctx = RenderContext::new(&schemas);
    let entry = SchemaEntry {
      name: "status".to_string(),
      graph: SchemaGraph::Enum(vec![json!("available"), json!("sold")]),
      required: false,
      description: None,
    };
    assert_eq!(
      fragment(&entry, &ctx).unwrap(),
      r#"export type Status = "available" | "sold";"#
    );
  }

  #[test]
  fn test_array_of_union_is_parenthesized() {
    let schemas = empty_schemas();
    let ctx = RenderContext::new(&schemas);
    let graph = SchemaGraph::Array(Box::new(SchemaGraph::Enum(vec![json!("a"), json!("b")])));
    assert_eq!(type_expr(&graph, &ctx).unwrap(), r#"("a" | "b")[]"#);
  }

  #[test]
  fn test_reference_falls_back_to_any_when_unknown() {
    let mut schemas = IndexMap::new();
    schemas.insert("Pet".to_string(), SchemaGraph::Untyped);
    let ctx = RenderContext::new(&schemas);
    assert_eq!(type_expr(&SchemaGraph::Reference("Pet".to_string()), &ctx).unwrap(), "Pet");
    assert_eq!(
      type_expr(&SchemaGraph::Reference("Ghost".to_string()), &ctx).unwrap(),
      "any"
    );
  }

  #[test]
  fn test_nested_object_renders_full_shape() {
    let schemas = empty_schemas();
    let ctx = RenderContext::new(&schemas);
    let graph = SchemaGraph::Object {
      properties: [
        ("street".to_string(), SchemaGraph::String),
        ("zip".to_string(), SchemaGraph::Number),
      ]
      .into_iter()
      .collect(),
      required: ["street".to_string()].into_iter().collect(),
    };
    assert_eq!(type_expr(&graph, &ctx).unwrap(), "{ street: string; zip?: number }");
  }

  #[test]
  fn test_assemble_always_contains_envelope() {
    let content = assemble(&[]);
    assert!(content.contains("export type ApiResponse<T>"));
    assert!(content.starts_with("// Generated types from OpenAPI specification"));
  }
}
