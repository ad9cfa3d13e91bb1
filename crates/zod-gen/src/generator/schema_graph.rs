//! The closed shape description every renderer dispatches on.
//!
//! Lowering an OpenAPI schema node into a `SchemaGraph` is infallible: a node
//! that matches no known shape becomes the explicit `Untyped` variant rather
//! than an implicit fall-through, and the generator reports it as a warning.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::Value;

use crate::openapi::{ObjectOrReference, ObjectSchema};

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaGraph {
  String,
  Number,
  Boolean,
  Array(Box<SchemaGraph>),
  Object {
    properties: IndexMap<String, SchemaGraph>,
    required: BTreeSet<String>,
  },
  Enum(Vec<Value>),
  Reference(String),
  Untyped,
}

impl SchemaGraph {
  pub fn from_schema_ref(node: &ObjectOrReference<ObjectSchema>) -> Self {
    match node {
      ObjectOrReference::Ref { ref_path } => match extract_ref_name(ref_path) {
        Some(name) => Self::Reference(name),
        None => Self::Untyped,
      },
      ObjectOrReference::Object(schema) => Self::from_schema(schema),
    }
  }

  /// Lowers a resolved schema object. `enum` takes precedence over `type`, so
  /// a `string` schema carrying literal values keeps its literal shape.
  pub fn from_schema(schema: &ObjectSchema) -> Self {
    if !schema.enum_values.is_empty() {
      return Self::Enum(schema.enum_values.clone());
    }

    match schema.schema_type.as_deref() {
      Some("string") => Self::String,
      Some("number" | "integer") => Self::Number,
      Some("boolean") => Self::Boolean,
      Some("array") => {
        let item = schema
          .items
          .as_deref()
          .map_or(Self::Untyped, Self::from_schema_ref);
        Self::Array(Box::new(item))
      }
      Some("object") => Self::object_from(schema),
      _ if !schema.properties.is_empty() => Self::object_from(schema),
      _ => Self::Untyped,
    }
  }

  fn object_from(schema: &ObjectSchema) -> Self {
    let properties = schema
      .properties
      .iter()
      .map(|(name, node)| (name.clone(), Self::from_schema_ref(node)))
      .collect();
    let required = schema.required.iter().cloned().collect();
    Self::Object { properties, required }
  }

  /// All reference targets reachable from this graph.
  pub fn references(&self) -> BTreeSet<String> {
    let mut targets = BTreeSet::new();
    self.collect_references(&mut targets);
    targets
  }

  fn collect_references(&self, targets: &mut BTreeSet<String>) {
    match self {
      Self::Reference(target) => {
        targets.insert(target.clone());
      }
      Self::Array(item) => item.collect_references(targets),
      Self::Object { properties, .. } => {
        for graph in properties.values() {
          graph.collect_references(targets);
        }
      }
      Self::String | Self::Number | Self::Boolean | Self::Enum(_) | Self::Untyped => {}
    }
  }

  /// All enum literal values reachable from this graph, in declaration order.
  pub fn enum_values(&self) -> Vec<&Value> {
    let mut values = Vec::new();
    self.collect_enum_values(&mut values);
    values
  }

  fn collect_enum_values<'a>(&'a self, values: &mut Vec<&'a Value>) {
    match self {
      Self::Enum(literals) => values.extend(literals.iter()),
      Self::Array(item) => item.collect_enum_values(values),
      Self::Object { properties, .. } => {
        for graph in properties.values() {
          graph.collect_enum_values(values);
        }
      }
      Self::String | Self::Number | Self::Boolean | Self::Reference(_) | Self::Untyped => {}
    }
  }

  pub fn shape_name(&self) -> &'static str {
    match self {
      Self::String => "string",
      Self::Number => "number",
      Self::Boolean => "boolean",
      Self::Array(_) => "array",
      Self::Object { .. } => "object",
      Self::Enum(_) => "enum",
      Self::Reference(_) => "reference",
      Self::Untyped => "untyped",
    }
  }
}

/// Extracts the schema name from a `#/components/schemas/<Name>` pointer.
pub fn extract_ref_name(ref_path: &str) -> Option<String> {
  ref_path
    .strip_prefix("#/components/schemas/")
    .map(str::to_string)
}
