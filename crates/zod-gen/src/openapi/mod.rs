//! Serde model for the OpenAPI v3 document subset consumed by the generator.
//!
//! Ordered maps use `IndexMap` so that path, property, and component
//! declaration order survives decoding; emitted artifacts must follow the
//! document, not an alphabetical re-sort.

use indexmap::IndexMap;
use serde::Deserialize;

/// Either an inline object or a `$ref` pointer into `components`.
///
/// The `Ref` variant must come first: with `untagged`, serde tries variants
/// in order, and an object carrying `$ref` would otherwise match the inline
/// variant (whose fields are all defaulted).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ObjectOrReference<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(T),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
  pub openapi: String,
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  pub components: Option<Components>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Info {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

/// HTTP methods a path item may declare, in the fixed order operations are
/// flattened within a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
  Get,
  Post,
  Put,
  Delete,
  Patch,
  Head,
  Options,
  Trace,
}

impl Method {
  pub const FLATTEN_ORDER: [Method; 8] = [
    Method::Get,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Patch,
    Method::Head,
    Method::Options,
    Method::Trace,
  ];

  /// Lowercase form, as used in binding names and axios calls.
  pub fn as_str(self) -> &'static str {
    match self {
      Method::Get => "get",
      Method::Post => "post",
      Method::Put => "put",
      Method::Delete => "delete",
      Method::Patch => "patch",
      Method::Head => "head",
      Method::Options => "options",
      Method::Trace => "trace",
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
  pub get: Option<Operation>,
  pub post: Option<Operation>,
  pub put: Option<Operation>,
  pub delete: Option<Operation>,
  pub patch: Option<Operation>,
  pub head: Option<Operation>,
  pub options: Option<Operation>,
  pub trace: Option<Operation>,
  /// Parameters shared by every operation on this path.
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
}

impl PathItem {
  pub fn operation(&self, method: Method) -> Option<&Operation> {
    match method {
      Method::Get => self.get.as_ref(),
      Method::Post => self.post.as_ref(),
      Method::Put => self.put.as_ref(),
      Method::Delete => self.delete.as_ref(),
      Method::Patch => self.patch.as_ref(),
      Method::Head => self.head.as_ref(),
      Method::Options => self.options.as_ref(),
      Method::Trace => self.trace.as_ref(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  pub request_body: Option<ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  #[serde(default)]
  pub required: bool,
  pub description: Option<String>,
  pub schema: Option<ObjectOrReference<ObjectSchema>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
  #[serde(default)]
  pub required: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaType {
  pub schema: Option<ObjectOrReference<ObjectSchema>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Response {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, ObjectOrReference<ObjectSchema>>,
  #[serde(default)]
  pub parameters: IndexMap<String, ObjectOrReference<Parameter>>,
  #[serde(default)]
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
  #[serde(default)]
  pub request_bodies: IndexMap<String, ObjectOrReference<RequestBody>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectSchema {
  #[serde(rename = "type")]
  pub schema_type: Option<String>,
  #[serde(default)]
  pub properties: IndexMap<String, ObjectOrReference<ObjectSchema>>,
  #[serde(default)]
  pub required: Vec<String>,
  pub items: Option<Box<ObjectOrReference<ObjectSchema>>>,
  #[serde(rename = "enum", default)]
  pub enum_values: Vec<serde_json::Value>,
  pub description: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ref_wins_over_inline_schema() {
    let node: ObjectOrReference<ObjectSchema> =
      serde_json::from_str(r##"{"$ref": "#/components/schemas/Pet"}"##).unwrap();
    assert!(matches!(node, ObjectOrReference::Ref { ref ref_path } if ref_path == "#/components/schemas/Pet"));
  }

  #[test]
  fn test_inline_schema_parses() {
    let node: ObjectOrReference<ObjectSchema> =
      serde_json::from_str(r#"{"type": "string", "enum": ["a", "b"]}"#).unwrap();
    let ObjectOrReference::Object(schema) = node else {
      panic!("expected inline schema");
    };
    assert_eq!(schema.schema_type.as_deref(), Some("string"));
    assert_eq!(schema.enum_values.len(), 2);
  }

  #[test]
  fn test_paths_preserve_declaration_order() {
    let document: Document = serde_json::from_str(
      r#"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {"/zebra": {}, "/alpha": {}, "/middle": {}}
      }"#,
    )
    .unwrap();
    let order: Vec<&String> = document.paths.keys().collect();
    assert_eq!(order, ["/zebra", "/alpha", "/middle"]);
  }

  #[test]
  fn test_method_display_and_lowercase() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Delete.as_str(), "delete");
  }
}
