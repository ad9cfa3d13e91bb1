//! Read-only projections over a decoded OpenAPI document.
//!
//! The index performs no artifact translation; it flattens the document into
//! the three views the generator snapshots: named schemas, one entry per
//! `(path, method)` pair, and the reusable component maps.

use indexmap::IndexMap;

use super::schema_graph::SchemaGraph;
use crate::openapi::{Document, Method, ObjectOrReference, Operation, Parameter, PathItem, RequestBody, Response};

#[derive(Debug)]
pub struct SpecIndex {
  document: Document,
}

/// One named, reusable schema definition.
#[derive(Debug, Clone)]
pub struct SchemaEntry {
  pub name: String,
  pub graph: SchemaGraph,
  pub required: bool,
  pub description: Option<String>,
}

/// A parameter as declared on an operation: either inline (already carrying
/// its name) or a pointer into `components.parameters`, resolved during
/// translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterRef {
  Inline(String),
  Component(String),
}

/// One declared method on one path.
#[derive(Debug, Clone)]
pub struct OperationEntry {
  pub path: String,
  pub method: Method,
  pub summary: Option<String>,
  pub parameters: Vec<ParameterRef>,
  pub request_body: Option<SchemaGraph>,
  pub responses: IndexMap<String, SchemaGraph>,
}

/// The four reusable-component maps, projected for reference resolution.
/// Absent sections project to empty maps, never to an absent index.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
  pub schemas: IndexMap<String, SchemaGraph>,
  pub parameters: IndexMap<String, Parameter>,
  pub responses: IndexMap<String, Option<SchemaGraph>>,
  pub request_bodies: IndexMap<String, Option<SchemaGraph>>,
}

impl SpecIndex {
  pub fn new(document: Document) -> Self {
    Self { document }
  }

  pub fn document(&self) -> &Document {
    &self.document
  }

  /// Named schemas in declaration order. A document without reusable schemas
  /// yields an empty sequence; that is a valid state, not a failure.
  pub fn schemas(&self) -> Vec<SchemaEntry> {
    let Some(components) = &self.document.components else {
      return Vec::new();
    };

    components
      .schemas
      .iter()
      .map(|(name, node)| {
        let description = match node {
          ObjectOrReference::Object(schema) => schema.description.clone(),
          ObjectOrReference::Ref { .. } => None,
        };
        SchemaEntry {
          name: name.clone(),
          graph: SchemaGraph::from_schema_ref(node),
          required: false,
          description,
        }
      })
      .collect()
  }

  /// Flattens the path-keyed, method-keyed structure into one entry per
  /// declared `(path, method)` pair: document path order, then the fixed
  /// method order within a path. Methods absent from a path item are
  /// omitted.
  pub fn operations(&self) -> Vec<OperationEntry> {
    let mut entries = Vec::new();

    for (path, item) in &self.document.paths {
      for method in Method::FLATTEN_ORDER {
        if let Some(operation) = item.operation(method) {
          entries.push(self.flatten_operation(path, method, item, operation));
        }
      }
    }

    entries
  }

  /// Projects the reusable-component maps.
  pub fn components(&self) -> ComponentIndex {
    let Some(components) = &self.document.components else {
      return ComponentIndex::default();
    };

    ComponentIndex {
      schemas: components
        .schemas
        .iter()
        .map(|(name, node)| (name.clone(), SchemaGraph::from_schema_ref(node)))
        .collect(),
      parameters: components
        .parameters
        .iter()
        .filter_map(|(name, node)| match node {
          ObjectOrReference::Object(parameter) => Some((name.clone(), parameter.clone())),
          ObjectOrReference::Ref { .. } => None,
        })
        .collect(),
      responses: components
        .responses
        .iter()
        .map(|(name, node)| (name.clone(), self.response_schema(node)))
        .collect(),
      request_bodies: components
        .request_bodies
        .iter()
        .map(|(name, node)| (name.clone(), self.body_schema(node)))
        .collect(),
    }
  }

  fn flatten_operation(&self, path: &str, method: Method, item: &PathItem, operation: &Operation) -> OperationEntry {
    // Path-item parameters apply to every operation on the path and come
    // first; operation-level parameters follow in declaration order.
    let parameters = item
      .parameters
      .iter()
      .chain(operation.parameters.iter())
      .map(parameter_ref)
      .collect();

    let request_body = operation.request_body.as_ref().and_then(|node| self.body_schema(node));

    let responses = operation
      .responses
      .iter()
      .filter_map(|(status, node)| self.response_schema(node).map(|graph| (status.clone(), graph)))
      .collect();

    OperationEntry {
      path: path.to_string(),
      method,
      summary: operation.summary.clone(),
      parameters,
      request_body,
      responses,
    }
  }

  /// The schema of a request body's first content entry, following one level
  /// of `components.requestBodies` indirection.
  fn body_schema(&self, node: &ObjectOrReference<RequestBody>) -> Option<SchemaGraph> {
    let body = match node {
      ObjectOrReference::Ref { ref_path } => {
        let name = ref_path.rsplit('/').next()?;
        match self.document.components.as_ref()?.request_bodies.get(name)? {
          ObjectOrReference::Object(body) => body,
          ObjectOrReference::Ref { .. } => return None,
        }
      }
      ObjectOrReference::Object(body) => body,
    };

    let media = body.content.values().next()?;
    media.schema.as_ref().map(SchemaGraph::from_schema_ref)
  }

  /// The schema of a response's first content entry, following one level of
  /// `components.responses` indirection. Responses without content (204 and
  /// friends) project to nothing.
  fn response_schema(&self, node: &ObjectOrReference<Response>) -> Option<SchemaGraph> {
    let response = match node {
      ObjectOrReference::Ref { ref_path } => {
        let name = ref_path.rsplit('/').next()?;
        match self.document.components.as_ref()?.responses.get(name)? {
          ObjectOrReference::Object(response) => response,
          ObjectOrReference::Ref { .. } => return None,
        }
      }
      ObjectOrReference::Object(response) => response,
    };

    let media = response.content.values().next()?;
    media.schema.as_ref().map(SchemaGraph::from_schema_ref)
  }
}

fn parameter_ref(node: &ObjectOrReference<Parameter>) -> ParameterRef {
  match node {
    ObjectOrReference::Object(parameter) => ParameterRef::Inline(parameter.name.clone()),
    ObjectOrReference::Ref { ref_path } => {
      let name = ref_path.rsplit('/').next().unwrap_or(ref_path.as_str());
      ParameterRef::Component(name.to_string())
    }
  }
}

/// Convenience used by the components contract: an absent `components`
/// section still projects four empty maps.
impl ComponentIndex {
  pub fn is_empty(&self) -> bool {
    self.schemas.is_empty() && self.parameters.is_empty() && self.responses.is_empty() && self.request_bodies.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn index(json: &str) -> SpecIndex {
    let document: Document = serde_json::from_str(json).expect("failed to parse test spec");
    SpecIndex::new(document)
  }

  #[test]
  fn test_schemas_empty_when_absent() {
    let index = index(r#"{"openapi": "3.0.0", "info": {"title": "t", "version": "1"}, "paths": {}}"#);
    assert!(index.schemas().is_empty());
  }

  #[test]
  fn test_schema_entries_in_declaration_order() {
    let index = index(
      r#"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {},
        "components": {
          "schemas": {
            "Zebra": {"type": "string"},
            "Apple": {"type": "object", "description": "a fruit", "properties": {"id": {"type": "integer"}}}
          }
        }
      }"#,
    );
    let schemas = index.schemas();
    assert_eq!(schemas.len(), 2);
    assert_eq!(schemas[0].name, "Zebra");
    assert_eq!(schemas[1].name, "Apple");
    assert!(!schemas[0].required);
    assert_eq!(schemas[1].description.as_deref(), Some("a fruit"));
  }

  #[test]
  fn test_operations_flatten_in_path_then_method_order() {
    let index = index(
      r#"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {
          "/zebra": {"post": {"responses": {}}, "get": {"responses": {}}},
          "/alpha": {"delete": {"responses": {}}}
        }
      }"#,
    );
    let flattened: Vec<(String, Method)> = index
      .operations()
      .into_iter()
      .map(|entry| (entry.path, entry.method))
      .collect();
    assert_eq!(
      flattened,
      [
        ("/zebra".to_string(), Method::Get),
        ("/zebra".to_string(), Method::Post),
        ("/alpha".to_string(), Method::Delete),
      ]
    );
  }

  #[test]
  fn test_operation_parameters_merge_path_item_and_operation() {
    let index = index(
      r##"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {
          "/pet/{petId}": {
            "parameters": [{"name": "petId", "in": "path", "required": true}],
            "get": {
              "parameters": [
                {"name": "verbose", "in": "query"},
                {"$ref": "#/components/parameters/limit"}
              ],
              "responses": {}
            }
          }
        },
        "components": {
          "parameters": {"limit": {"name": "limit", "in": "query"}}
        }
      }"##,
    );
    let operations = index.operations();
    assert_eq!(
      operations[0].parameters,
      [
        ParameterRef::Inline("petId".to_string()),
        ParameterRef::Inline("verbose".to_string()),
        ParameterRef::Component("limit".to_string()),
      ]
    );
  }

  #[test]
  fn test_request_body_resolves_component_indirection() {
    let index = index(
      r##"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {
          "/pet": {
            "post": {
              "requestBody": {"$ref": "#/components/requestBodies/PetBody"},
              "responses": {}
            }
          }
        },
        "components": {
          "requestBodies": {
            "PetBody": {
              "content": {
                "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
              }
            }
          },
          "schemas": {"Pet": {"type": "object", "properties": {"name": {"type": "string"}}}}
        }
      }"##,
    );
    let operations = index.operations();
    assert_eq!(
      operations[0].request_body,
      Some(SchemaGraph::Reference("Pet".to_string()))
    );
  }

  #[test]
  fn test_responses_skip_entries_without_content() {
    let index = index(
      r##"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {
          "/pet": {
            "get": {
              "responses": {
                "200": {
                  "description": "ok",
                  "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
                },
                "204": {"description": "empty"}
              }
            }
          }
        },
        "components": {"schemas": {"Pet": {"type": "object"}}}
      }"##,
    );
    let operations = index.operations();
    assert_eq!(operations[0].responses.len(), 1);
    assert_eq!(
      operations[0].responses.get("200"),
      Some(&SchemaGraph::Reference("Pet".to_string()))
    );
  }

  #[test]
  fn test_components_project_empty_when_absent() {
    let index = index(r#"{"openapi": "3.0.0", "info": {"title": "t", "version": "1"}, "paths": {}}"#);
    let components = index.components();
    assert!(components.is_empty());
  }

  #[test]
  fn test_components_project_all_four_maps() {
    let index = index(
      r##"{
        "openapi": "3.0.0",
        "info": {"title": "t", "version": "1"},
        "paths": {},
        "components": {
          "schemas": {"Pet": {"type": "object"}},
          "parameters": {"limit": {"name": "limit", "in": "query"}},
          "responses": {
            "NotFound": {"description": "missing"},
            "PetResponse": {
              "description": "one pet",
              "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
            }
          },
          "requestBodies": {
            "PetBody": {"content": {"application/json": {"schema": {"type": "string"}}}}
          }
        }
      }"##,
    );
    let components = index.components();
    assert!(components.schemas.contains_key("Pet"));
    assert_eq!(components.parameters.get("limit").map(|p| p.location.as_str()), Some("query"));
    assert_eq!(components.responses.get("NotFound"), Some(&None));
    assert_eq!(
      components.responses.get("PetResponse"),
      Some(&Some(SchemaGraph::Reference("Pet".to_string())))
    );
    assert_eq!(components.request_bodies.get("PetBody"), Some(&Some(SchemaGraph::String)));
  }
}
