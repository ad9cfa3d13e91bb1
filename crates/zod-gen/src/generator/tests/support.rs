use crate::{
  generator::{
    artifacts::GenerationResult,
    orchestrator::{ArtifactGenerator, GeneratorConfig},
    spec_index::SpecIndex,
  },
  openapi::Document,
};

pub(super) fn parse_document(spec_json: &str) -> Document {
  serde_json::from_str(spec_json).expect("failed to parse test spec")
}

pub(super) fn index(spec_json: &str) -> SpecIndex {
  SpecIndex::new(parse_document(spec_json))
}

pub(super) fn generate(spec_json: &str) -> GenerationResult {
  generate_with(spec_json, GeneratorConfig::default())
}

pub(super) fn generate_with(spec_json: &str, config: GeneratorConfig) -> GenerationResult {
  ArtifactGenerator::from_index(&index(spec_json), config).generate()
}

pub(super) fn assert_contains(content: &str, expected: &str, context: &str) {
  assert!(content.contains(expected), "missing {context}: expected '{expected}' in:\n{content}");
}

pub(super) const PETSTORE_SPEC: &str = r##"{
  "openapi": "3.0.0",
  "info": {"title": "Petstore", "version": "1.0.0"},
  "paths": {
    "/pet": {
      "post": {
        "operationId": "addPet",
        "requestBody": {
          "content": {
            "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
          }
        },
        "responses": {
          "200": {
            "description": "ok",
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
          }
        }
      }
    },
    "/pet/{petId}": {
      "get": {
        "operationId": "getPetById",
        "parameters": [{"name": "petId", "in": "path", "required": true, "schema": {"type": "integer"}}],
        "responses": {
          "200": {
            "description": "ok",
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
          }
        }
      }
    }
  },
  "components": {
    "schemas": {
      "Pet": {
        "type": "object",
        "required": ["name", "photoUrls"],
        "properties": {
          "id": {"type": "integer"},
          "name": {"type": "string"},
          "status": {"type": "string", "enum": ["available", "pending", "sold"]},
          "photoUrls": {"type": "array", "items": {"type": "string"}}
        }
      }
    }
  }
}"##;
