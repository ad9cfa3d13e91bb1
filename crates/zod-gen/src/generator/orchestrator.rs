//! The translation engine: a frozen snapshot of the index projections in,
//! a `GenerationResult` out.
//!
//! `generate()` never fails as a whole. Per-item problems become warnings
//! (the item degrades to an untyped rendering) or errors (dangling
//! references, a whole artifact kind that could not be assembled), and the
//! remaining schemas and operations still translate. Output order equals
//! input declaration order, so repeated runs over an unchanged document are
//! diff-stable.

use indexmap::IndexMap;

use super::{
  artifacts::{ArtifactKind, GeneratedArtifact, GenerationResult},
  codegen::{RenderContext, client, enums, interfaces, types, validators},
  faults::GenerationFault,
  naming::{binding_name, to_pascal_identifier},
  schema_graph::SchemaGraph,
  spec_index::{ComponentIndex, OperationEntry, SchemaEntry, SpecIndex},
};

/// Inclusion toggles, resolved by the caller before the engine runs. A
/// disabled category generates an empty artifact, never a fault.
#[derive(Debug, Clone, bon::Builder)]
pub struct GeneratorConfig {
  /// Runtime validators (`schemas.ts`).
  #[builder(default = true)]
  pub include_schemas: bool,
  /// Client bindings (`api.ts`).
  #[builder(default = true)]
  pub include_paths: bool,
  /// Structural declarations (`types.ts`, `enums.ts`, `interfaces.ts`).
  #[builder(default = true)]
  pub include_components: bool,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

pub struct ArtifactGenerator {
  schemas: Vec<SchemaEntry>,
  operations: Vec<OperationEntry>,
  components: ComponentIndex,
  config: GeneratorConfig,
}

impl ArtifactGenerator {
  pub fn new(
    schemas: Vec<SchemaEntry>,
    operations: Vec<OperationEntry>,
    components: ComponentIndex,
    config: GeneratorConfig,
  ) -> Self {
    Self {
      schemas,
      operations,
      components,
      config,
    }
  }

  /// Snapshots the three projections of an index. The generator never
  /// re-queries the source document afterwards.
  pub fn from_index(index: &SpecIndex, config: GeneratorConfig) -> Self {
    Self::new(index.schemas(), index.operations(), index.components(), config)
  }

  pub fn generate(&self) -> GenerationResult {
    let mut faults = Vec::new();
    self.check_shapes(&mut faults);
    self.check_references(&mut faults);
    self.check_collisions(&mut faults);

    let ctx = RenderContext::new(&self.components.schemas);
    let mut artifacts = Vec::new();

    if self.config.include_components {
      let assembled = self.assemble_types(&ctx, &mut faults);
      push_assembled(&mut artifacts, &mut faults, ArtifactKind::Types, assembled);
      if let Some(artifact) = self.assemble_enums(&mut faults) {
        artifacts.push(artifact);
      }
      let assembled = self.assemble_interfaces(&ctx, &mut faults);
      push_assembled(&mut artifacts, &mut faults, ArtifactKind::Interfaces, assembled);
    } else {
      artifacts.push(GeneratedArtifact::empty(ArtifactKind::Types));
      artifacts.push(GeneratedArtifact::empty(ArtifactKind::Enums));
      artifacts.push(GeneratedArtifact::empty(ArtifactKind::Interfaces));
    }

    if self.config.include_schemas {
      let assembled = self.assemble_validators(&ctx, &mut faults);
      push_assembled(&mut artifacts, &mut faults, ArtifactKind::Validators, assembled);
    } else {
      artifacts.push(GeneratedArtifact::empty(ArtifactKind::Validators));
    }

    if self.config.include_paths {
      let assembled = self.assemble_client(&mut faults);
      push_assembled(&mut artifacts, &mut faults, ArtifactKind::ClientBindings, assembled);
    } else {
      artifacts.push(GeneratedArtifact::empty(ArtifactKind::ClientBindings));
    }

    let (errors, warnings) = faults.into_iter().partition(GenerationFault::is_error);
    GenerationResult {
      artifacts,
      errors,
      warnings,
    }
  }

  fn assemble_types(&self, ctx: &RenderContext<'_>, faults: &mut Vec<GenerationFault>) -> anyhow::Result<String> {
    let mut fragments = Vec::new();
    for entry in &self.schemas {
      match types::fragment(entry, ctx) {
        Ok(fragment) => fragments.push(fragment),
        Err(error) => faults.push(GenerationFault::SchemaRenderFailed {
          schema: entry.name.clone(),
          error: error.to_string(),
        }),
      }
    }
    Ok(types::assemble(&fragments))
  }

  /// The enums artifact only exists when some schema contributes members.
  fn assemble_enums(&self, faults: &mut Vec<GenerationFault>) -> Option<GeneratedArtifact> {
    let mut fragments = Vec::new();
    for entry in &self.schemas {
      match enums::fragment(entry) {
        Ok(Some(fragment)) => fragments.push(fragment),
        Ok(None) => {}
        Err(error) => faults.push(GenerationFault::SchemaRenderFailed {
          schema: entry.name.clone(),
          error: error.to_string(),
        }),
      }
    }

    if fragments.is_empty() {
      return None;
    }
    Some(GeneratedArtifact::new(ArtifactKind::Enums, enums::assemble(&fragments)))
  }

  fn assemble_interfaces(&self, ctx: &RenderContext<'_>, faults: &mut Vec<GenerationFault>) -> anyhow::Result<String> {
    let mut fragments = Vec::new();
    for entry in &self.schemas {
      match interfaces::fragment(entry, ctx) {
        Ok(Some(fragment)) => fragments.push(fragment),
        Ok(None) => {}
        Err(error) => faults.push(GenerationFault::SchemaRenderFailed {
          schema: entry.name.clone(),
          error: error.to_string(),
        }),
      }
    }
    Ok(interfaces::assemble(&fragments))
  }

  fn assemble_validators(&self, ctx: &RenderContext<'_>, faults: &mut Vec<GenerationFault>) -> anyhow::Result<String> {
    let mut fragments = Vec::new();
    for entry in &self.schemas {
      match validators::fragment(entry, ctx) {
        Ok(fragment) => fragments.push(fragment),
        Err(error) => faults.push(GenerationFault::SchemaRenderFailed {
          schema: entry.name.clone(),
          error: error.to_string(),
        }),
      }
    }
    Ok(validators::assemble(&fragments))
  }

  fn assemble_client(&self, faults: &mut Vec<GenerationFault>) -> anyhow::Result<String> {
    let mut fragments = Vec::new();
    for operation in &self.operations {
      match client::fragment(operation, &self.components) {
        Ok(fragment) => fragments.push(fragment),
        Err(error) => faults.push(GenerationFault::BindingRenderFailed {
          method: operation.method.to_string(),
          path: operation.path.clone(),
          error: error.to_string(),
        }),
      }
    }
    Ok(client::assemble(&fragments))
  }

  /// Schemas that lowered to the explicit untyped variant are reported once;
  /// every renderer falls back to `any` for them.
  fn check_shapes(&self, faults: &mut Vec<GenerationFault>) {
    for entry in &self.schemas {
      if entry.graph == SchemaGraph::Untyped {
        faults.push(GenerationFault::UnknownShape {
          schema: entry.name.clone(),
        });
      }
    }
  }

  /// Every reference reachable from a schema entry must name a schema in the
  /// frozen snapshot. Dangling targets are errors; the referencing field
  /// still renders as the untyped fallback.
  fn check_references(&self, faults: &mut Vec<GenerationFault>) {
    for entry in &self.schemas {
      for target in entry.graph.references() {
        if !self.components.schemas.contains_key(&target) {
          faults.push(GenerationFault::UnresolvedReference {
            schema: entry.name.clone(),
            target,
          });
        }
      }
    }
  }

  /// Distinct names that Pascal-case to the same emitted identifier, checked
  /// per namespace (schema declarations and client bindings), one warning
  /// per colliding pair.
  fn check_collisions(&self, faults: &mut Vec<GenerationFault>) {
    let schema_names = self
      .schemas
      .iter()
      .map(|entry| (entry.name.clone(), to_pascal_identifier(&entry.name)));
    collisions(schema_names, faults);

    let binding_names = self.operations.iter().map(|operation| {
      (
        format!("{} {}", operation.method, operation.path),
        binding_name(operation.method, &operation.path),
      )
    });
    collisions(binding_names, faults);
  }
}

/// A failed kind is omitted from the artifact sequence; the run still
/// returns whatever else succeeded.
fn push_assembled(
  artifacts: &mut Vec<GeneratedArtifact>,
  faults: &mut Vec<GenerationFault>,
  kind: ArtifactKind,
  assembled: anyhow::Result<String>,
) {
  match assembled {
    Ok(content) => artifacts.push(GeneratedArtifact::new(kind, content)),
    Err(error) => faults.push(GenerationFault::ArtifactAssemblyFailed {
      kind,
      error: error.to_string(),
    }),
  }
}

fn collisions(pairs: impl Iterator<Item = (String, String)>, faults: &mut Vec<GenerationFault>) {
  let mut seen: IndexMap<String, String> = IndexMap::new();
  for (raw, identifier) in pairs {
    match seen.get(&identifier) {
      Some(first) if *first != raw => faults.push(GenerationFault::NamingCollision {
        first: first.clone(),
        second: raw,
        identifier,
      }),
      Some(_) => {}
      None => {
        seen.insert(identifier, raw);
      }
    }
  }
}
