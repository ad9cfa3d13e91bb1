//! Fault values collected while generating.
//!
//! Faults are data in the generation result, never propagated errors: one
//! bad schema must not blank out the rest of the output. Severity decides
//! which of the result's two sequences a fault lands in.

use strum::Display;

use super::artifacts::ArtifactKind;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationFault {
  #[strum(to_string = "Schema '{schema}' has no recognizable shape; emitted as untyped")]
  UnknownShape { schema: String },
  #[strum(to_string = "Schema '{schema}' references '{target}', which is not defined in components.schemas")]
  UnresolvedReference { schema: String, target: String },
  #[strum(to_string = "'{first}' and '{second}' both emit the identifier '{identifier}'; the later declaration wins")]
  NamingCollision {
    first: String,
    second: String,
    identifier: String,
  },
  #[strum(to_string = "Failed to render schema '{schema}': {error}")]
  SchemaRenderFailed { schema: String, error: String },
  #[strum(to_string = "Failed to render binding for {method} {path}: {error}")]
  BindingRenderFailed {
    method: String,
    path: String,
    error: String,
  },
  #[strum(to_string = "Failed to assemble {kind} artifact: {error}")]
  ArtifactAssemblyFailed { kind: ArtifactKind, error: String },
}

impl GenerationFault {
  /// Errors mark output the caller cannot trust (a dangling reference, a
  /// whole artifact kind missing); everything else degrades gracefully and
  /// is reported as a warning.
  pub fn is_error(&self) -> bool {
    matches!(
      self,
      Self::UnresolvedReference { .. } | Self::ArtifactAssemblyFailed { .. }
    )
  }
}
