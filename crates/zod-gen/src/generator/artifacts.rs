//! Generated output values: named text artifacts plus fault sequences.

use strum::Display;

use super::faults::GenerationFault;

/// The five output units, each destined for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ArtifactKind {
  Types,
  Enums,
  Interfaces,
  Validators,
  ClientBindings,
}

impl ArtifactKind {
  pub fn file_name(self) -> &'static str {
    match self {
      Self::Types => "types.ts",
      Self::Enums => "enums.ts",
      Self::Interfaces => "interfaces.ts",
      Self::Validators => "schemas.ts",
      Self::ClientBindings => "api.ts",
    }
  }
}

/// One rendered output unit. Immutable once produced; the caller owns
/// persistence.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
  pub logical_name: String,
  pub kind: ArtifactKind,
  pub content: String,
}

impl GeneratedArtifact {
  pub fn new(kind: ArtifactKind, content: String) -> Self {
    Self {
      logical_name: kind.file_name().to_string(),
      kind,
      content,
    }
  }

  pub fn empty(kind: ArtifactKind) -> Self {
    Self::new(kind, String::new())
  }
}

/// Everything one `generate()` call produces. A non-empty fault sequence,
/// or a missing artifact, is the signal of partial failure; there is no
/// separate status code.
#[derive(Debug, Default)]
pub struct GenerationResult {
  pub artifacts: Vec<GeneratedArtifact>,
  pub errors: Vec<GenerationFault>,
  pub warnings: Vec<GenerationFault>,
}

impl GenerationResult {
  pub fn artifact(&self, kind: ArtifactKind) -> Option<&GeneratedArtifact> {
    self.artifacts.iter().find(|artifact| artifact.kind == kind)
  }
}
