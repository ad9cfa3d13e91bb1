use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::openapi::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  /// Guesses the format from content when no extension is available: a JSON
  /// document starts with `{`.
  #[must_use]
  pub fn sniff(content: &[u8]) -> Self {
    match content.iter().find(|byte| !byte.is_ascii_whitespace()) {
      Some(b'{') => Self::Json,
      _ => Self::Yaml,
    }
  }
}

enum SpecBytes {
  Mapped(AsyncMmapFile),
  Fetched(Vec<u8>),
}

impl SpecBytes {
  fn as_slice(&self) -> &[u8] {
    match self {
      Self::Mapped(file) => file.as_slice(),
      Self::Fetched(bytes) => bytes.as_slice(),
    }
  }
}

pub struct SpecLoader {
  bytes: SpecBytes,
  format: SpecFormat,
}

impl SpecLoader {
  /// Opens a local file (memory-mapped) or fetches an `http(s)://` URL.
  pub async fn open(input: &str) -> anyhow::Result<Self> {
    if input.starts_with("http://") || input.starts_with("https://") {
      let response = reqwest::get(input).await?.error_for_status()?;
      let body = response.bytes().await?.to_vec();
      let format = SpecFormat::sniff(&body);
      return Ok(Self {
        bytes: SpecBytes::Fetched(body),
        format,
      });
    }

    let path = Path::new(input);
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self {
      bytes: SpecBytes::Mapped(file),
      format,
    })
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    match self.format {
      SpecFormat::Json => Ok(serde_json::from_slice(self.bytes.as_slice())?),
      SpecFormat::Yaml => Ok(serde_yaml::from_slice(self.bytes.as_slice())?),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn test_format_from_extension() {
    assert_eq!(SpecFormat::from_extension("yaml"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_extension("yml"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_extension("json"), SpecFormat::Json);
    assert_eq!(SpecFormat::from_extension("txt"), SpecFormat::Json);
  }

  #[test]
  fn test_format_sniffing() {
    assert_eq!(SpecFormat::sniff(b"  {\"openapi\": \"3.0.0\"}"), SpecFormat::Json);
    assert_eq!(SpecFormat::sniff(b"openapi: 3.0.0\n"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::sniff(b""), SpecFormat::Yaml);
  }

  #[tokio::test]
  async fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
      file,
      r#"{{"openapi": "3.0.0", "info": {{"title": "File", "version": "1"}}, "paths": {{}}}}"#
    )
    .unwrap();

    let loader = SpecLoader::open(file.path().to_str().unwrap()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.info.title, "File");
  }

  #[tokio::test]
  async fn test_load_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
      file,
      "openapi: 3.0.0\ninfo:\n  title: Yaml\n  version: '1'\npaths: {{}}\n"
    )
    .unwrap();

    let loader = SpecLoader::open(file.path().to_str().unwrap()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.info.title, "Yaml");
  }

  #[tokio::test]
  async fn test_missing_file_is_an_error() {
    assert!(SpecLoader::open("/definitely/not/here.json").await.is_err());
  }
}
