//! Enumeration declarations (`enums.ts`).

use itertools::Itertools;

use super::{file_header, join_blocks};
use crate::generator::{
  naming::{enum_member_name, to_pascal_identifier},
  spec_index::SchemaEntry,
};

/// One enumeration per schema entry with reachable enum literals, named after
/// the entry. String values become their upper-cased member; anything else
/// gets a positional `VALUE_<n>` member, which is always unique and a valid
/// identifier.
pub(crate) fn fragment(entry: &SchemaEntry) -> anyhow::Result<Option<String>> {
  let values = entry.graph.enum_values();
  if values.is_empty() {
    return Ok(None);
  }

  let name = to_pascal_identifier(&entry.name);
  let members: Vec<String> = values
    .into_iter()
    .enumerate()
    .map(|(index, value)| Ok(format!("  {} = {},", enum_member_name(value, index), serde_json::to_string(value)?)))
    .try_collect::<_, _, serde_json::Error>()?;

  Ok(Some(format!("export enum {name} {{\n{}\n}}", members.join("\n"))))
}

pub(crate) fn assemble(fragments: &[String]) -> String {
  let mut blocks = vec![file_header("enums")];
  blocks.extend_from_slice(fragments);
  join_blocks(&blocks)
}
