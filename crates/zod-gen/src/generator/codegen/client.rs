//! The axios client binding class (`api.ts`).
//!
//! Each binding issues exactly one request against the literal, still
//! templated path string. Substituting values into `{name}` placeholders is
//! deliberately left to the caller, as is validating the raw response.

use itertools::Itertools;

use super::{file_header, join_blocks};
use crate::generator::{
  naming::binding_name,
  spec_index::{ComponentIndex, OperationEntry, ParameterRef},
};

pub(crate) fn fragment(operation: &OperationEntry, components: &ComponentIndex) -> anyhow::Result<String> {
  let name = binding_name(operation.method, &operation.path);

  let mut args: Vec<String> = operation
    .parameters
    .iter()
    .map(|parameter| parameter_name(parameter, components))
    .collect();
  if operation.request_body.is_some() {
    args.push("data?: any".to_string());
  }

  let call_args = if operation.request_body.is_some() {
    format!("'{}', data", operation.path)
  } else {
    format!("'{}'", operation.path)
  };

  Ok(format!(
    "  async {name}({}): Promise<AxiosResponse<any>> {{\n    return this.client.{}({call_args});\n  }}",
    args.join(", "),
    operation.method.as_str(),
  ))
}

/// A referenced parameter resolves through `components.parameters`; when the
/// component is missing the ref tail still names the argument so the binding
/// stays well-formed.
fn parameter_name(parameter: &ParameterRef, components: &ComponentIndex) -> String {
  match parameter {
    ParameterRef::Inline(name) => name.clone(),
    ParameterRef::Component(key) => components
      .parameters
      .get(key)
      .map_or_else(|| key.clone(), |parameter| parameter.name.clone()),
  }
}

pub(crate) fn assemble(fragments: &[String]) -> String {
  let header = format!(
    "import axios, {{ AxiosInstance, AxiosResponse }} from 'axios';\n\n{}\n// Path parameters are not substituted into the URL template; callers supply\n// the final path themselves.",
    file_header("API client"),
  );

  let constructor = "export class ApiClient {\n  private client: AxiosInstance;\n\n  constructor(baseURL: string, config?: any) {\n    this.client = axios.create({\n      baseURL,\n      ...config\n    });\n  }";

  let mut class_parts = vec![constructor.to_string()];
  class_parts.extend_from_slice(fragments);
  let class_body = format!("{}\n}}", class_parts.iter().join("\n\n"));

  join_blocks(&[header, class_body])
}
