use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::{naming::binding_name, spec_index::SpecIndex},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::spec::SpecLoader,
};

async fn load_index(input: &str) -> anyhow::Result<SpecIndex> {
  let document = SpecLoader::open(input).await?.parse()?;
  Ok(SpecIndex::new(document))
}

fn new_table() -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  table
}

fn print_title(index: &SpecIndex, colors: &Colors) {
  use crossterm::style::Stylize;
  let info = &index.document().info;
  println!(
    "{} {}",
    info.title.clone().with(colors.primary()),
    format!("v{}", info.version).with(colors.value())
  );
}

pub async fn list_operations(input: &str, colors: &Colors) -> anyhow::Result<()> {
  let index = load_index(input).await?;
  print_title(&index, colors);

  let mut table = new_table();
  let mut header = Row::new();
  header.add_cell(Cell::new("BINDING").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("METHOD").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("PATH").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("RESPONSES").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("SUMMARY").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for operation in index.operations() {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(binding_name(operation.method, &operation.path))
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(operation.method.to_string())
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&operation.path).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(operation.responses.keys().join(", ")).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(operation.summary.as_deref().unwrap_or_default()).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

pub async fn list_schemas(input: &str, colors: &Colors) -> anyhow::Result<()> {
  let index = load_index(input).await?;
  print_title(&index, colors);

  let mut table = new_table();
  let mut header = Row::new();
  header.add_cell(Cell::new("NAME").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("SHAPE").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("DESCRIPTION").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for entry in index.schemas() {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&entry.name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(entry.graph.shape_name()).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(Cell::new(entry.description.as_deref().unwrap_or_default()).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}
