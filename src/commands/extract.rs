use std::path::Path;

use anyhow::{Context, Result};
use gentables::TableShapeError;
use gentables::model::{InferPayload, Table, TableSet};
use gentables::render::{lossy_pipe_rows, table_to_csv, table_to_markdown, to_pipe_text};
use gentables::util::{
    now_utc_string, read_text_input, sha256_hex, write_json_pretty, write_text_output,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{ExtractArgs, OutputFormat};
use crate::commands::load_extractor;

#[derive(Debug, Clone, Serialize)]
pub struct ExtractRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub input_bytes: usize,
    pub format: String,
    pub strict: bool,
    pub table_count: usize,
    pub tables: Vec<TableSummary>,
    pub shape_errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub index: usize,
    pub columns: Vec<String>,
    pub row_count: usize,
    pub shape_ok: bool,
}

pub fn run(args: ExtractArgs) -> Result<()> {
    let extractor = load_extractor(args.config.as_deref())?;
    let text = read_text_input(&args.input)?;
    let tables = extractor.extract(&text);

    info!(
        input = %args.input.display(),
        bytes = text.len(),
        tables = tables.len(),
        "extracted tables"
    );

    let (materialized, shape_errors) = if args.strict {
        let materialized = tables
            .materialize_all()
            .context("strict extraction found a malformed table")?;
        (materialized, Vec::new())
    } else {
        tables.materialize_partial()
    };

    for err in &shape_errors {
        warn!(
            table = err.table_index,
            row = err.row_index,
            expected = err.expected,
            found = err.found,
            "table shape mismatch"
        );
    }

    let rendered = render_tables(args.format, &tables, &materialized, &args.info)?;
    write_text_output(args.output.as_deref(), &rendered)?;
    if let Some(output) = &args.output {
        info!(path = %output.display(), format = args.format.as_str(), "wrote tables");
    }

    if let Some(manifest_path) = &args.manifest_path {
        let manifest = build_manifest(&args, &text, &tables, &shape_errors);
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote extract run manifest");
    }

    Ok(())
}

fn render_tables(
    format: OutputFormat,
    tables: &TableSet,
    materialized: &[Table],
    info: &str,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(tables).context("failed to serialize tables")?
        }
        OutputFormat::Records => {
            let payload = InferPayload::from_tables(info, materialized);
            serde_json::to_string_pretty(&payload).context("failed to serialize records")?
        }
        OutputFormat::Markdown => tables
            .iter()
            .map(table_to_markdown)
            .collect::<Vec<String>>()
            .join("\n\n"),
        OutputFormat::Csv => tables
            .iter()
            .map(table_to_csv)
            .collect::<Vec<String>>()
            .join("\n\n"),
        OutputFormat::Pipe => {
            for (table, row) in lossy_pipe_rows(tables) {
                warn!(table, row, "body row has empty cells that pipe output cannot preserve");
            }
            to_pipe_text(tables)
        }
    };

    Ok(rendered)
}

fn build_manifest(
    args: &ExtractArgs,
    text: &str,
    tables: &TableSet,
    shape_errors: &[TableShapeError],
) -> ExtractRunManifest {
    let summaries = tables
        .iter()
        .enumerate()
        .map(|(index, table)| TableSummary {
            index,
            columns: table.header.clone(),
            row_count: table.rows.len(),
            shape_ok: !shape_errors.iter().any(|err| err.table_index == index),
        })
        .collect();

    ExtractRunManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        input_path: display_input(&args.input),
        input_sha256: sha256_hex(text.as_bytes()),
        input_bytes: text.len(),
        format: args.format.as_str().to_string(),
        strict: args.strict,
        table_count: tables.len(),
        tables: summaries,
        shape_errors: shape_errors.iter().map(ToString::to_string).collect(),
    }
}

fn display_input(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
