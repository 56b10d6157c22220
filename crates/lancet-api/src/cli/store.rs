//! Vector store CLI commands: add, query, config.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lancet_types::query::{VectorStoreQuery, VectorStoreQueryResult};
use lancet_types::record::EmbeddingRecord;

use crate::state::AppState;

/// Add the embedding records stored in a JSON file.
///
/// # Examples
///
/// ```bash
/// lancet add records.json
/// lancet --uri ./db --table docs add records.json --json
/// ```
pub async fn add(state: &AppState, file: &Path, json: bool, quiet: bool) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records: Vec<EmbeddingRecord> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of records", file.display()))?;

    let ids = state.store.add(&records).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else if !quiet {
        println!(
            "  {} Added {} record{}",
            style("*").green().bold(),
            style(ids.len()).bold(),
            if ids.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Print the records nearest to `vector`.
///
/// # Examples
///
/// ```bash
/// lancet query --vector 1,0 -k 3
/// ```
pub async fn query(state: &AppState, vector: Vec<f32>, top_k: usize, json: bool) -> Result<()> {
    let result = state
        .store
        .query(&VectorStoreQuery::new(vector, top_k))
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!();
        println!("  {} No matching records.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    println!();
    println!("{}", result_table(&result));
    println!();

    Ok(())
}

/// Print the store configuration as JSON.
pub fn config(state: &AppState) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&state.store.config_dict())?);
    Ok(())
}

fn result_table(result: &VectorStoreQueryResult) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Document").fg(Color::White),
        Cell::new("Score").fg(Color::White),
        Cell::new("Text").fg(Color::White),
    ]);

    for (node, score, id) in result.iter() {
        table.add_row(vec![
            Cell::new(id).fg(Color::Cyan),
            Cell::new(node.source_doc_id().unwrap_or("-")).fg(Color::DarkGrey),
            Cell::new(format!("{score:.4}")).fg(Color::Yellow),
            Cell::new(truncate(&node.text, 60)),
        ]);
    }

    table
}

/// Shorten `text` to at most `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
