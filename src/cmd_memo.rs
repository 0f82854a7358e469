//! Memo subcommand handlers for ChronoLog.

use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use chronolog_store::{MemoStore, MemoSummary};

/// Create the workspace directories.
pub(crate) async fn memo_init(store: &MemoStore) -> Result<(), Box<dyn std::error::Error>> {
    let created = store.initialize_workspace_dirs().await?;
    if created.is_empty() {
        println!("Workspace already initialized at {}", store.clog_dir().display());
    }
    for dir in created {
        println!("Created {}", dir.display());
    }
    Ok(())
}

/// Save a new memo from a file or stdin.
pub(crate) async fn memo_new(
    store: &MemoStore,
    file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file).await?;
    let saved = store.save_new(&text).await?;
    println!("{}", saved.id);
    info!("Memo written to {}", saved.path.display());
    Ok(())
}

/// Replace the body of an existing memo.
pub(crate) async fn memo_edit(
    store: &MemoStore,
    id: &str,
    file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file).await?;
    let saved = store.save_existing(&text, id).await?;
    println!("{}", saved.id);
    Ok(())
}

/// Print a memo body, or the whole stored file with `raw`.
pub(crate) async fn memo_show(
    store: &MemoStore,
    id: &str,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if raw {
        print!("{}", store.read_raw(id).await?);
        return Ok(());
    }

    let memo = store.get_memo(id).await?;
    if let Some(title) = &memo.preamble.title {
        println!("Memo: {}", title);
        println!("{}", "=".repeat(50));
    }
    if let Some(created) = &memo.preamble.created {
        println!("Created: {}", created);
        println!();
    }
    println!("{}", memo.body);
    Ok(())
}

/// List the latest memos.
pub(crate) async fn memo_list(
    store: &MemoStore,
    limit: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let memos = store.list_latest(limit).await?;
    debug!("Listing {} of at most {} memos", memos.len(), limit);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&memos)?;
            println!("{}", json);
        }
        _ => {
            if memos.is_empty() {
                println!("No memos found.");
                return Ok(());
            }
            print!("{}", render_table(&memos));
        }
    }

    Ok(())
}

fn render_table(memos: &[MemoSummary]) -> String {
    let mut out = format!("{:<20} {:<30} {}\n", "CREATED", "TITLE", "SUMMARY");
    out.push_str(&"-".repeat(80));
    out.push('\n');
    for memo in memos {
        out.push_str(&format!(
            "{:<20} {:<30} {}\n",
            memo.datetime,
            memo.title,
            memo.summary.replace('\n', " ")
        ));
    }
    out
}

async fn read_input(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}
