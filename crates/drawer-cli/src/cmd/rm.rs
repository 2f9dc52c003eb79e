use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use drawer_core::{delete, Entry, EntryKind};

#[derive(Args)]
pub struct RmArgs {
    /// Path of the entry to delete
    pub path: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: RmArgs, json: bool) -> anyhow::Result<()> {
    let entry = super::resolve_entry(&args.path)?;

    if !args.force && !confirm(&entry)? {
        if json {
            println!(
                "{}",
                serde_json::json!({ "removed": false, "path": entry.full_path })
            );
        } else {
            println!("Aborted");
        }
        return Ok(());
    }

    delete(&entry)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "removed": true, "path": entry.full_path })
        );
    } else {
        println!("Removed {}", entry.full_path.display());
    }
    Ok(())
}

/// Anything except an explicit `y` declines.
fn confirm(entry: &Entry) -> anyhow::Result<bool> {
    if entry.kind == EntryKind::Directory {
        print!(
            "Recursively delete {} and all its contents? [y/N] ",
            entry.full_path.display()
        );
    } else {
        print!("Delete {}? [y/N] ", entry.full_path.display());
    }
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}
