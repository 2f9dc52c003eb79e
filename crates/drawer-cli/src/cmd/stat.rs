use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::Args;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

#[derive(Args)]
pub struct StatArgs {
    /// Path to inspect
    pub path: PathBuf,
}

pub fn run(args: StatArgs, json: bool) -> anyhow::Result<()> {
    let entry = super::resolve_entry(&args.path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        let modified: DateTime<Local> = entry.modified_at.into();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Field", "Value"]);
        table.add_row(vec!["Path".to_string(), entry.full_path.display().to_string()]);
        table.add_row(vec!["Kind".to_string(), entry.kind.to_string()]);
        table.add_row(vec![
            "Mode".to_string(),
            format!("{} ({:04o})", entry.permission_string(), entry.mode.bits()),
        ]);
        table.add_row(vec!["Links".to_string(), entry.link_count.to_string()]);
        table.add_row(vec![
            "Owner".to_string(),
            format!("{} ({})", entry.owner_name, entry.owner_id),
        ]);
        table.add_row(vec![
            "Group".to_string(),
            format!("{} ({})", entry.group_name, entry.group_id),
        ]);
        table.add_row(vec!["Size".to_string(), format!("{} bytes", entry.size_bytes)]);
        table.add_row(vec![
            "Modified".to_string(),
            modified.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
        println!("{table}");
    }
    Ok(())
}
