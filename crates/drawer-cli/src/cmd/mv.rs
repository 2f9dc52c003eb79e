use std::path::PathBuf;

use clap::Args;
use drawer_core::rename;

#[derive(Args)]
pub struct MvArgs {
    /// Path of the entry to rename
    pub path: PathBuf,

    /// New name within the same directory
    pub new_name: String,
}

pub fn run(args: MvArgs, json: bool) -> anyhow::Result<()> {
    let entry = super::resolve_entry(&args.path)?;
    rename(&entry, &args.new_name)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "renamed": { "from": entry.full_path, "to": args.new_name } })
        );
    } else {
        println!("Moved {} → {}", entry.name, args.new_name);
    }
    Ok(())
}
