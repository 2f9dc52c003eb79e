use std::path::PathBuf;

use clap::Args;
use drawer_core::{create, Config};

#[derive(Args)]
pub struct NewArgs {
    /// Directory the object is created in
    pub directory: PathBuf,

    /// Name of the new object; a trailing separator makes a directory
    pub name: String,
}

pub fn run(args: NewArgs, json: bool) -> anyhow::Result<()> {
    let cfg = Config::default();
    create(&cfg, &args.directory, &args.name)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "created": args.name, "in": args.directory })
        );
    } else {
        println!("Created {} in {}", args.name, args.directory.display());
    }
    Ok(())
}
