use std::path::PathBuf;

use clap::Args;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use drawer_core::{format_entry, scan, Config, FormattedEntry, SegmentStyle};

#[derive(Args)]
pub struct LsArgs {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include hidden entries
    #[arg(short, long)]
    pub all: bool,
}

pub fn run(args: LsArgs, json: bool) -> anyhow::Result<()> {
    let cfg = Config::builder().show_hidden(args.all).build();
    let entries = scan(&cfg, &args.path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            print_line(&format_entry(&cfg, entry));
        }
    }
    Ok(())
}

fn print_line(line: &FormattedEntry) {
    for segment in &line.segments {
        match color_for(segment.style) {
            Some(color) => print!("{}{}{}", SetForegroundColor(color), segment.text, ResetColor),
            None => print!("{}", segment.text),
        }
    }
    println!();
}

fn color_for(style: SegmentStyle) -> Option<Color> {
    match style {
        SegmentStyle::Id => Some(Color::DarkGrey),
        SegmentStyle::Permissions => Some(Color::DarkGreen),
        SegmentStyle::LinkCount => Some(Color::DarkGrey),
        SegmentStyle::Owner => Some(Color::Yellow),
        SegmentStyle::SizeValue => Some(Color::Cyan),
        SegmentStyle::SizeUnit => Some(Color::DarkCyan),
        SegmentStyle::Timestamp => Some(Color::DarkMagenta),
        SegmentStyle::Directory => Some(Color::Blue),
        SegmentStyle::Dotfile => Some(Color::DarkGrey),
        SegmentStyle::File | SegmentStyle::Plain => None,
    }
}
