use super::super::args::{OutputFormat, TopArgs};
use super::helpers::open_manager;
use crate::exit_codes::SUCCESS;
use ranktrack_core::ProgrammeRanks;
use std::fmt::Write;
use std::path::Path;

pub(crate) fn run(config: &Path, db: &Path, args: TopArgs) -> anyhow::Result<i32> {
    let manager = open_manager(config, db)?;
    let groups = manager.get_top_ranks(args.year)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
        OutputFormat::Text => print!("{}", render_text(args.year, &groups)),
    }
    Ok(SUCCESS)
}

fn render_text(year: i32, groups: &[ProgrammeRanks]) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        let _ = writeln!(out, "no public ranks for {year}");
        return out;
    }
    for group in groups {
        let _ = writeln!(out, "{} ({})", group.programme, group.len());
        for entry in &group.entries {
            let _ = writeln!(out, "  {:>4}  {}", entry.rank, entry.username);
        }
    }
    out
}
