use crate::exit_codes::SUCCESS;
use ranktrack_core::RanksConfig;
use std::path::Path;

pub(crate) fn run(config: &Path) -> anyhow::Result<i32> {
    let cfg = RanksConfig::load(config)?;
    println!(
        "current year {} (offer date {:02}-{:02})",
        cfg.current_year, cfg.offer_cutoff.month, cfg.offer_cutoff.day
    );
    for (id, programme) in cfg.programmes.iter() {
        let places: Vec<String> = programme
            .places
            .iter()
            .map(|(year, places)| format!("{year}={places}"))
            .collect();
        println!("{id}\t{}", places.join(" "));
    }
    Ok(SUCCESS)
}
