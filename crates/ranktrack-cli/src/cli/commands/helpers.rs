use anyhow::Context;
use ranktrack_core::{RankManager, RanksConfig, SqliteRankStore};
use std::path::Path;
use tracing::debug;

pub(crate) fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory '{}'", parent.display()))?;
        }
    }
    Ok(())
}

pub(crate) fn open_store(db: &Path) -> anyhow::Result<SqliteRankStore> {
    ensure_parent_dir(db)?;
    Ok(SqliteRankStore::open(db)?)
}

pub(crate) fn open_manager(
    config: &Path,
    db: &Path,
) -> anyhow::Result<RankManager<SqliteRankStore>> {
    let cfg = RanksConfig::load(config)?;
    debug!(
        config = %config.display(),
        current_year = cfg.current_year,
        programmes = cfg.programmes.len(),
        "config loaded"
    );
    let store = open_store(db)?;
    Ok(RankManager::from_config(&cfg, store)?)
}
