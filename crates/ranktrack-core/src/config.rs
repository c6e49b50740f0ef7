use crate::catalog::ProgrammeCatalog;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ranktrack configuration file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RanksConfig {
    /// Admission cycle that automatic offer dates are stamped with.
    pub current_year: i32,

    /// Day of `current_year` used as the automatic offer date.
    /// Default: April 15.
    #[serde(default)]
    pub offer_cutoff: OfferCutoff,

    #[serde(default)]
    pub programmes: ProgrammeCatalog,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OfferCutoff {
    pub month: u32,
    pub day: u32,
}

impl Default for OfferCutoff {
    fn default() -> Self {
        Self { month: 4, day: 15 }
    }
}

impl RanksConfig {
    pub fn new(current_year: i32, programmes: ProgrammeCatalog) -> Self {
        Self {
            current_year,
            offer_cutoff: OfferCutoff::default(),
            programmes,
        }
    }

    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        let cfg: RanksConfig = serde_yaml::from_str(s).context("parse ranktrack config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// The offer date stamped on ranks that fall inside capacity.
    pub fn default_offer_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.current_year,
            self.offer_cutoff.month,
            self.offer_cutoff.day,
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_offer_date().is_none() {
            bail!(
                "offer_cutoff {:02}-{:02} is not a valid date in {}",
                self.offer_cutoff.month,
                self.offer_cutoff.day,
                self.current_year
            );
        }
        for (id, programme) in self.programmes.iter() {
            if let Some((year, places)) = programme.places.iter().find(|(_, p)| **p < 0) {
                bail!("programme '{id}' has negative places ({places}) for {year}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
current_year: 2024
programmes:
  CS:
    places: { 2023: 45, 2024: 50 }
  EE:
    places: { 2024: 20 }
"#;

    #[test]
    fn test_parse_sample_with_default_cutoff() {
        let cfg = RanksConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(cfg.current_year, 2024);
        assert_eq!(cfg.offer_cutoff, OfferCutoff { month: 4, day: 15 });
        assert_eq!(
            cfg.default_offer_date(),
            NaiveDate::from_ymd_opt(2024, 4, 15)
        );
        assert_eq!(cfg.programmes.places("CS", 2023), Some(45));
    }

    #[test]
    fn test_custom_cutoff() {
        let cfg =
            RanksConfig::from_yaml_str("current_year: 2025\noffer_cutoff: { month: 5 }\n").unwrap();
        assert_eq!(
            cfg.default_offer_date(),
            NaiveDate::from_ymd_opt(2025, 5, 15)
        );
        assert!(cfg.programmes.is_empty());
    }

    #[test]
    fn test_rejects_impossible_cutoff() {
        let err = RanksConfig::from_yaml_str(
            "current_year: 2023\noffer_cutoff: { month: 2, day: 30 }\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a valid date"));
    }

    #[test]
    fn test_rejects_negative_places() {
        let err = RanksConfig::from_yaml_str(
            "current_year: 2024\nprogrammes:\n  CS:\n    places: { 2024: -1 }\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("negative places"));
    }

    #[test]
    fn test_load_reports_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        let cfg = RanksConfig::load(f.path()).unwrap();
        assert_eq!(cfg.programmes.len(), 2);

        let missing = f.path().with_extension("missing.yaml");
        let err = RanksConfig::load(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }
}
