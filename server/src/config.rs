use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use products_hr::{Latency, SeedOptions, seed::DEFAULT_TOTAL};

const DEFAULT_SESSION_DIR: &str = ".staff-directory";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding the persisted session.
    pub session_dir: PathBuf,
    pub latency: Latency,
    pub seed_total: usize,
    pub seed_rng: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            latency: Latency::default(),
            seed_total: DEFAULT_TOTAL,
            seed_rng: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let session_dir = lookup("SESSION_DIR")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_dir);

        let latency = parse_var::<u64>(&lookup, "DIRECTORY_LATENCY_MS")?
            .map(|ms| Latency::uniform(Duration::from_millis(ms)))
            .unwrap_or(defaults.latency);

        let seed_total = parse_var(&lookup, "SEED_TOTAL")?.unwrap_or(defaults.seed_total);
        let seed_rng = parse_var(&lookup, "SEED_RNG")?;

        Ok(Self {
            session_dir,
            latency,
            seed_total,
            seed_rng,
        })
    }

    pub fn seed_options(&self, today: NaiveDate) -> SeedOptions {
        let options = SeedOptions::new(today).with_total(self.seed_total);
        match self.seed_rng {
            Some(seed) => options.with_rng_seed(seed),
            None => options,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|err| anyhow!("invalid {}={:?}: {}", key, raw, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.session_dir, PathBuf::from(".staff-directory"));
        assert_eq!(cfg.latency, Latency::default());
        assert_eq!(cfg.seed_total, 50);
        assert_eq!(cfg.seed_rng, None);
    }

    #[test]
    fn latency_override_applies_to_every_call() {
        let cfg = config(&[("DIRECTORY_LATENCY_MS", "0")]).unwrap();
        assert_eq!(cfg.latency, Latency::none());
    }

    #[test]
    fn seed_settings_are_parsed() {
        let cfg = config(&[("SEED_TOTAL", "12"), ("SEED_RNG", "99"), ("SESSION_DIR", "/tmp/x")])
            .unwrap();
        assert_eq!(cfg.seed_total, 12);
        assert_eq!(cfg.seed_rng, Some(99));
        assert_eq!(cfg.session_dir, PathBuf::from("/tmp/x"));
        let options = cfg.seed_options(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(options.total, 12);
        assert_eq!(options.rng_seed, Some(99));
    }

    #[test]
    fn malformed_numbers_are_reported() {
        let err = config(&[("SEED_TOTAL", "lots")]).unwrap_err();
        assert!(err.to_string().contains("SEED_TOTAL"));
    }
}
