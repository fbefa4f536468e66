use crate::data::AppSettings;
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_config_dir()?;
    run_in_dir(&dir)?;
    println!("Config written to {}", dir.join("config.yaml").display());
    Ok(())
}

/// Writes the default config.yaml into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    info!(dir = %dir.display(), "default config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_writes_config() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert!(tmp.path().join("config.yaml").exists());
    }

    #[test]
    fn test_written_config_loads_back_as_defaults() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let loaded = AppSettings::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_config_uses_settings_key() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let yaml = std::fs::read_to_string(tmp.path().join("config.yaml")).unwrap();
        assert!(yaml.starts_with("settings:"));
        assert!(yaml.contains("mini_month_padding: month_only"));
    }
}
