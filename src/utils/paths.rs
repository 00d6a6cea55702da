use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub fn get_polyclip_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".polyclip"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_polyclip_dir()?.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_polyclip_dir()?.join("polyclip.log"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let dir = get_polyclip_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_polyclip_dir() {
        let dir = get_polyclip_dir().unwrap();
        assert!(dir.to_string_lossy().ends_with(".polyclip"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".polyclip"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_path() {
        let path = get_log_path().unwrap();
        assert!(path.to_string_lossy().ends_with("polyclip.log"));
    }
}
