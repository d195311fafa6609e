use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_FILE: &str = "workspace-onboard/config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OnboardConfig {
    pub general: GeneralConfig,
    pub company: CompanyConfig,
    pub branding: BrandingConfig,
    pub session: SessionConfig,
}

impl OnboardConfig {
    pub fn load() -> Result<Self, crate::error::OnboardError> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, crate::error::OnboardError> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: OnboardConfig = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "Workspace Setup".to_string(),
            subtitle: "Set up your company workspace".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    /// Countries offered by the Location picker
    pub countries: Vec<String>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            countries: default_countries(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Maximum length of the workspace description, in characters
    pub max_description_len: usize,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            max_description_len: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Override for the session state file path
    pub state_file: Option<String>,
}

fn default_countries() -> Vec<String> {
    [
        "Argentina",
        "Australia",
        "Austria",
        "Belgium",
        "Brazil",
        "Canada",
        "Chile",
        "China",
        "Colombia",
        "Czechia",
        "Denmark",
        "Egypt",
        "Finland",
        "France",
        "Germany",
        "Greece",
        "India",
        "Indonesia",
        "Ireland",
        "Israel",
        "Italy",
        "Japan",
        "Kenya",
        "Mexico",
        "Netherlands",
        "New Zealand",
        "Nigeria",
        "Norway",
        "Poland",
        "Portugal",
        "Singapore",
        "South Africa",
        "South Korea",
        "Spain",
        "Sweden",
        "Switzerland",
        "Turkey",
        "United Arab Emirates",
        "United Kingdom",
        "United States",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_sensible() {
        let config = OnboardConfig::default();
        assert_eq!(config.general.title, "Workspace Setup");
        assert!(config.company.countries.contains(&"Japan".to_string()));
        assert_eq!(config.branding.max_description_len, 500);
        assert!(config.session.state_file.is_none());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = OnboardConfig::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.general.title, "Workspace Setup");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[general]\ntitle = \"Acme Setup\"\n\n[company]\ncountries = [\"Narnia\"]\n",
        )
        .unwrap();

        let config = OnboardConfig::load_from(&path).unwrap();
        assert_eq!(config.general.title, "Acme Setup");
        assert_eq!(config.company.countries, vec!["Narnia".to_string()]);
        assert_eq!(config.branding.max_description_len, 500);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "general = 7").unwrap();

        assert!(OnboardConfig::load_from(&path).is_err());
    }
}
