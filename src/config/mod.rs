use crate::errors::AppResult;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

pub const PORTAL_PASSWORD_ENV: &str = "FPORTAL_PASSWORD";
pub const ADMIN_PASSWORD_ENV: &str = "FPORTAL_ADMIN_PASSWORD";

/// File names of the CSV logs kept inside `data_dir`.
pub const REQUESTS_FILE: &str = "doc_requests.csv";
pub const VOC_FILE: &str = "voc_logs.csv";
pub const PRODUCTION_FILE: &str = "production_logs.csv";
pub const DOCS_FILE: &str = "doc_catalog.csv";
pub const CHATBOT_FILE: &str = "chatbot_requests.csv";
pub const AUDIT_DB_FILE: &str = "portal.sqlite";
pub const UPLOADS_DIR: &str = "uploads";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    /// Product catalog CSV; `None` means `<data_dir>/product_data.csv`.
    #[serde(default)]
    pub catalog_file: Option<String>,
    #[serde(default = "default_code_column")]
    pub code_column: String,
    #[serde(default = "default_name_column")]
    pub name_column: String,
    #[serde(default = "default_portal_password")]
    pub portal_password: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_report_years")]
    pub report_years: usize,
    /// Extra product-code prefixes → category, merged over the built-in table.
    #[serde(default)]
    pub category_prefixes: BTreeMap<String, String>,
}

fn default_code_column() -> String {
    "제품코드".to_string()
}
fn default_name_column() -> String {
    "제품명".to_string()
}
fn default_portal_password() -> String {
    "incheon1".to_string()
}
fn default_admin_password() -> String {
    "admin1234".to_string()
}
fn default_wrap_width() -> usize {
    80
}
fn default_report_years() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().join("data").to_string_lossy().to_string(),
            catalog_file: None,
            code_column: default_code_column(),
            name_column: default_name_column(),
            portal_password: default_portal_password(),
            admin_password: default_admin_password(),
            wrap_width: default_wrap_width(),
            report_years: default_report_years(),
            category_prefixes: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("factory-portal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".factory-portal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("factory-portal.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_dir)
    }

    pub fn catalog_path(&self) -> PathBuf {
        match &self.catalog_file {
            Some(f) => crate::utils::path::expand_tilde(f),
            None => self.data_path().join("product_data.csv"),
        }
    }

    pub fn requests_path(&self) -> PathBuf {
        self.data_path().join(REQUESTS_FILE)
    }

    pub fn voc_path(&self) -> PathBuf {
        self.data_path().join(VOC_FILE)
    }

    pub fn production_path(&self) -> PathBuf {
        self.data_path().join(PRODUCTION_FILE)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.data_path().join(DOCS_FILE)
    }

    pub fn chatbot_path(&self) -> PathBuf {
        self.data_path().join(CHATBOT_FILE)
    }

    pub fn audit_db_path(&self) -> PathBuf {
        self.data_path().join(AUDIT_DB_FILE)
    }

    pub fn uploads_path(&self) -> PathBuf {
        self.data_path().join(UPLOADS_DIR)
    }

    /// Portal password: environment first, then the configured value.
    pub fn effective_portal_password(&self) -> String {
        env::var(PORTAL_PASSWORD_ENV).unwrap_or_else(|_| self.portal_password.clone())
    }

    /// Admin password: environment first, then the configured value.
    pub fn effective_admin_password(&self) -> String {
        env::var(ADMIN_PASSWORD_ENV).unwrap_or_else(|_| self.admin_password.clone())
    }

    /// Write the configuration file (unless in test mode) and create the data directory.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        fs::create_dir_all(self.data_path())?;
        fs::create_dir_all(self.uploads_path())?;
        success(format!("Data directory: {}", self.data_path().display()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("data_dir: /srv/portal\n").unwrap();
        assert_eq!(cfg.code_column, "제품코드");
        assert_eq!(cfg.name_column, "제품명");
        assert_eq!(cfg.report_years, 3);
        assert!(cfg.category_prefixes.is_empty());
        assert_eq!(
            cfg.requests_path(),
            PathBuf::from("/srv/portal").join(REQUESTS_FILE)
        );
    }

    #[test]
    fn catalog_path_defaults_inside_data_dir() {
        let mut cfg: Config = serde_yaml::from_str("data_dir: /srv/portal\n").unwrap();
        assert_eq!(
            cfg.catalog_path(),
            PathBuf::from("/srv/portal/product_data.csv")
        );

        cfg.catalog_file = Some("/mnt/share/catalog.csv".into());
        assert_eq!(cfg.catalog_path(), PathBuf::from("/mnt/share/catalog.csv"));
    }
}
