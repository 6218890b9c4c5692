use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::filter_state::{FilterKind, BASE_TITLE};

pub const DATA_DIR_ENV: &str = "QUOTATION_REPORTS_DATA_DIR";
pub const SNAPSHOT_ENV: &str = "QUOTATION_REPORTS_SNAPSHOT";
pub const TITLE_ENV: &str = "QUOTATION_REPORTS_TITLE";
pub const FILTERS_ENV: &str = "QUOTATION_REPORTS_FILTERS";
const SNAPSHOT_FILE_NAME: &str = "reports.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data_dir: Option<String>,
    pub snapshot: Option<String>,
    pub title: Option<String>,
    pub filters: Option<String>,
}

impl ConfigOverrides {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var(DATA_DIR_ENV).ok(),
            snapshot: std::env::var(SNAPSHOT_ENV).ok(),
            title: std::env::var(TITLE_ENV).ok(),
            filters: std::env::var(FILTERS_ENV).ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub snapshot_path: PathBuf,
    pub window_title: String,
    pub quick_filters: Vec<FilterKind>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "quotation-reports")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

// Unknown tags become "all"; repeats are dropped.
fn parse_quick_filters(value: Option<String>) -> Vec<FilterKind> {
    let Some(value) = non_empty(value) else {
        return FilterKind::BUTTONS.to_vec();
    };
    let mut filters = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        let kind = FilterKind::from_tag(&tag.to_ascii_lowercase());
        if !filters.contains(&kind) {
            filters.push(kind);
        }
    }
    filters
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::resolve(ConfigOverrides::from_env())
    }

    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let data_dir = match non_empty(overrides.data_dir) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let snapshot_path = non_empty(overrides.snapshot)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(SNAPSHOT_FILE_NAME));
        let window_title = non_empty(overrides.title).unwrap_or_else(|| BASE_TITLE.to_string());

        Ok(Self {
            data_dir,
            snapshot_path,
            window_title,
            quick_filters: parse_quick_filters(overrides.filters),
        })
    }

    #[cfg_attr(not(feature = "desktop"), allow(dead_code))]
    pub fn ensure_webview_data_dir(&self) -> Result<PathBuf> {
        let dir = self.data_dir.join("webview2");
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create webview data dir under {}", self.data_dir.display()))?;
        Ok(dir)
    }
}
