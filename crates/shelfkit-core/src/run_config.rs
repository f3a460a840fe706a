//! Per-run settings for the harvest pipeline, loaded from YAML.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Field-name fragments kept from a page's flattened product data.
pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "image",
    "mpn",
    "name",
    "description",
    "availability",
    "price",
];

/// Which harvest stages run. Each stage reads what the previous one wrote to
/// disk, so a stage can be re-run on its own against cached files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stages {
    pub search: bool,
    pub scrape: bool,
    pub export: bool,
}

impl Default for Stages {
    fn default() -> Self {
        Self {
            search: true,
            scrape: true,
            export: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Spreadsheet (workbook or CSV) listing the items to harvest.
    pub input_path: PathBuf,
    /// Column in `input_path` holding the item identifier.
    pub barcode_column: String,
    /// Where raw search responses are cached, one file per identifier.
    pub serp_dir: PathBuf,
    /// Where scraped product records are cached, one file per identifier.
    pub json_dir: PathBuf,
    /// Final reconciled spreadsheet (CSV).
    pub output_path: PathBuf,
    pub stages: Stages,
    pub keywords: Vec<String>,
    /// JSON-LD `@type` to look for on each page.
    pub target_type: String,
    /// Maximum result URLs taken from each search response.
    pub max_urls: usize,
    /// Only scrape the first N identifiers when set.
    pub scrape_limit: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("Sample_product_data.xlsx"),
            barcode_column: "Variant Barcode".to_string(),
            serp_dir: PathBuf::from("serp_results"),
            json_dir: PathBuf::from("json_data"),
            output_path: PathBuf::from("product_data.csv"),
            stages: Stages::default(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            target_type: "Product".to_string(),
            max_urls: 100,
            scrape_limit: None,
        }
    }
}

impl RunConfig {
    /// Path of the cached search response for `identifier`.
    #[must_use]
    pub fn serp_file(&self, identifier: &str) -> PathBuf {
        self.serp_dir.join(format!("{identifier}_serp.json"))
    }

    /// Path of the scraped product file for `identifier`.
    #[must_use]
    pub fn item_file(&self, identifier: &str) -> PathBuf {
        self.json_dir.join(format!("{identifier}.json"))
    }
}

/// Load and validate a run configuration from a YAML file.
///
/// Missing keys fall back to [`RunConfig::default`].
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RunFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_run_config(&content)
}

fn parse_run_config(content: &str) -> Result<RunConfig, ConfigError> {
    let config: RunConfig = serde_yaml::from_str(content)?;
    validate_run_config(&config)?;
    Ok(config)
}

fn validate_run_config(config: &RunConfig) -> Result<(), ConfigError> {
    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "keywords must contain at least one entry".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for keyword in &config.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords must be non-empty".to_string(),
            ));
        }
        if !seen.insert(keyword.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{keyword}'"
            )));
        }
    }

    if config.target_type.trim().is_empty() {
        return Err(ConfigError::Validation(
            "target_type must be non-empty".to_string(),
        ));
    }

    if config.max_urls == 0 {
        return Err(ConfigError::Validation(
            "max_urls must be greater than zero".to_string(),
        ));
    }

    if config.barcode_column.trim().is_empty() {
        return Err(ConfigError::Validation(
            "barcode_column must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse_run_config("{}").unwrap();
        assert_eq!(cfg.barcode_column, "Variant Barcode");
        assert_eq!(cfg.target_type, "Product");
        assert_eq!(cfg.max_urls, 100);
        assert_eq!(cfg.keywords.len(), DEFAULT_KEYWORDS.len());
        assert_eq!(cfg.stages, Stages::default());
        assert!(cfg.scrape_limit.is_none());
    }

    #[test]
    fn partial_stages_keep_remaining_defaults() {
        let cfg = parse_run_config("stages:\n  search: false\n").unwrap();
        assert!(!cfg.stages.search);
        assert!(cfg.stages.scrape);
        assert!(cfg.stages.export);
    }

    #[test]
    fn overrides_are_applied() {
        let yaml = r"
input_path: items.csv
serp_dir: cache/serp
json_dir: cache/json
output_path: out.csv
keywords: [price, gtin]
max_urls: 10
scrape_limit: 5
";
        let cfg = parse_run_config(yaml).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("items.csv"));
        assert_eq!(cfg.keywords, vec!["price".to_string(), "gtin".to_string()]);
        assert_eq!(cfg.max_urls, 10);
        assert_eq!(cfg.scrape_limit, Some(5));
        assert_eq!(
            cfg.serp_file("0001"),
            PathBuf::from("cache/serp").join("0001_serp.json")
        );
        assert_eq!(
            cfg.item_file("0001"),
            PathBuf::from("cache/json").join("0001.json")
        );
    }

    #[test]
    fn empty_keywords_rejected() {
        let err = parse_run_config("keywords: []").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn duplicate_keywords_rejected_case_insensitively() {
        let err = parse_run_config("keywords: [Price, price]").unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
            "got: {err:?}"
        );
    }

    #[test]
    fn zero_max_urls_rejected() {
        let err = parse_run_config("max_urls: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_run_config("keywords: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::RunFileParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_run_config(Path::new("/nonexistent/shelfkit/run.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::RunFileIo { .. }));
    }

    #[test]
    fn bundled_run_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/run.yaml");
        let cfg = load_run_config(&path).unwrap();
        assert_eq!(cfg.keywords.len(), DEFAULT_KEYWORDS.len());
        assert_eq!(cfg.stages, Stages::default());
        assert!(cfg.scrape_limit.is_none());
    }
}
