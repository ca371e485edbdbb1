//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `writegood.<ext>` in current directory or any parent
//! - `.writegood.<ext>` in current directory or any parent
//! - `~/.config/writegood/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use writegood_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::check::Category;
use crate::error::{ConfigError, ConfigResult};
use crate::highlight::{AnnotationStyle, default_tooltip};
use crate::word_lists::{DEFAULT_WEASEL_WORDS, IRREGULAR_PAST_PARTICIPLES, TO_BE_VERBS};

/// Settings for the weasel checker within a rule.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct WeaselRuleConfig {
    /// Replace the weasel-word list for matched files.
    pub words: Option<Vec<String>>,
    /// Extend the effective weasel-word list for matched files.
    pub extend_words: Option<Vec<String>>,
}

/// Settings for the passive checker within a rule.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PassiveRuleConfig {
    /// Replace the to-be verb list for matched files.
    pub verbs: Option<Vec<String>>,
    /// Replace the participle list for matched files.
    pub participles: Option<Vec<String>>,
}

/// Settings for the duplicates checker within a rule.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DuplicatesRuleConfig {
    /// Let duplicate pairs span punctuation (historical loose matching).
    pub span_punctuation: Option<bool>,
}

/// Checkers to run for a path-based rule.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuleChecks {
    /// Run the weasel-word checker.
    pub weasel: Option<WeaselRuleConfig>,
    /// Run the passive-voice checker.
    pub passive: Option<PassiveRuleConfig>,
    /// Run the duplicate-word checker.
    pub duplicates: Option<DuplicatesRuleConfig>,
}

/// A path-based lint rule.
///
/// Glob patterns in `paths` are relative to the project root.
/// All matching rules accumulate; when two rules configure the same
/// checker, the more specific pattern's settings win.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Rule {
    /// Glob patterns to match file paths against.
    pub paths: Vec<String>,
    /// Checkers to run on matched files.
    pub checks: RuleChecks,
}

/// Per-category tooltip text for live-highlight annotations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Tooltips {
    /// Tooltip on weasel-word spans.
    pub weasel: String,
    /// Tooltip on passive-voice spans.
    pub passive: String,
    /// Tooltip on duplicate-word spans.
    pub duplicates: String,
}

impl Default for Tooltips {
    fn default() -> Self {
        Self {
            weasel: default_tooltip(Category::Weasel).to_string(),
            passive: default_tooltip(Category::Passive).to_string(),
            duplicates: default_tooltip(Category::Duplicates).to_string(),
        }
    }
}

/// Per-category visual styles for live-highlight annotations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Styles {
    /// Style for weasel-word spans.
    pub weasel: AnnotationStyle,
    /// Style for passive-voice spans.
    pub passive: AnnotationStyle,
    /// Style for duplicate-word spans.
    pub duplicates: AnnotationStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            weasel: AnnotationStyle::for_category(Category::Weasel),
            passive: AnnotationStyle::for_category(Category::Passive),
            duplicates: AnnotationStyle::for_category(Category::Duplicates),
        }
    }
}

/// The configuration for writegood.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON), then merged with `WRITEGOOD_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Case-insensitive matching for the weasel and passive checkers.
    ///
    /// Defaults to `true`, matching a host whose search is globally
    /// case-insensitive. The duplicates checker is always case-insensitive
    /// regardless of this setting.
    pub case_insensitive: bool,
    /// Replace the default weasel-word list.
    pub weasel_words: Option<Vec<String>>,
    /// Extend the effective weasel-word list.
    pub extend_weasel_words: Option<Vec<String>>,
    /// Replace the default to-be verb list.
    pub passive_verbs: Option<Vec<String>>,
    /// Replace the default participle list.
    pub passive_participles: Option<Vec<String>>,
    /// Extend the effective participle list.
    pub extend_passive_participles: Option<Vec<String>>,
    /// Let duplicate pairs span punctuation (historical loose matching).
    ///
    /// Off by default: punctuation between two instances of a word resets
    /// adjacency, matching the live-highlight pattern exactly.
    pub duplicates_span_punctuation: bool,
    /// Tooltip text per category for live-highlight annotations.
    pub tooltips: Tooltips,
    /// Visual style per category for live-highlight annotations.
    pub styles: Styles,
    /// Apply live highlighting to every newly created buffer.
    pub global_highlight: bool,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Omit to use the
    /// default. Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Path-based lint rules.
    ///
    /// Each rule maps glob patterns to checkers with specific settings.
    /// All matching rules accumulate; more specific patterns override
    /// less specific ones when they configure the same checker.
    pub rules: Option<Vec<Rule>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            case_insensitive: true,
            weasel_words: None,
            extend_weasel_words: None,
            passive_verbs: None,
            passive_participles: None,
            extend_passive_participles: None,
            duplicates_span_punctuation: false,
            tooltips: Tooltips::default(),
            styles: Styles::default(),
            global_highlight: false,
            max_input_bytes: None,
            disable_input_limit: false,
            rules: None,
        }
    }
}

impl Config {
    /// The effective weasel-word list: the replacement list or the default,
    /// plus any extensions.
    pub fn weasel_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.weasel_words.clone().unwrap_or_else(|| {
            DEFAULT_WEASEL_WORDS
                .iter()
                .map(ToString::to_string)
                .collect()
        });
        if let Some(ref extra) = self.extend_weasel_words {
            words.extend(extra.iter().cloned());
        }
        words
    }

    /// The effective to-be verb list.
    pub fn passive_verbs(&self) -> Vec<String> {
        self.passive_verbs
            .clone()
            .unwrap_or_else(|| TO_BE_VERBS.iter().map(ToString::to_string).collect())
    }

    /// The effective participle list: the replacement list or the default,
    /// plus any extensions.
    pub fn passive_participles(&self) -> Vec<String> {
        let mut participles: Vec<String> = self.passive_participles.clone().unwrap_or_else(|| {
            IRREGULAR_PAST_PARTICIPLES
                .iter()
                .map(ToString::to_string)
                .collect()
        });
        if let Some(ref extra) = self.extend_passive_participles {
            participles.extend(extra.iter().cloned());
        }
        participles
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "writegood";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG config directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/writegood/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Returns the merged config alongside metadata about which files
    /// were loaded — pass the [`ConfigSources`] to commands instead of
    /// having them re-discover config files.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`WRITEGOOD_*`)
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/writegood/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = Self::find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        // Add explicit files
        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // WRITEGOOD_CASE_INSENSITIVE=false, WRITEGOOD_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("WRITEGOOD_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && Self::find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, ordered low-to-high precedence: dotfiles before regular
    /// files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Search order (low→high precedence, figment merges last-wins):
            //   1. .writegood.{toml,yaml,yml,json}
            //   2. writegood.{toml,yaml,yml,json}
            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config() -> Option<Utf8PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let config_dir = proj_dirs.config_dir();

        // Try each supported extension
        for ext in CONFIG_EXTENSIONS {
            let config_path = config_dir.join(format!("config.{ext}"));
            if config_path.is_file() {
                return Utf8PathBuf::from_path_buf(config_path).ok();
            }
        }

        None
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/writegood/` on Linux, `~/Library/Application Support/writegood/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.case_insensitive);
        assert!(!config.duplicates_span_punctuation);
        assert!(!config.global_highlight);
    }

    #[test]
    fn loader_builds_with_defaults() {
        let loader = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker();

        let (config, sources) = loader.load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"log_level = "debug"
case_insensitive = false
"#,
        )
        .unwrap();

        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.case_insensitive);
        assert_eq!(sources.primary_file(), Some(config_path.as_path()));
    }

    #[test]
    fn later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();

        let base_config = tmp.path().join("base.toml");
        fs::write(&base_config, r#"log_level = "warn""#).unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let base_config = Utf8PathBuf::try_from(base_config).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base_config)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn project_config_discovered_by_walking_up() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("writegood.toml"),
            r#"extend_weasel_words = ["basically"]"#,
        )
        .unwrap();
        let nested = tmp.path().join("docs").join("guides");
        fs::create_dir_all(&nested).unwrap();

        let nested = Utf8PathBuf::try_from(nested).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&nested)
            .load()
            .unwrap();

        assert!(config.weasel_words().contains(&"basically".to_string()));
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn dotfile_yields_to_regular_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".writegood.toml"), r#"log_level = "warn""#).unwrap();
        fs::write(tmp.path().join("writegood.toml"), r#"log_level = "error""#).unwrap();

        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&root)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn boundary_marker_stops_traversal() {
        let tmp = TempDir::new().unwrap();
        // Config above the boundary should not be found.
        fs::write(tmp.path().join("writegood.toml"), r#"log_level = "warn""#).unwrap();
        let repo = tmp.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("docs");
        fs::create_dir_all(&nested).unwrap();

        let nested = Utf8PathBuf::try_from(nested).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn load_or_error_without_any_source() {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker("nonexistent-marker")
            .with_project_search(&root)
            .load_or_error();

        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn effective_lists_fall_back_to_defaults() {
        let config = Config::default();
        assert!(config.weasel_words().contains(&"very".to_string()));
        assert_eq!(config.passive_verbs().len(), 8);
        assert!(
            config
                .passive_participles()
                .contains(&"written".to_string())
        );
    }

    #[test]
    fn replacement_list_drops_defaults() {
        let config = Config {
            weasel_words: Some(vec!["bespoke".to_string()]),
            ..Default::default()
        };
        let words = config.weasel_words();
        assert_eq!(words, vec!["bespoke".to_string()]);
    }

    #[test]
    fn extension_appends_to_defaults() {
        let config = Config {
            extend_weasel_words: Some(vec!["basically".to_string()]),
            ..Default::default()
        };
        let words = config.weasel_words();
        assert!(words.contains(&"very".to_string()));
        assert!(words.contains(&"basically".to_string()));
    }

    #[test]
    fn yaml_config_supported() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        fs::write(&config_path, "log_level: debug\n").unwrap();

        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn tooltips_and_styles_have_defaults() {
        let config = Config::default();
        assert!(config.tooltips.weasel.contains("Weasel"));
        assert_eq!(config.styles.passive.color, "cyan");
    }
}
