//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "legal-analyzer";
const PROJECT_FILES: &[&str] = &["legal-analyzer.toml", ".legal-analyzer.toml"];
const ENV_PREFIX: &str = "LEGAL_ANALYZER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LEGAL_ANALYZER_SECTION__KEY` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./legal-analyzer.toml` or `./.legal-analyzer.toml`
    /// 4. Global: `<config dir>/legal-analyzer/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|path| path.exists());
        let project = Self::project_config_path();

        Self::layered(global, project, config_path.map(PathBuf::as_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Defaults, then each file that is present, lowest priority first
    fn layered(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            debug!("Merging global config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            debug!("Merging project config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Variables: {}<SECTION>__<KEY>", ENV_PREFIX);

        match config_path {
            Some(path) if path.exists() => println!("  [FOUND] Explicit: {}", path.display()),
            Some(path) => println!("  [MISS ] Explicit: {}", path.display()),
            None => println!("  [     ] Explicit: (--config not given)"),
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummarizerKind;
    use legal_domain::{OutputFormat, SummaryBounds};
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.console.bounds(), Ok(SummaryBounds::console()));
        assert_eq!(config.interactive.bounds(), Ok(SummaryBounds::interactive()));
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("legal-analyzer"));
    }

    #[test]
    fn test_explicit_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[summarizer]\nbackend = \"huggingface\"\n\n[interactive]\nmax_length = 120\n\n[output]\nformat = \"json\""
        )
        .unwrap();

        let config: FileConfig = ConfigLoader::layered(None, None, Some(file.path()))
            .extract()
            .unwrap();
        assert_eq!(
            config.summarizer.parse_backend(),
            Ok(SummarizerKind::HuggingFace)
        );
        assert_eq!(config.interactive.min_length, 40);
        assert_eq!(config.interactive.max_length, 120);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.summarizer.api_token_env, "HF_API_TOKEN");
    }

    #[test]
    fn test_type_errors_name_the_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[console]\nmin_length = \"thirty\"\n").unwrap();

        let err = ConfigLoader::layered(None, None, Some(&path))
            .extract::<FileConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("min_length"));
    }

    #[test]
    fn test_explicit_file_overrides_project_and_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("legal-analyzer.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&global, "[console]\nmin_length = 10\nmax_length = 20\n").unwrap();
        std::fs::write(&project, "[console]\nmax_length = 60\n").unwrap();
        std::fs::write(&explicit, "[output]\ncolor = false\n").unwrap();

        let config: FileConfig =
            ConfigLoader::layered(Some(global), Some(project), Some(&explicit))
                .extract()
                .unwrap();
        assert_eq!(config.console.min_length, 10);
        assert_eq!(config.console.max_length, 60);
        assert!(!config.output.color);
    }
}
