//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["werewolf.toml", ".werewolf.toml"];

/// Prefix of environment overrides, e.g. `WEREWOLF_GAME__WEREWOLVES=2`
pub const ENV_PREFIX: &str = "WEREWOLF_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`WEREWOLF_<SECTION>__<KEY>`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./werewolf.toml` or `./.werewolf.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/werewolf-quorum/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path, Self::global_config_path(), Path::new("."))
            .extract()
            .map_err(Box::new)
    }

    fn figment(
        config_path: Option<&PathBuf>,
        global_path: Option<PathBuf>,
        project_dir: &Path,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::find_project_file(project_dir) {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/werewolf-quorum/config.toml if set,
    /// otherwise falls back to ~/.config/werewolf-quorum/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("werewolf-quorum").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_file(Path::new("."))
    }

    fn find_project_file(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./werewolf.toml or ./.werewolf.toml");
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
    use crate::config::AgentKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.game.max_game_rounds, 30);
        assert_eq!(config.agents.kind, AgentKind::Heuristic);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("werewolf-quorum"));
    }

    #[test]
    fn test_explicit_file_overrides_project_and_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(&global, "[game]\nwerewolves = 1\nvillagers = 5\n").unwrap();
        fs::write(
            dir.path().join("werewolf.toml"),
            "[game]\nwerewolves = 2\n",
        )
        .unwrap();
        let explicit = dir.path().join("explicit.toml");
        fs::write(&explicit, "[output]\ncolor = false\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(&explicit), Some(global), dir.path())
            .extract()
            .unwrap();

        assert_eq!(config.game.werewolves, 2);
        assert_eq!(config.game.villagers, 5);
        assert!(!config.output.color);
        assert_eq!(config.game.seers, 1);
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".werewolf.toml"), "[agents]\nseed = 3\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(None, None, dir.path())
            .extract()
            .unwrap();

        assert_eq!(config.agents.seed, Some(3));
    }

    #[test]
    fn test_environment_overrides_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("werewolf.toml", "[game]\nhunters = 0\n")?;
            jail.set_env("WEREWOLF_GAME__HUNTERS", "2");

            let config: FileConfig = ConfigLoader::figment(None, None, jail.directory())
                .extract()?;
            assert_eq!(config.game.hunters, 2);
            Ok(())
        });
    }
}
