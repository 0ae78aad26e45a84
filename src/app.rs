//! App Core for StickyPages.
//!
//! Central struct holding the resolved configuration and the pieces derived
//! from it, ready to be handed to the window layer.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::services::config_loader::{ConfigLoader, ConfigLoaderTrait, LoadedConfig};
use crate::services::layout::WindowLayout;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::config::StickyConfig;
use crate::types::errors::ConfigWarning;
use crate::types::geometry::ScreenSize;

/// Central application struct.
pub struct App {
    pub config: StickyConfig,
    pub warnings: Vec<ConfigWarning>,
    pub shortcut_manager: ShortcutManager,
    config_path: PathBuf,
}

impl App {
    /// Resolves the configuration: defaults, then the settings file, then `--url`.
    pub fn new(cli: &Cli) -> Self {
        let loader = ConfigLoader::new(cli.config.clone());
        let mut loaded = loader.load();
        loaded.apply_url_override(cli.url.as_deref());
        Self::from_loaded(loaded, loader.get_config_path())
    }

    pub fn from_loaded(loaded: LoadedConfig, config_path: &Path) -> Self {
        let shortcut_manager = ShortcutManager::new(loaded.config.close_shortcut);
        Self {
            config: loaded.config,
            warnings: loaded.warnings,
            shortcut_manager,
            config_path: config_path.to_path_buf(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn layout(&self, screen: Option<ScreenSize>) -> WindowLayout {
        WindowLayout::compute(&self.config, screen)
    }

    /// Script injected into every page: content clip plus shortcut listener.
    pub fn initialization_script(&self, layout: &WindowLayout) -> String {
        let clip = ThemeEngine::new(&self.config, layout).content_clip_script();
        let keys = self.shortcut_manager.keydown_script();
        if clip.is_empty() {
            keys
        } else {
            format!("{}\n{}", clip, keys)
        }
    }

    /// Startup sequence: report fallbacks, then what is about to be shown.
    pub fn startup(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        if !self.config.javascript_enabled {
            tracing::warn!(
                "JavaScript is disabled: the in-page close listener and page corner clip are not installed"
            );
        }
        tracing::info!(
            config = %self.config_path.display(),
            url = %self.config.webpage_url,
            width = self.config.width,
            height = self.config.height,
            "stickypages starting"
        );
    }
}
