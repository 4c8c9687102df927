// crates/engine_core/src/app.rs

use crate::config::GameConfig;
use crate::error::Result;
use crate::gui::InspectorOverlay;
use crate::platform_runner::PlatformRunner;

/// Everything the platform runner needs before a window exists.
pub struct App {
    pub config: GameConfig,
    pub window_title: String,
    pub overlay: InspectorOverlay,
}

impl App {
    /// `config` should already be validated (see `GameConfig::load`).
    pub fn new(config: GameConfig) -> Self {
        let window_title = config.window.title.clone();
        Self {
            config,
            window_title,
            overlay: InspectorOverlay::default(),
        }
    }

    /// Blocks until the window closes. Start-up failures come back as errors.
    pub fn run(self) -> Result<()> {
        PlatformRunner::new(self).start()
    }
}
