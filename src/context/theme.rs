use std::sync::Arc;

use crate::{models::ThemeMode, storage::KeyValueStorage};

pub const THEME_STORAGE_KEY: &str = "@nexusstore_theme";

/// Theme preference, read once at startup and written back on every
/// toggle. Storage failures are logged and swallowed so the theme stays
/// usable without persistence.
pub struct ThemeContext {
    storage: Arc<dyn KeyValueStorage>,
    theme: ThemeMode,
}

impl ThemeContext {
    pub async fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let mut theme = ThemeMode::Light;
        match storage.get(THEME_STORAGE_KEY).await {
            Ok(Some(value)) => {
                if let Some(saved) = ThemeMode::parse(&value) {
                    theme = saved;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "failed to load theme preference"),
        }
        Self { storage, theme }
    }

    pub async fn toggle(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        if let Err(err) = self
            .storage
            .set(THEME_STORAGE_KEY, self.theme.as_str())
            .await
        {
            tracing::warn!(error = %err, "failed to save theme preference");
        }
        self.theme
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }
}
