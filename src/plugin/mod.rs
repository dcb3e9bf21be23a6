//! Plugin capability interface and notification fan-out.
//!
//! Plugins observe the editor: they are told about key presses and buffer
//! changes and may fail without affecting the editor or each other. The
//! [`PluginManager`] registry is the sole owner of its plugins, keyed by
//! name.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::input::Key;

/// Recoverable failure raised by a plugin hook.
///
/// A failing hook is logged and skipped; it never aborts the fan-out to
/// the remaining plugins.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PluginError {
    message: String,
}

impl PluginError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Editor observer. `name` is required; the hooks default to no-ops.
pub trait Plugin {
    /// Unique registry key. A second plugin with the same name replaces
    /// the first.
    fn name(&self) -> &str;

    /// Called once, synchronously, when the plugin is registered.
    fn on_load(&mut self) -> Result<(), PluginError> {
        Ok(())
    }

    /// Called for every key pressed in insert mode.
    fn on_key_press(&mut self, _key: Key) -> Result<(), PluginError> {
        Ok(())
    }

    /// Called after every buffer mutation.
    fn on_buffer_change(&mut self) -> Result<(), PluginError> {
        Ok(())
    }
}

/// Registry of named plugins. Notification order is unspecified.
#[derive(Default)]
pub struct PluginManager {
    plugins: HashMap<String, Box<dyn Plugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin by name (last write wins), then invoke its load
    /// hook. The plugin is active before any other notification can
    /// reach it.
    pub fn load_plugin(&mut self, plugin: Box<dyn Plugin>) {
        let name = plugin.name().to_string();
        debug!(plugin = %name, "loading plugin");
        self.plugins.insert(name.clone(), plugin);
        if let Some(plugin) = self.plugins.get_mut(&name)
            && let Err(err) = plugin.on_load()
        {
            warn!(plugin = %name, %err, "plugin load hook failed");
        }
    }

    /// Remove a plugin. No teardown hook is invoked. Returns whether a
    /// plugin with that name was registered.
    pub fn unload_plugin(&mut self, name: &str) -> bool {
        self.plugins.remove(name).is_some()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Fan a key press out to every plugin, isolating failures.
    pub fn notify_key_press(&mut self, key: Key) {
        for (name, plugin) in &mut self.plugins {
            if let Err(err) = plugin.on_key_press(key) {
                warn!(plugin = %name, %err, "plugin key press hook failed");
            }
        }
    }

    /// Fan a buffer change out to every plugin, isolating failures.
    pub fn notify_buffer_change(&mut self) {
        for (name, plugin) in &mut self.plugins {
            if let Err(err) = plugin.on_buffer_change() {
                warn!(plugin = %name, %err, "plugin buffer change hook failed");
            }
        }
    }
}

impl std::fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginManager")
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .finish()
    }
}
