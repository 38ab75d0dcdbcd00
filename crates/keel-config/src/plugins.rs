//! Plugin descriptors handed to the build engine.
//!
//! The resolver only describes plugins; it never runs them. The order of
//! the list returned by [`app_plugins`] is the order the engine applies
//! them in, so it is preserved verbatim and never deduplicated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory scanned for auto-imported global components.
pub const GLOBAL_COMPONENTS_DIR: &str = "src/components/global";

/// Directory holding SVG icons bundled into a sprite.
pub const SVG_ICONS_DIR: &str = "src/assets/svg";

/// Sprite symbol id template; `[name]` is replaced by the icon file stem.
pub const SYMBOL_ID_TEMPLATE: &str = "svg-[name]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options")]
pub enum PluginSpec {
    /// Single-file component support.
    #[serde(rename = "vue")]
    Vue,

    /// On-demand component auto-import.
    #[serde(rename = "unplugin-vue-components")]
    Components(ComponentsOptions),

    /// SVG sprite generation.
    #[serde(rename = "vite-plugin-svg-icons")]
    SvgIcons(SvgIconsOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentsOptions {
    pub dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgIconsOptions {
    pub icon_dirs: Vec<PathBuf>,
    pub symbol_id: String,
}

impl SvgIconsOptions {
    /// Sprite symbol id for an icon, e.g. `home` -> `svg-home`.
    pub fn symbol_id(&self, icon: &str) -> String {
        self.symbol_id.replace("[name]", icon)
    }
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::Vue => "vue",
            PluginSpec::Components(_) => "unplugin-vue-components",
            PluginSpec::SvgIcons(_) => "vite-plugin-svg-icons",
        }
    }

    /// Directories this plugin reads from.
    pub fn directories(&self) -> &[PathBuf] {
        match self {
            PluginSpec::Vue => &[],
            PluginSpec::Components(opts) => &opts.dirs,
            PluginSpec::SvgIcons(opts) => &opts.icon_dirs,
        }
    }
}

/// Plugin list for an application rooted at `root`.
pub fn app_plugins(root: &Path) -> Vec<PluginSpec> {
    vec![
        PluginSpec::Vue,
        PluginSpec::Components(ComponentsOptions {
            dirs: vec![root.join(GLOBAL_COMPONENTS_DIR)],
        }),
        PluginSpec::SvgIcons(SvgIconsOptions {
            icon_dirs: vec![root.join(SVG_ICONS_DIR)],
            symbol_id: SYMBOL_ID_TEMPLATE.to_string(),
        }),
    ]
}
