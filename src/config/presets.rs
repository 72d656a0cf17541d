//! Named bundles of config fields, built in and loadable from a directory.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::config::compact::JsonMap;
use crate::foundation::error::{BannerError, BannerResult};

const BUILTIN: &[(&str, &str)] = &[
    ("candy_hearts", include_str!("../../presets/candy_hearts.json")),
    ("midnight_grid", include_str!("../../presets/midnight_grid.json")),
    ("modern_blue", include_str!("../../presets/modern_blue.json")),
    ("ocean_waves", include_str!("../../presets/ocean_waves.json")),
    ("paper_minimal", include_str!("../../presets/paper_minimal.json")),
    ("retro_film", include_str!("../../presets/retro_film.json")),
    ("steel_works", include_str!("../../presets/steel_works.json")),
    ("sunset_glow", include_str!("../../presets/sunset_glow.json")),
];

/// Names of the presets compiled into the crate.
pub fn names() -> Vec<&'static str> {
    BUILTIN.iter().map(|(n, _)| *n).collect()
}

pub fn builtin(name: &str) -> BannerResult<Option<JsonMap>> {
    BUILTIN
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(n, text)| parse_object(text, n))
        .transpose()
}

fn parse_object(text: &str, origin: &str) -> BannerResult<JsonMap> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(BannerError::validation(format!(
            "preset '{origin}' must be a JSON object"
        ))),
    }
}

/// Shallow merge: every key of `overrides` replaces the same key in `base`.
pub fn merge_json(base: &mut JsonMap, overrides: JsonMap) {
    for (k, v) in overrides {
        base.insert(k, v);
    }
}

/// Every `*.json` file in `dir`, keyed by file stem.
pub fn load_dir(dir: &Path) -> BannerResult<BTreeMap<String, JsonMap>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| BannerError::io(format!("read preset dir '{}': {e}", dir.display())))?;
    let mut out = BTreeMap::new();
    for entry in entries {
        let path = entry
            .map_err(|e| BannerError::io(format!("read preset dir '{}': {e}", dir.display())))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let text = std::fs::read_to_string(&path)
            .map_err(|e| BannerError::io(format!("read preset '{}': {e}", path.display())))?;
        out.insert(stem.to_owned(), parse_object(&text, stem)?);
    }
    Ok(out)
}

/// Built-in presets plus, optionally, those of a directory (which win on name clashes).
#[derive(Clone, Debug, Default)]
pub struct PresetLibrary {
    entries: BTreeMap<String, JsonMap>,
}

impl PresetLibrary {
    pub fn builtin() -> BannerResult<Self> {
        let mut entries = BTreeMap::new();
        for (name, text) in BUILTIN {
            entries.insert((*name).to_owned(), parse_object(text, name)?);
        }
        Ok(Self { entries })
    }

    pub fn with_dir(mut self, dir: &Path) -> BannerResult<Self> {
        self.entries.extend(load_dir(dir)?);
        Ok(self)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&JsonMap> {
        self.entries.get(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/presets.rs"]
mod tests;
