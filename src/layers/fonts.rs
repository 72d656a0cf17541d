//! Font discovery behind an injectable [`FontProvider`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use usvg::fontdb;

static BUILTIN_FONT: LazyLock<FontBytes> = LazyLock::new(|| {
    FontBytes::new(include_bytes!("../../assets/fonts/Tuffy.ttf").to_vec(), 0)
});

/// The sans-serif face compiled into the crate. Used when nothing else resolves.
pub fn builtin_font() -> FontBytes {
    BUILTIN_FONT.clone()
}

/// Raw font file bytes plus the face index inside a collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontBytes {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
}

impl FontBytes {
    pub fn new(data: Vec<u8>, index: u32) -> Self {
        Self {
            data: Arc::new(data),
            index,
        }
    }

    pub(crate) fn to_vello(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.data.as_ref().clone()),
            self.index,
        )
    }
}

/// Source of font faces for the text stage.
pub trait FontProvider: Send + Sync {
    /// Resolve a configured font name (`"DejaVuSansMono-Bold.ttf"`, a path, ...).
    fn load(&self, name: &str) -> Option<FontBytes>;

    /// Face used when `load` finds nothing.
    fn fallback(&self) -> Option<FontBytes>;

    /// `load`, then `fallback`, then the built-in face. Never fails.
    fn load_or_fallback(&self, name: &str) -> FontBytes {
        if let Some(font) = self.load(name) {
            return font;
        }
        if let Some(font) = self.fallback() {
            tracing::warn!(font = name, "font not found, falling back to sans-serif");
            return font;
        }
        tracing::warn!(font = name, "no fonts available, using the built-in face");
        builtin_font()
    }
}

/// Fonts from explicit paths, a local `fonts/` directory and the system font database.
pub struct SystemFonts {
    db: fontdb::Database,
    font_dir: PathBuf,
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFonts {
    /// Scan the system font directories.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self {
            db,
            font_dir: PathBuf::from("fonts"),
        }
    }

    /// No system faces; only paths and the font directory resolve, and text falls back to
    /// [`builtin_font`].
    pub fn empty() -> Self {
        Self {
            db: fontdb::Database::new(),
            font_dir: PathBuf::from("fonts"),
        }
    }

    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into();
        self
    }

    /// Register an extra font file with the database.
    pub fn add_font_file(&mut self, path: &Path) -> std::io::Result<()> {
        self.db.load_font_file(path)
    }

    fn read_file(path: &Path) -> Option<FontBytes> {
        if !path.is_file() {
            return None;
        }
        match std::fs::read(path) {
            Ok(data) => Some(FontBytes::new(data, 0)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read font file");
                None
            }
        }
    }

    fn face_bytes(&self, id: fontdb::ID) -> Option<FontBytes> {
        self.db
            .with_face_data(id, |data, index| FontBytes::new(data.to_vec(), index))
    }

    fn query_family(&self, name: &str) -> Option<FontBytes> {
        let wanted = FaceRequest::from_font_name(name);
        let mut best: Option<(u32, fontdb::ID)> = None;
        for face in self.db.faces() {
            let family_matches = face
                .families
                .iter()
                .any(|(family, _)| squash(family) == wanted.family_key);
            if !family_matches {
                continue;
            }
            let cost = u32::from(face.weight.0.abs_diff(wanted.weight.0))
                + if face.style == wanted.style { 0 } else { 1000 };
            if best.is_none_or(|(c, _)| cost < c) {
                best = Some((cost, face.id));
            }
        }
        best.and_then(|(_, id)| self.face_bytes(id))
    }
}

impl FontProvider for SystemFonts {
    fn load(&self, name: &str) -> Option<FontBytes> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let file_name = if Path::new(name).extension().is_some() {
            name.to_owned()
        } else {
            format!("{name}.ttf")
        };
        Self::read_file(Path::new(&file_name))
            .or_else(|| Self::read_file(&self.font_dir.join(&file_name)))
            .or_else(|| self.query_family(name))
    }

    fn fallback(&self) -> Option<FontBytes> {
        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        self.db
            .query(&query)
            .or_else(|| self.db.faces().next().map(|f| f.id))
            .and_then(|id| self.face_bytes(id))
    }
}

/// Family, weight and style guessed from a font file name.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FaceRequest {
    /// Lowercase family with spaces removed, e.g. `dejavusansmono`.
    pub family_key: String,
    pub weight: fontdb::Weight,
    pub style: fontdb::Style,
}

impl FaceRequest {
    pub(crate) fn from_font_name(name: &str) -> Self {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        let (family, variant) = match stem.split_once('-') {
            Some((family, variant)) => (family, variant.to_ascii_lowercase()),
            None => (stem, String::new()),
        };

        let weight = if variant.contains("extrabold") || variant.contains("black") {
            fontdb::Weight::BLACK
        } else if variant.contains("semibold") {
            fontdb::Weight::SEMIBOLD
        } else if variant.contains("bold") {
            fontdb::Weight::BOLD
        } else if variant.contains("medium") {
            fontdb::Weight::MEDIUM
        } else if variant.contains("extralight") || variant.contains("thin") {
            fontdb::Weight::THIN
        } else if variant.contains("light") {
            fontdb::Weight::LIGHT
        } else {
            fontdb::Weight::NORMAL
        };
        let style = if variant.contains("italic") {
            fontdb::Style::Italic
        } else if variant.contains("oblique") {
            fontdb::Style::Oblique
        } else {
            fontdb::Style::Normal
        };

        Self {
            family_key: squash(family),
            weight,
            style,
        }
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layers/fonts.rs"]
mod tests;
