//! Configured font lookup
//!
//! `font.name` is matched against font file names in the usual system font
//! directories. When nothing matches, egui's built-in fonts stay in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;
use egui::{FontData, FontDefinitions, FontFamily};
use log::{info, warn};

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "ttc", "otf"];

/// Subdirectory levels searched below each font directory
const MAX_SEARCH_DEPTH: usize = 4;

fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}

fn is_font_named(path: &Path, name: &str) -> bool {
    let stem_matches = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case(name));
    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|f| e.eq_ignore_ascii_case(f)));
    stem_matches && ext_matches
}

fn search_dir(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if is_font_named(&path, name) {
            return Some(path);
        }
    }

    if depth == 0 {
        return None;
    }
    subdirs.sort();
    subdirs
        .iter()
        .find_map(|sub| search_dir(sub, name, depth - 1))
}

/// First font file under `dirs` whose stem equals `name`, ignoring case.
pub fn find_font_file(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    dirs.iter()
        .find_map(|dir| search_dir(dir, name, MAX_SEARCH_DEPTH))
}

/// Put the named font in front of egui's proportional family.
///
/// Returns `false` when the font could not be found or read.
pub fn install_font(ctx: &egui::Context, name: &str) -> bool {
    let Some(path) = find_font_file(name, &system_font_dirs()) else {
        info!("font {name:?} not found, using the default font");
        return false;
    };
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("cannot read font {}: {err}", path.display());
            return false;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    ctx.set_fonts(fonts);

    info!("using font {}", path.display());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gomoku-fonts-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_font_name_matching() {
        assert!(is_font_named(Path::new("/x/SimHei.TTF"), "simhei"));
        assert!(is_font_named(Path::new("simhei.otf"), "simhei"));
        assert!(!is_font_named(Path::new("simhei.txt"), "simhei"));
        assert!(!is_font_named(Path::new("simhei-bold.ttf"), "simhei"));
    }

    #[test]
    fn test_find_font_in_nested_dir() {
        let root = scratch_dir("nested");
        let nested = root.join("truetype").join("cjk");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("SimHei.ttf"), b"").unwrap();
        fs::write(root.join("other.ttf"), b"").unwrap();

        let dirs = vec![root.join("missing"), root.clone()];
        assert_eq!(find_font_file("simhei", &dirs), Some(nested.join("SimHei.ttf")));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_unknown_font_falls_back() {
        let root = scratch_dir("unknown");
        fs::write(root.join("other.ttf"), b"").unwrap();

        let dirs = vec![root.clone()];
        assert_eq!(find_font_file("no-such-font", &dirs), None);
        assert_eq!(find_font_file("", &dirs), None);

        fs::remove_dir_all(&root).unwrap();
    }
}
