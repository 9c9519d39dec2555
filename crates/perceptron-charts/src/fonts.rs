// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Font discovery and registration
//!
//! Chart text is rasterised with a TrueType font registered under the
//! `sans-serif` family for every font style. Registration happens once per
//! process; later calls return the font that was registered first.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use plotters::style::{register_font, FontStyle};
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};

/// Family name the renderers use
pub const FONT_FAMILY: &str = "sans-serif";

/// Common system font locations, tried in order
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Locate a font file
///
/// A configured path must exist; otherwise the first existing entry of
/// [`FONT_CANDIDATES`] wins.
pub fn find_font(configured: Option<&Path>) -> ChartResult<PathBuf> {
    let searched: Vec<PathBuf> = match configured {
        Some(path) => vec![path.to_path_buf()],
        None => FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
    };

    if let Some(found) = searched.iter().find(|path| path.is_file()).cloned() {
        return Ok(found);
    }
    Err(ChartError::FontUnavailable { searched })
}

/// Find a font and register it for all styles of [`FONT_FAMILY`]
///
/// Returns the path of the registered font.
pub fn register_fonts(configured: Option<&Path>) -> ChartResult<PathBuf> {
    let mut registered = REGISTERED
        .lock()
        .map_err(|_| ChartError::Draw("font registry lock poisoned".to_string()))?;
    if let Some(path) = registered.as_ref() {
        debug!("Font already registered: {}", path.display());
        return Ok(path.clone());
    }

    let path = find_font(configured)?;
    let bytes = std::fs::read(&path).map_err(|e| ChartError::io(&path, e))?;
    // plotters keeps a 'static reference for the rest of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    for style in [
        FontStyle::Normal,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::Oblique,
    ] {
        register_font(FONT_FAMILY, style, bytes)
            .map_err(|_| ChartError::InvalidFont(path.clone()))?;
    }

    info!("Registered chart font {}", path.display());
    *registered = Some(path.clone());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configured_font() {
        let err = find_font(Some(Path::new("/definitely/not/here.ttf"))).unwrap_err();
        match err {
            ChartError::FontUnavailable { searched } => {
                assert_eq!(searched, vec![PathBuf::from("/definitely/not/here.ttf")]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_configured_font_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ttf");
        std::fs::write(&path, b"not really a font").unwrap();
        assert_eq!(find_font(Some(&path)).unwrap(), path);
    }

    #[test]
    fn test_search_lists_every_candidate() {
        if let Err(ChartError::FontUnavailable { searched }) = find_font(None) {
            assert_eq!(searched.len(), FONT_CANDIDATES.len());
        }
    }
}
