//! The static asset surface.
//!
//! Every image and document the app shows is an opaque file under one
//! asset directory: hero backgrounds, gallery photos, the logo and the
//! brochure. This module resolves that directory, sanity-checks it at
//! startup, preloads hero backgrounds off the UI thread and exports the
//! brochure through a native save dialog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use iced::widget::image;
use thiserror::Error;
use walkdir::WalkDir;

/// Files the interface references by name. Checked once at startup;
/// a missing entry degrades that spot to its fallback rendering, it
/// never aborts the app.
pub const MANIFEST: [&str; 13] = [
    "home1.webp",
    "who.webp",
    "impact.webp",
    "about.webp",
    "about2.webp",
    "about3.webp",
    "1.webp",
    "13.webp",
    "15.webp",
    "26.webp",
    "30.webp",
    "logo.png",
    "brochure.pdf",
];

/// File name of the downloadable brochure.
pub const BROCHURE: &str = "brochure.pdf";

/// Suggested name when the visitor saves the brochure elsewhere.
pub const BROCHURE_EXPORT_NAME: &str = "WEDA-Brochure.pdf";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] ::image::ImageError),
}

/// Resolved asset directory.
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    /// Resolve the asset directory: an explicit override from the
    /// config, or `assets/` next to the working directory.
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        let root = override_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("assets"));
        Assets { root }
    }

    /// Absolute-ish path of a named asset.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Scan the asset directory and report how many manifest entries
    /// are missing. Walks the tree once instead of stat-ing each entry
    /// so nested layouts still pass.
    pub fn verify(&self) -> usize {
        let found: HashSet<String> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();

        let mut missing = 0;
        for name in MANIFEST {
            if !found.contains(name) {
                log::warn!("asset missing: {}", self.path(name).display());
                missing += 1;
            }
        }

        if missing == 0 {
            log::info!("all {} assets present under {}", MANIFEST.len(), self.root.display());
        }
        missing
    }
}

/// Load and decode an image off the UI thread, yielding a widget
/// handle once it is known to be displayable. The caller flips its
/// loaded flag on success; on failure the fallback gradient simply
/// stays up.
pub async fn preload(path: PathBuf) -> Result<image::Handle, AssetError> {
    let bytes = tokio::fs::read(&path).await?;

    // Decode eagerly so a corrupt file fails here, in the background,
    // rather than inside the renderer.
    ::image::load_from_memory(&bytes)?;

    Ok(image::Handle::from_bytes(bytes))
}

/// Copy the brochure wherever the visitor points the save dialog.
/// Resolves to `Ok(None)` when the dialog is cancelled.
pub async fn export_brochure(source: PathBuf) -> Result<Option<PathBuf>, String> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Save the WEDA brochure")
        .set_file_name(BROCHURE_EXPORT_NAME);

    if let Some(downloads) = dirs::download_dir() {
        dialog = dialog.set_directory(downloads);
    }

    let Some(target) = dialog.save_file().await else {
        return Ok(None);
    };

    let target = target.path().to_path_buf();
    tokio::fs::copy(&source, &target)
        .await
        .map_err(|e| format!("could not save brochure: {e}"))?;

    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        let assets = Assets::resolve(None);
        assert_eq!(assets.path("logo.png"), PathBuf::from("assets/logo.png"));
    }

    #[test]
    fn test_override_root() {
        let assets = Assets::resolve(Some(Path::new("/srv/weda")));
        assert_eq!(assets.path("brochure.pdf"), PathBuf::from("/srv/weda/brochure.pdf"));
    }

    #[test]
    fn test_verify_reports_missing_entries() {
        // Point at a directory that cannot contain the assets.
        let dir = std::env::temp_dir().join("weda-assets-empty");
        std::fs::create_dir_all(&dir).unwrap();
        let assets = Assets::resolve(Some(&dir));
        assert_eq!(assets.verify(), MANIFEST.len());
    }

    #[test]
    fn test_verify_finds_nested_files() {
        let dir = std::env::temp_dir().join("weda-assets-nested");
        std::fs::create_dir_all(dir.join("photos")).unwrap();
        std::fs::write(dir.join("photos").join("logo.png"), b"png").unwrap();
        let assets = Assets::resolve(Some(&dir));
        assert_eq!(assets.verify(), MANIFEST.len() - 1);
    }
}
