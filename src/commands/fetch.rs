use crate::core::download::Downloader;
use crate::core::extract;
use crate::error::Result;
use crate::utils::console::ConfirmationProvider;
use std::path::Path;

/// Runs the full sequence: download (or skip when the archive is already
/// on disk), then ask before unpacking. A download failure aborts before
/// the prompt; a declined prompt ends the run without extracting.
pub fn fetch_and_extract(
    url: &str,
    archive_path: &Path,
    extract_dir: &Path,
    prompt: &dyn ConfirmationProvider,
) -> Result<()> {
    let downloader = Downloader::new()?;
    downloader.fetch(url, archive_path)?;

    if prompt.confirm("Do you want to extract the archive?")? {
        extract::extract_archive(archive_path, extract_dir)?;
    }

    Ok(())
}
