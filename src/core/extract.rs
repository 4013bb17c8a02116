use crate::error::{CorpusdlError, Result};
use crate::utils::fs;
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

/// Unpacks `archive_path` into `destination`, creating it if needed.
///
/// The format is picked from the file name. Entries unpacked before a
/// later one fails are left in place.
pub fn extract_archive(archive_path: &Path, destination: &Path) -> Result<()> {
    println!(
        "Extracting {} to {}...",
        archive_path.display(),
        destination.display()
    );

    fs::ensure_dir_exists(destination)?;

    let file_name = archive_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CorpusdlError::InvalidArchiveName {
            path: archive_path.to_path_buf(),
        })?;

    if file_name.ends_with(".tar.gz") || file_name.ends_with(".tgz") {
        extract_tar_gz(archive_path, destination)?;
    } else if file_name.ends_with(".tar") {
        extract_tar(archive_path, destination)?;
    } else if file_name.ends_with(".zip") {
        extract_zip(archive_path, destination)?;
    } else {
        return Err(CorpusdlError::UnsupportedArchive {
            name: file_name.to_string(),
        });
    }

    println!("Extraction completed successfully!");
    Ok(())
}

fn extract_tar_gz(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);
    archive.unpack(destination)?;
    Ok(())
}

fn extract_tar(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = Archive::new(file);
    archive.unpack(destination)?;
    Ok(())
}

fn extract_zip(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => continue,
        };

        if entry.name().ends_with('/') {
            fs::ensure_dir_exists(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::ensure_dir_exists(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_tar_gz(dir: &Path) -> PathBuf {
        let staged = dir.join("staged");
        std::fs::create_dir_all(staged.join("dialogs")).unwrap();
        std::fs::write(staged.join("README.txt"), "ubuntu dialogue corpus").unwrap();
        std::fs::write(staged.join("dialogs").join("1.tsv"), "hello\tworld\n").unwrap();

        let archive_path = dir.join("corpus.tgz");
        let gz = GzEncoder::new(File::create(&archive_path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(gz);
        builder.append_dir_all("corpus", &staged).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
        archive_path
    }

    #[test]
    fn unpacks_every_tar_gz_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = write_tar_gz(dir.path());
        let out = dir.path().join("out");

        extract_archive(&archive_path, &out).unwrap();

        assert_eq!(
            std::fs::read_to_string(out.join("corpus/README.txt")).unwrap(),
            "ubuntu dialogue corpus"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("corpus/dialogs/1.tsv")).unwrap(),
            "hello\tworld\n"
        );
    }

    #[test]
    fn unpacks_zip_entries_with_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("corpus.zip");

        let mut writer = zip::ZipWriter::new(File::create(&archive_path).unwrap());
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("notes.txt", options).unwrap();
        writer.write_all(b"top level").unwrap();
        writer.start_file("nested/deep.txt", options).unwrap();
        writer.write_all(b"nested entry").unwrap();
        writer.finish().unwrap();

        let out = dir.path().join("out");
        extract_archive(&archive_path, &out).unwrap();

        assert_eq!(
            std::fs::read_to_string(out.join("notes.txt")).unwrap(),
            "top level"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("nested/deep.txt")).unwrap(),
            "nested entry"
        );
    }

    #[test]
    fn rejects_archives_with_an_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("corpus.rar");
        std::fs::write(&archive_path, b"not really an archive").unwrap();

        let result = extract_archive(&archive_path, &dir.path().join("out"));
        assert!(matches!(
            result,
            Err(CorpusdlError::UnsupportedArchive { .. })
        ));
    }

    #[test]
    fn corrupt_gzip_data_fails_without_rolling_back() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("corpus.tgz");
        std::fs::write(&archive_path, b"\x1f\x8bdefinitely not gzip").unwrap();

        let out = dir.path().join("out");
        let result = extract_archive(&archive_path, &out);

        assert!(result.is_err());
        // the destination directory is created up front and stays
        assert!(out.exists());
    }
}
