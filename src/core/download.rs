use crate::core::progress::TransferReporter;
use crate::error::Result;
use crate::utils::fs;
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const USER_AGENT: &str = concat!("corpusdl/", env!("CARGO_PKG_VERSION"));

/// Transfer buffer; also the granularity of progress updates.
const CHUNK_SIZE: usize = 8192;

/// Whether a fetch actually touched the network.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded,
    SkippedExisting,
}

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        // No overall deadline: the corpus archive routinely takes longer
        // than the client's default 30s request timeout.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None)
            .build()?;
        Ok(Downloader { client })
    }

    /// Streams `url` into `destination`, painting progress as bytes land.
    ///
    /// An existing destination file is taken as a finished download and
    /// skipped without touching the network. A failed transfer leaves any
    /// partially written file in place.
    pub fn fetch(&self, url: &str, destination: &Path) -> Result<FetchOutcome> {
        if destination.exists() {
            println!(
                "File {} already exists. Skipping download.",
                destination.display()
            );
            return Ok(FetchOutcome::SkippedExisting);
        }

        println!("Downloading {url} to {}", destination.display());

        if let Some(parent) = destination.parent() {
            fs::ensure_dir_exists(parent)?;
        }

        let mut response = self.client.get(url).send()?.error_for_status()?;
        let total_size = response.content_length();

        let mut file = File::create(destination)?;
        let mut reporter = TransferReporter::new(total_size);
        let mut buf = [0u8; CHUNK_SIZE];
        let mut downloaded: u64 = 0;

        loop {
            let read = response.read(&mut buf)?;
            if read == 0 {
                break;
            }
            file.write_all(&buf[..read])?;
            downloaded += read as u64;
            reporter.update(downloaded);
        }

        reporter.finish(downloaded);
        println!("Download completed successfully!");
        Ok(FetchOutcome::Downloaded)
    }
}
