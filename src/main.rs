use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Use the library modules
use corpusdl::commands;
use corpusdl::utils::console::{AssumeYes, ConfirmationProvider, ConsolePrompt};

/// Release mirror for the Ubuntu Dialogue Corpus v1.0.
const DEFAULT_URL: &str =
    "http://cs.mcgill.ca/~jpineau/datasets/ubuntu-corpus-1.0/ubuntu_dialogs.tgz";

#[derive(Parser)]
#[clap(name = "corpusdl")]
#[clap(about = "Downloads the Ubuntu Dialogue Corpus and optionally unpacks it")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Source URL for the corpus archive
    #[clap(default_value = DEFAULT_URL)]
    url: String,

    /// File the archive is downloaded to
    #[clap(short, long, default_value = "ubuntu_dialogs.tgz")]
    output: PathBuf,

    /// Directory the archive is unpacked into
    #[clap(long, default_value = ".")]
    extract_dir: PathBuf,

    /// Extract without asking
    #[clap(short, long)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let prompt: Box<dyn ConfirmationProvider> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(ConsolePrompt)
    };

    let result =
        commands::fetch::fetch_and_extract(&cli.url, &cli.output, &cli.extract_dir, prompt.as_ref())
            .map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
