use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Downloaded chain files land here; the directory is expected to exist
pub const CHAINFILE_DIR: &str = "library/chainfiles";

/// Abstraction over the external download tool so the interactive session
/// can be exercised without spawning processes
pub trait Downloader {
    /// Fetch a scheme-less URL (host/path/filename) to the given output path
    fn download(&mut self, url: &str, output: &Path) -> Result<()>;
}

/// Runs wget with timestamping, so an up-to-date local copy is not
/// re-fetched
pub struct WgetDownloader;

impl WgetDownloader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WgetDownloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Local destination for a chain file: library/chainfiles/<build>To<target>.over.chain.gz
pub fn output_path(build: &str, target: &str) -> PathBuf {
    PathBuf::from(CHAINFILE_DIR).join(format!("{build}To{target}.over.chain.gz"))
}

/// Argument vector for the wget invocation
///
/// The ftp:// prefix is applied to the scheme-less URL as-is; UCSC serves
/// the same tree over ftp and https.
pub fn wget_args(url: &str, output: &Path) -> Vec<String> {
    vec![
        "--timestamping".to_string(),
        format!("ftp://{url}"),
        "-O".to_string(),
        output.display().to_string(),
    ]
}

impl Downloader for WgetDownloader {
    fn download(&mut self, url: &str, output: &Path) -> Result<()> {
        let args = wget_args(url, output);
        println!("wget {}", args.join(" "));

        // arguments are passed as a vector, nothing goes through a shell
        match Command::new("wget").args(&args).status() {
            Ok(status) if status.success() => {
                info!("wget finished successfully for {}", url);
            }
            Ok(status) => {
                warn!("wget exited with status {} for {}", status, url);
            }
            Err(e) => {
                warn!("Failed to run wget for {}: {}", url, e);
            }
        }

        // a failed download does not abort the session
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_format() {
        let path = output_path("hg19", "Mm10");
        assert_eq!(path, PathBuf::from("library/chainfiles/hg19ToMm10.over.chain.gz"));
    }

    #[test]
    fn test_wget_args_prefix_and_order() {
        let url = "hgdownload.soe.ucsc.edu/goldenPath/hg19/liftOver/hg19ToMm10.over.chain.gz";
        let args = wget_args(url, &output_path("hg19", "Mm10"));

        assert_eq!(
            args,
            vec![
                "--timestamping",
                "ftp://hgdownload.soe.ucsc.edu/goldenPath/hg19/liftOver/hg19ToMm10.over.chain.gz",
                "-O",
                "library/chainfiles/hg19ToMm10.over.chain.gz",
            ]
        );
    }

    #[test]
    fn test_command_line_contains_full_url() {
        let url = "hgdownload.soe.ucsc.edu/goldenPath/hg19/liftOver/hg19ToMm10.over.chain.gz";
        let rendered = wget_args(url, &output_path("hg19", "Mm10")).join(" ");

        assert!(rendered.contains(
            "ftp://hgdownload.soe.ucsc.edu/goldenPath/hg19/liftOver/hg19ToMm10.over.chain.gz"
        ));
        assert!(rendered.contains("library/chainfiles/hg19ToMm10.over.chain.gz"));
    }
}
