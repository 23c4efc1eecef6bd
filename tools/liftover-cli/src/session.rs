use anyhow::Result;
use chain_listing::ChainListing;
use std::io::{BufRead, Write};
use tracing::warn;

use crate::download::{output_path, Downloader};

const DIVIDER: &str =
    "-------------------------------------------------------------------------------";

/// Where the interactive session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a target name or "Quit"
    AwaitingFileChoice,
    /// A target was chosen, waiting for "Yes" to confirm
    AwaitingDownloadConfirm(String),
    /// A download ran, waiting for "Continue" or anything else to stop
    AwaitingContinue,
    Terminated,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    None,
    ReportNotFound,
    Download(String),
}

/// Compute the next state and side effect for one line of input
///
/// Pure function of (state, input, listing); the driver loop performs the
/// returned action. Keywords are exact and case-sensitive.
pub fn transition(
    state: SessionState,
    input: &str,
    listing: &ChainListing,
) -> (SessionState, SessionAction) {
    match state {
        SessionState::AwaitingFileChoice => {
            if input == "Quit" {
                (SessionState::Terminated, SessionAction::None)
            } else if listing.get(input).is_some() {
                (SessionState::AwaitingDownloadConfirm(input.to_string()), SessionAction::None)
            } else {
                (SessionState::AwaitingFileChoice, SessionAction::ReportNotFound)
            }
        }
        SessionState::AwaitingDownloadConfirm(target) => match input {
            "Yes" => (SessionState::AwaitingContinue, SessionAction::Download(target)),
            "Quit" => (SessionState::Terminated, SessionAction::None),
            _ => (SessionState::AwaitingFileChoice, SessionAction::None),
        },
        SessionState::AwaitingContinue => {
            if input == "Continue" {
                (SessionState::AwaitingFileChoice, SessionAction::None)
            } else {
                (SessionState::Terminated, SessionAction::None)
            }
        }
        SessionState::Terminated => (SessionState::Terminated, SessionAction::None),
    }
}

fn prompt(state: &SessionState) -> &'static str {
    match state {
        SessionState::AwaitingFileChoice => {
            "Type conversion (i.e. AilMel1 ). Type \"Quit\" at anytime to cancel: "
        }
        SessionState::AwaitingDownloadConfirm(_) => {
            "Type \"Yes\" to confirm download or press any key to select another file: "
        }
        SessionState::AwaitingContinue => {
            "Type \"Continue\" to download another file or press any key to finish: "
        }
        SessionState::Terminated => "",
    }
}

/// Drive the interactive session until it terminates
///
/// Prints the available targets, then loops on the state machine. EOF on
/// the input stream ends the session as if "Quit" had been typed.
pub fn run<R: BufRead, W: Write>(
    listing: &ChainListing,
    input: &mut R,
    out: &mut W,
    downloader: &mut dyn Downloader,
) -> Result<()> {
    writeln!(out, "{DIVIDER}")?;
    writeln!(out, "Please enter the chain file you would like to download from the available files")?;
    writeln!(out, "{DIVIDER}")?;
    for target in listing.targets() {
        writeln!(out, "{target}")?;
    }

    let mut state = SessionState::AwaitingFileChoice;
    while state != SessionState::Terminated {
        write!(out, "{}", prompt(&state))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let (next, action) = transition(state, line.trim(), listing);
        match action {
            SessionAction::None => {}
            SessionAction::ReportNotFound => {
                writeln!(out, "File not found. Try again.")?;
            }
            SessionAction::Download(target) => {
                // transition only emits Download for targets in the listing
                if let Some(url) = listing.get(&target) {
                    writeln!(out, "Downloading {url}")?;
                    let dest = output_path(&listing.build, &target);
                    if let Err(e) = downloader.download(url, &dest) {
                        warn!("Download of {} failed: {:#}", url, e);
                    }
                }
            }
        }
        state = next;
    }

    Ok(())
}
