//! Command line surface.
//!
//! Parses `--cidr` and `--address`, runs the membership check and maps the
//! result onto the process exit code:
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | address is inside the network |
//! | 1 | address is valid but outside the network |
//! | 2 | usage error or unparseable input |

use crate::error::ParseError;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::ffi::OsString;

pub const APP_NAME: &str = "cidr-contains";

pub const EXIT_CODE_OK: u8 = 0;
pub const EXIT_CODE_NOT_CONTAINS: u8 = 1;
pub const EXIT_CODE_USAGE_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = APP_NAME,
    about = "check whether a CIDR contains an IP address",
    disable_version_flag = true
)]
pub struct Args {
    /// CIDR (ex. 192.0.2.0/24, 2001:db8::/32)
    #[arg(short, long, value_name = "CIDR")]
    pub cidr: String,

    /// IP address (ex. 192.0.2.1, 2001:db8::1)
    #[arg(short, long, value_name = "ADDRESS")]
    pub address: String,

    /// Print the version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

/// What a single invocation ended with.
#[derive(Debug)]
pub enum Outcome {
    Contained,
    NotContained,
    /// `--version` was requested.
    Version(&'static str),
    /// `--help` output, or an argument error rendered by clap.
    Clap(clap::Error),
    /// An argument value that is not a CIDR or IP address.
    Invalid(ParseError),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Contained | Outcome::Version(_) => EXIT_CODE_OK,
            Outcome::NotContained => EXIT_CODE_NOT_CONTAINS,
            Outcome::Clap(e) if !e.use_stderr() => EXIT_CODE_OK,
            Outcome::Clap(_) | Outcome::Invalid(_) => EXIT_CODE_USAGE_ERROR,
        }
    }

    /// Write whatever the user should see. Membership answers print nothing.
    pub fn report(&self) {
        match self {
            Outcome::Contained | Outcome::NotContained => {}
            Outcome::Version(version) => println!("{version}"),
            Outcome::Clap(e) => {
                if let Err(io_err) = e.print() {
                    log::error!("failed to print usage: {io_err}");
                }
            }
            Outcome::Invalid(e) => eprint!("\n{} {e}\n", "Error:".red()),
        }
    }
}

/// The clap command with the version wired in.
pub fn command(version: &'static str) -> clap::Command {
    Args::command().version(version)
}

/// Run one invocation. `args` includes the program name, as with `std::env::args_os`.
pub fn run<I, T>(args: I, version: &'static str) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = command(version)
        .try_get_matches_from(args)
        .and_then(|matches| Args::from_arg_matches(&matches));

    let args = match parsed {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => return Outcome::Version(version),
        Err(e) => {
            log::debug!("argument error kind={:?}", e.kind());
            return Outcome::Clap(e);
        }
    };
    log::trace!("args={:?}", args);

    match crate::contains(&args.cidr, &args.address) {
        Ok(true) => Outcome::Contained,
        Ok(false) => Outcome::NotContained,
        Err(e) => {
            log::debug!("rejected input: {e}");
            Outcome::Invalid(e)
        }
    }
}
