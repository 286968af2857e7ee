use std::fmt::Display;

use clap::{error::ErrorKind, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program reads a Common Alerting Protocol (CAP) 1.2 document, checks that it decodes, and prints it back out in the standard's element order. Pass --json for a structural JSON dump instead.

See --help for more details.
"#;

const USAGE_LONG: &str = r#"
This program reads a Common Alerting Protocol (CAP) 1.2 document, checks that it decodes, and prints it back out in the standard's element order. Pass --json for a structural JSON dump instead.

Read a document from a file or from standard input:

    capdec --file alert.xml

    curl -s https://alerts.example.org/latest.xml | capdec

The decoder is permissive: fields are matched by element name anywhere in the document, unknown elements are skipped, and at most one <info> and one <area> block are kept. The printed document is a normalized rendition of the input, not a byte copy.

Every <polygon> and <circle> string is also checked against the standard's coordinate grammar. Bad geometry is reported on stderr but does not fail the run.

With --quiet, nothing is printed at all; the exit status alone reports whether the input decoded.

ALWAYS VALIDATE MESSAGES BEFORE DISSEMINATING THEM!
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print NOTHING, not even the decoded document
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file (or "-" for stdin)
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,

    /// Print a JSON dump instead of XML
    ///
    /// The dump is a structural rendition of the document tree for
    /// inspection and debugging. It is not a standard CAP encoding.
    #[arg(short, long)]
    pub json: bool,

    /// Generate a demonstration alert and exit
    ///
    /// No input is read. capdec builds a small test alert for a
    /// fictitious event in Pittsburgh, Pennsylvania, and prints it
    /// like a decoded document.
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }
}

/// A program-level error with exit code
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Create new error with a custom exit code
    pub fn new(error: anyhow::Error, code: i32) -> CliError {
        CliError {
            error,
            exit_code: code,
        }
    }

    /// Print this error to the terminal
    ///
    /// Errors from clap are printed verbatim. Other types of errors
    /// are printed indirectly via clap's fancy formatter.
    pub fn print(&self) -> std::io::Result<()> {
        if let Some(e) = self.error.downcast_ref::<clap::Error>() {
            e.print()
        } else {
            Args::command()
                .error(ErrorKind::Format, self.to_string())
                .print()
        }
    }

    /// Print this error to the terminal and exit
    pub fn exit(&self) -> ! {
        drop(self.print());
        std::process::exit(self.exit_code);
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> CliError {
        CliError::new(err, 1)
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        let code = if err.use_stderr() { 1 } else { 0 };
        CliError::new(err.into(), code)
    }
}
