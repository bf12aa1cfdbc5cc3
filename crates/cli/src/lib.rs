#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `fmask` command: parse, build, flatten, and evaluate
//! field masks from the shell. The root binary forwards its process
//! arguments and standard handles to [`run`] and converts the returned
//! status with [`exit_code_from`].
//!
//! # Design
//!
//! Arguments are declared with the clap builder API and converted into a
//! typed action before anything runs. Output goes to the `stdout` writer,
//! diagnostics to `stderr`, so tests drive the whole command with in-memory
//! buffers.
//!
//! | Subcommand                 | Output                                   |
//! |----------------------------|------------------------------------------|
//! | `parse <TEXT> [--invert]`  | canonical compact form                   |
//! | `paths <PATH>... [--naming STYLE]` | canonical compact form           |
//! | `check <TEXT> <PATH>...`   | `included`/`excluded`, tab, path         |
//! | `flatten <TEXT>`           | one dotted path per line                 |
//!
//! Global options: `-v` raises verbosity, `--log-level [CRATE=]LEVEL`
//! adjusts it per crate, `--log` replaces the filter with raw directives,
//! and `--max-depth` bounds mask nesting.
//!
//! # Errors
//!
//! Exit status is 0 on success, 1 when a mask is malformed or output
//! cannot be written, and 2 for usage errors.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["fmask", "parse", "b,a{c}"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert_eq!(stdout, b"a{c},b\n");
//! ```

use std::ffi::OsString;
use std::io::Write;

mod arguments;
mod command_builder;
mod execution;

use arguments::parse_args;
use execution::execute;

/// Program name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "fmask";

/// Status for a successful run.
pub const EXIT_OK: i32 = 0;
/// Status for a malformed mask or failed output.
pub const EXIT_FAILURE: i32 = 1;
/// Status for invalid command-line usage.
pub const EXIT_USAGE: i32 = 2;

const MAX_EXIT_CODE: i32 = 255;

/// Runs `fmask` with the given arguments, the first being the program name.
///
/// Returns the exit status; see the crate documentation for its meaning.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            let rendered = error.render();
            if error.use_stderr() {
                let _ = write!(stderr, "{rendered}");
                EXIT_USAGE
            } else {
                let _ = write!(stdout, "{rendered}");
                EXIT_OK
            }
        }
    }
}

/// Converts a status returned by [`run`] into a process exit code.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests;
