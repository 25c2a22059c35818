//! Help and version text, addressed by the name the binary was started as.

use clap::CommandFactory;
use std::ffi::OsStr;
use std::path::Path;

use super::Cli;

/// Basename of `argv[0]`, or `untl` when there is none.
pub fn program_name(argv0: &OsStr) -> String {
    Path::new(argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untl".to_string())
}

pub fn help_text(progname: &str) -> String {
    let mut cmd = Cli::command().bin_name(progname.to_string());
    cmd.render_help().to_string()
}

pub fn version_text(progname: &str) -> String {
    format!("{} {}", progname, env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_is_basename() {
        assert_eq!(program_name(OsStr::new("/usr/bin/whle")), "whle");
        assert_eq!(program_name(OsStr::new("repeat")), "repeat");
        assert_eq!(program_name(OsStr::new("")), "untl");
    }

    #[test]
    fn help_uses_invocation_name() {
        let help = help_text("whle");
        assert!(help.contains("Usage: whle"), "help was: {}", help);
        assert!(help.contains("--interval"));
        assert!(help.contains("--repeat"));
    }

    #[test]
    fn version_names_program() {
        assert_eq!(
            version_text("repeat"),
            format!("repeat {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
