//! `/bin/sh` children that exit with a scripted sequence of statuses.
//!
//! Each run bumps a counter file and exits with the status at that position
//! (1-based); past the end of the list it exits 0.

use std::path::{Path, PathBuf};
use untl_core::invoke::Invocation;

const SCRIPT: &str = r#"c=$1; shift
n=$(cat "$c" 2>/dev/null || echo 0)
n=$((n + 1))
echo "$n" > "$c"
eval "s=\${$n:-0}"
exit "$s""#;

pub struct Scripted {
    pub invocation: Invocation,
    counter: PathBuf,
}

impl Scripted {
    pub fn new(dir: &Path, statuses: &[i32]) -> Self {
        let counter = dir.join("runs");
        let mut argv = vec![
            "sh".to_string(),
            "-c".to_string(),
            SCRIPT.to_string(),
            "sh".to_string(),
            counter.to_string_lossy().into_owned(),
        ];
        argv.extend(statuses.iter().map(|s| s.to_string()));
        Self {
            invocation: Invocation::from_argv(argv).unwrap(),
            counter,
        }
    }

    /// How many times the child has run so far.
    pub fn runs(&self) -> u64 {
        std::fs::read_to_string(&self.counter)
            .map(|s| s.trim().parse().unwrap())
            .unwrap_or(0)
    }
}
