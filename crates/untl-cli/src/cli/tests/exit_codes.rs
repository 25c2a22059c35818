//! End-to-end runs through `run_from_args` (exit codes, short-circuits).

use super::{run, EXIT_OK, EXIT_USAGE};

#[test]
fn help_exits_zero_without_running_command() {
    // The command would fail to launch (127) if it were ever run.
    assert_eq!(run(&["untl", "-h", "/nonexistent/untl-cli-test"]), EXIT_OK);
    assert_eq!(run(&["untl", "--help"]), EXIT_OK);
}

#[test]
fn version_exits_zero_without_running_command() {
    assert_eq!(run(&["whle", "-v", "/nonexistent/untl-cli-test"]), EXIT_OK);
    assert_eq!(run(&["repeat", "--version"]), EXIT_OK);
}

#[test]
fn missing_command_is_usage_error() {
    assert_eq!(run(&["untl"]), EXIT_USAGE);
    assert_eq!(run(&["untl", "-l", "3"]), EXIT_USAGE);
}

#[test]
fn bad_option_is_usage_error() {
    assert_eq!(run(&["untl", "--bogus", "true"]), EXIT_USAGE);
    assert_eq!(run(&["untl", "-w", "-u", "true"]), EXIT_USAGE);
    assert_eq!(run(&["untl", "-i", "x", "true"]), EXIT_USAGE);
}

#[test]
fn launch_failure_is_reported_distinctly() {
    assert_eq!(run(&["untl", "-i", "0", "/nonexistent/untl-cli-test"]), 127);
    assert_eq!(
        run(&["repeat", "-i", "0", "-l", "5", "/nonexistent/untl-cli-test"]),
        127
    );
}

#[cfg(unix)]
#[test]
fn completion_exits_zero_regardless_of_child_status() {
    assert_eq!(run(&["untl", "-i", "0", "true"]), EXIT_OK);
    assert_eq!(run(&["untl", "-i", "0", "-l", "2", "false"]), EXIT_OK);
    assert_eq!(run(&["whle", "-i", "0", "false"]), EXIT_OK);
    assert_eq!(run(&["untl", "-i", "0", "-r", "3", "sh", "-c", "exit 3"]), EXIT_OK);
}

#[cfg(unix)]
#[test]
fn config_files_are_not_read() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_dir = dir.path().join("untl");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "retval = \"x\"\nlimit = 4\n").unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let runs = dir.path().join("runs");
    let script = format!("echo x >> '{}'; exit 0", runs.display());
    assert_eq!(run(&["untl", "-i", "0", "sh", "-c", &script]), EXIT_OK);
    let count = std::fs::read_to_string(&runs).unwrap().lines().count();
    assert_eq!(count, 1);
}
