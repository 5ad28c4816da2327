use std::process::{Command, Output};

fn stopwatch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stopwatch"))
        .args(args)
        .output()
        .expect("failed to spawn stopwatch")
}

#[test]
fn test_invalid_delay_exits_with_usage() {
    let output = stopwatch(&["-d", "abc"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("-d"));
    assert!(stderr.contains("abc"));
    assert!(stderr.contains("Usage: stopwatch [-d <delay>]"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_goes_to_stderr() {
    let output = stopwatch(&["-h"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: stopwatch"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_positional_argument_rejected() {
    let output = stopwatch(&["later"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("unexpected argument"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_zero_delay_is_fatal() {
    let output = stopwatch(&["-d", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("refresh interval must be greater than zero"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_version() {
    let output = stopwatch(&["-V"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("stopwatch "));
}

#[test]
fn test_unrepresentable_delay_is_fatal() {
    let output = stopwatch(&["-d", "18446744073709551615"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("refresh interval is too large"));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_interrupt_ends_run_cleanly() {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;
    use std::process::Stdio;
    use std::time::Duration;

    let child = Command::new(env!("CARGO_BIN_EXE_stopwatch"))
        .args(["-d", "0.2"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn stopwatch");

    std::thread::sleep(Duration::from_millis(1000));
    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).expect("failed to send SIGINT");

    let output = child.wait_with_output().expect("stopwatch did not exit");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.ends_with("\n\n"));
    assert!(!stdout.ends_with("\n\n\n"));

    let updates: Vec<&str> = stdout.lines().filter(|line| !line.is_empty()).collect();
    assert!((3..=7).contains(&updates.len()), "updates: {updates:?}");
    assert!(updates.iter().all(|line| line.starts_with("0:00'0")));
}
