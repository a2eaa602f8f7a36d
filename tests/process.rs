//! Runs the demo binary as a child process.
use std::process::Command;

fn demo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmdflags-demo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_exits_one() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let output = demo()
        .args(["file", "cat"])
        .arg(OsString::from_vec(b"file\xff.txt".to_vec()))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not valid UTF-8"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn test_unknown_command_exits_one() {
    let output = demo().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "unknown command name `frobnicate`\n"
    );
}

#[test]
fn test_completed_command_exits_zero() {
    let output = demo().args(["math", "add", "2", "3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5\n");
}
