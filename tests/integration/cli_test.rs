//! Command-line behavior of the fpb binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage() {
    Command::cargo_bin("fpb")
        .unwrap()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: fpb <ffmpeg-args>"));
}

#[test]
fn missing_ffmpeg_reports_start_error() {
    Command::cargo_bin("fpb")
        .unwrap()
        .env("PATH", "/nonexistent")
        .args(["-i", "in.mp4", "out.mkv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error starting ffmpeg"));
}

#[test]
fn help_flag_is_passed_through() {
    Command::cargo_bin("fpb")
        .unwrap()
        .env("PATH", "/nonexistent")
        .arg("--help")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error starting ffmpeg"));
}

/// Spawn fpb with a fake `ffmpeg` that reports progress, records its pid,
/// then sleeps. Returns fpb and the pid file.
#[cfg(unix)]
fn spawn_with_sleeping_ffmpeg(name: &str) -> (std::process::Child, std::path::PathBuf) {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::process::Stdio;

    let dir = std::env::temp_dir().join(format!("fpb-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let pid_file = dir.join("ffmpeg.pid");
    let script = format!(
        "#!/bin/sh\necho $$ > '{}'\nprintf 'time=00:00:01.00\\n' >&2\nexec sleep 30\n",
        pid_file.display()
    );
    let fake = dir.join("ffmpeg");
    fs::write(&fake, script).unwrap();
    fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

    let path = format!("{}:{}", dir.display(), std::env::var("PATH").unwrap_or_default());
    let child = std::process::Command::new(assert_cmd::cargo::cargo_bin("fpb"))
        .env("PATH", path)
        .args(["-i", "in.mp4", "out.mkv"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    (child, pid_file)
}

#[cfg(unix)]
#[test]
fn sigterm_kills_ffmpeg_and_exits_143() {
    use std::io::Read;

    let (mut fpb, pid_file) = spawn_with_sleeping_ffmpeg("sigterm");
    let mut stderr = fpb.stderr.take().unwrap();

    // The first drawn byte means signals are registered and ffmpeg runs.
    let mut first = [0u8; 1];
    stderr.read_exact(&mut first).unwrap();
    let ffmpeg_pid: i32 = std::fs::read_to_string(&pid_file)
        .unwrap()
        .trim()
        .parse()
        .unwrap();

    assert_eq!(unsafe { libc::kill(fpb.id() as i32, libc::SIGTERM) }, 0);

    let mut rest = String::new();
    stderr.read_to_string(&mut rest).unwrap();
    let status = fpb.wait().unwrap();

    assert_eq!(status.code(), Some(143));
    assert!(rest.contains("Exiting."));
    // fpb reaps what it kills, so the pid is gone.
    assert_eq!(unsafe { libc::kill(ffmpeg_pid, 0) }, -1);
    let _ = std::fs::remove_dir_all(pid_file.parent().unwrap());
}
