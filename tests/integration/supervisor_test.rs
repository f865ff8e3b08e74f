//! Supervising real child processes through `sh`

use fpb::{Config, Outcome, SupervisorError};

use crate::helpers::{run_program, run_script};

const TRANSCODE: &str = r#"
printf "Input #0, mov,mp4, from '/media/clip.mp4':\n" >&2
printf "  Duration: 00:00:10.00, start: 0.000000, bitrate: 1000 kb/s\n" >&2
printf "frame=  120 fps= 24 q=28.0 size=256kB time=00:00:05.00 bitrate=419.4kbits/s\r" >&2
printf "frame=  240 fps= 24 q=28.0 size=512kB time=00:00:09.00 bitrate=419.4kbits/s\r" >&2
exit 0
"#;

#[test]
fn successful_run_completes_the_bar() {
    let (result, out) = run_script(TRANSCODE, "");
    assert_eq!(result.unwrap(), Outcome::Completed);
    assert!(out.contains("clip.mp4 "));
    assert!(out.contains("100.0% • 10/10"));
    assert!(out.ends_with('\n'));
}

#[test]
fn successful_run_hides_diagnostics() {
    let (_, out) = run_script(TRANSCODE, "");
    assert!(!out.contains("Input #0"));
    assert!(!out.contains("bitrate"));
}

#[test]
fn stdout_is_not_captured() {
    let (result, out) = run_script("echo to-stdout; exit 0", "");
    assert_eq!(result.unwrap(), Outcome::Completed);
    assert!(!out.contains("to-stdout"));
}

#[test]
fn failure_replays_diagnostics_once() {
    let script = r#"printf "in.mp4: No such file or directory\n" >&2; exit 1"#;
    let (result, out) = run_script(script, "");
    assert_eq!(result.unwrap(), Outcome::Failed(1));
    assert_eq!(out, "in.mp4: No such file or directory\n");
}

#[test]
fn failure_keeps_exit_code() {
    let (result, _) = run_script("exit 69", "");
    assert_eq!(result.unwrap().exit_code(), 69);
}

#[test]
fn failure_after_progress_replays_raw_bytes() {
    let script = r#"
printf "Duration: 00:00:10.00\n" >&2
printf "time=00:00:02.00\r" >&2
printf "Conversion failed!\n" >&2
exit 1
"#;
    let (result, out) = run_script(script, "");
    assert_eq!(result.unwrap(), Outcome::Failed(1));
    assert!(out.ends_with("Duration: 00:00:10.00\ntime=00:00:02.00\rConversion failed!\n"));
    assert_eq!(out.matches("Conversion failed!").count(), 1);
}

const OVERWRITE: &str = r#"
printf "File 'out.mp4' already exists. Overwrite? [y/N] " >&2
read answer
[ "$answer" = "y" ] && exit 0
exit 3
"#;

#[test]
fn prompt_answer_reaches_program() {
    let (result, out) = run_script(OVERWRITE, "y\n");
    assert_eq!(result.unwrap(), Outcome::Completed);
    assert!(out.contains("Overwrite? [y/N] "));
}

#[test]
fn declined_prompt_fails_run() {
    let (result, _) = run_script(OVERWRITE, "n\n");
    assert_eq!(result.unwrap(), Outcome::Failed(3));
}

#[test]
fn closed_input_closes_program_stdin() {
    let (result, _) = run_script(OVERWRITE, "");
    assert_eq!(result.unwrap(), Outcome::Failed(3));
}

#[test]
fn killed_program_maps_signal_to_exit_code() {
    let (result, _) = run_script("kill -9 $$", "");
    assert_eq!(result.unwrap(), Outcome::Failed(137));
}

#[test]
fn missing_program_is_a_spawn_error() {
    let config = Config::wrapping("fpb-test-no-such-program");
    let (result, out) = run_program(config, &["-i", "in.mp4"], "");
    let err = result.unwrap_err();
    assert!(matches!(err, SupervisorError::Spawn { .. }));
    assert_eq!(err.to_string(), "Error starting fpb-test-no-such-program");
    assert!(out.is_empty());
}

#[test]
fn oversized_frame_rate_still_completes() {
    let script = r#"printf "99999999999999999999 fps\ntime=00:00:02.00\n" >&2; exit 0"#;
    let (result, out) = run_script(script, "");
    assert_eq!(result.unwrap(), Outcome::Completed);
    assert!(out.ends_with('\n'));
}
