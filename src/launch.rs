use std::{collections::HashMap, ffi::{OsStr, OsString}, process::{Command, ExitStatus, Stdio}};

use crate::{Error, Result};

/// Exit code used when the child's status carries neither a code nor a signal.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Runs `program` with exactly the variables in `env`, sharing the launcher's
/// stdin, stdout and stderr, and waits for it to terminate.
pub fn spawn_and_wait(program: &OsStr, args: &[OsString], env: &HashMap<OsString, OsString>) -> Result<ExitStatus> {
    Command::new(program)
        .args(args)
        .env_clear()
        .envs(env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| Error::spawn(program, err))
}

/// Process exit code equivalent to `status`. A child killed by a signal maps
/// to `128 + signal`, like a shell reports it.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(signal) => 128 + signal,
        None => FALLBACK_EXIT_CODE,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    FALLBACK_EXIT_CODE
}
