// src/system/executor.rs

use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command as StdCommand, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How often a running child is polled while a timeout is enforced.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Command '{command}' exited with a non-zero error code ({code}).")]
    NonZeroExitStatus { command: String, code: i32 },
    #[error("Command '{command}' did not finish within {timeout:?}.")]
    TimedOut { command: String, timeout: Duration },
}

/// Renders an argv as a shell-quoted line for logs and error messages.
pub fn display_command_line(argv: &[OsString]) -> String {
    let words: Vec<String> = argv
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    shlex::try_join(words.iter().map(String::as_str)).unwrap_or_else(|_| words.join(" "))
}

/// Maps an exit status to a process exit code. Signal terminations become 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

fn split_argv(argv: &[OsString]) -> Result<(&OsString, &[OsString]), ExecutionError> {
    argv.split_first().ok_or(ExecutionError::EmptyCommand)
}

/// Runs a command with inherited stdio and blocks until it exits.
/// Returns the child's exit code; a nonzero code is NOT an error here.
pub fn execute_inherited(argv: &[OsString], cwd: Option<&Path>) -> Result<i32, ExecutionError> {
    let (program, args) = split_argv(argv)?;
    let command_line = display_command_line(argv);
    log::debug!("Spawning: {}", command_line);

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = cwd {
        command.current_dir(dunce::simplified(dir));
    }

    let status = command
        .status()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;
    let code = exit_code(status);
    log::debug!("'{}' exited with {}", command_line, code);
    Ok(code)
}

/// Like [`execute_inherited`], but a nonzero exit is reported as
/// [`ExecutionError::NonZeroExitStatus`].
pub fn execute_checked(argv: &[OsString], cwd: Option<&Path>) -> Result<(), ExecutionError> {
    let code = execute_inherited(argv, cwd)?;
    if code != 0 {
        return Err(ExecutionError::NonZeroExitStatus {
            command: display_command_line(argv),
            code,
        });
    }
    Ok(())
}

/// Runs a command and captures its standard output (lossily decoded).
/// Stdin and stderr are discarded and the exit status is ignored.
///
/// With a `timeout`, the child is killed once it elapses and
/// [`ExecutionError::TimedOut`] is returned.
pub fn execute_and_capture_output(
    argv: &[OsString],
    timeout: Option<Duration>,
) -> Result<String, ExecutionError> {
    let (program, args) = split_argv(argv)?;
    let command_line = display_command_line(argv);
    log::debug!("Capturing output of: {}", command_line);

    let mut child = StdCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

    let Some(timeout) = timeout else {
        let output = child
            .wait_with_output()
            .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;
        return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
    };

    // The pipe is drained on a separate thread so a chatty child cannot block
    // on a full buffer while we poll for its exit.
    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = stdout.read_to_end(&mut buffer);
            buffer
        })
    });

    wait_with_deadline(&mut child, timeout, &command_line)?;

    let bytes = reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
    command_line: &str,
) -> Result<ExitStatus, ExecutionError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    log::debug!(
                        "Timeout reached, killing child process (PID: {})...",
                        child.id()
                    );
                    if let Err(e) = child.kill() {
                        log::warn!("Failed to kill child process {}: {}", child.id(), e);
                    }
                    child.wait().ok();
                    return Err(ExecutionError::TimedOut {
                        command: command_line.to_string(),
                        timeout,
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(ExecutionError::CommandFailed(command_line.to_string(), e));
            }
        }
    }
}
