use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// External command failure carrying the verbatim combined output for
/// diagnosis. Downcast from `anyhow::Error` to inspect the output.
#[derive(Debug, Error)]
#[error("`{command}` failed with exit code {exit_code:?}, output: {combined_output}")]
pub struct CommandFailed {
    pub command: String,
    pub exit_code: Option<i32>,
    pub combined_output: String,
}

/// Result of a finished external command: the exit code plus trimmed
/// stdout and stderr joined into one transcript.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub combined_output: String,
}

/// Runs `program` with `args` inside `dir`, waiting for exit and capturing
/// combined output. A non-zero exit becomes a [`CommandFailed`] error.
///
/// # Errors
/// Returns error if the command cannot be spawned or exits non-zero.
pub async fn run_in_dir(program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .with_context(|| format!("failed to run `{}`", printable(program, args)))?;

    finish(program, args, output)
}

/// Runs `program` with `args`, feeding `input` to the child's stdin. Used
/// for tools that take their payload on stdin rather than as an argument.
///
/// # Errors
/// Returns error if the command cannot be spawned, stdin cannot be
/// written, or the command exits non-zero.
pub async fn run_with_stdin(program: &str, args: &[&str], input: &str) -> Result<CommandOutput> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to run `{}`", printable(program, args)))?;

    let mut stdin = child.stdin.take().context("child stdin not captured")?;
    stdin
        .write_all(input.as_bytes())
        .await
        .with_context(|| format!("failed to write stdin of `{program}`"))?;
    drop(stdin);

    let output = child
        .wait_with_output()
        .await
        .with_context(|| format!("failed to wait for `{program}`"))?;

    finish(program, args, output)
}

fn finish(program: &str, args: &[&str], output: std::process::Output) -> Result<CommandOutput> {
    let combined_output = combine(&output.stdout, &output.stderr);
    let exit_code = output.status.code();

    if !output.status.success() {
        return Err(CommandFailed {
            command: printable(program, args),
            exit_code,
            combined_output,
        }
        .into());
    }

    Ok(CommandOutput {
        exit_code,
        combined_output,
    })
}

fn printable(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

fn combine(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stderr);
    }
    combined
}
