//! Harness for running the `lorem` binary in integration tests.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Environment variables for deterministic width detection and logging.
pub const DEFAULT_ENV: &[(&str, &str)] = &[("COLUMNS", "80"), ("LOREM_LOG", "off")];

/// Result of one `lorem` invocation.
#[derive(Clone, Debug)]
pub struct Run {
    /// Exit status code (None if killed by a signal).
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl Run {
    /// Stdout as UTF-8, panicking on invalid data.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.stdout).expect("stdout is not UTF-8")
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<Output> for Run {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run `lorem` with `args` under [`DEFAULT_ENV`].
pub fn lorem(args: &[&str]) -> Run {
    Command::new(env!("CARGO_BIN_EXE_lorem"))
        .args(args)
        .envs(DEFAULT_ENV.iter().copied())
        .output()
        .expect("failed to spawn lorem")
        .into()
}
