use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Output},
    string::FromUtf8Error,
};

use thiserror::Error;
use tracing::{debug, instrument};

use super::NvramStore;
use crate::{NvramError, Result};

/// Failure of one `nvram` invocation.
#[derive(Error, Debug)]
enum ProgramError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("'{program}' printed a value that is not valid UTF-8: {source}")]
    NonUtf8 {
        program: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl ProgramError {
    fn into_store_access(self, operation: &str) -> NvramError {
        NvramError::store_access(operation, self)
    }
}

/// Default name of the nvram program, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "nvram";

/// Store backed by the `nvram` command-line tool.
///
/// Each primitive spawns one process:
///
/// ```text
/// nvram get KEY
/// nvram set KEY=VALUE
/// nvram unset KEY
/// nvram commit
/// ```
#[derive(Debug, Clone)]
pub struct CommandStore {
    program: PathBuf,
}

impl Default for CommandStore {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CommandStore {
    /// Creates a store that invokes `program` for every primitive.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program invoked by this store.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, operation: &str, args: &[&str]) -> io::Result<Output> {
        debug!(program = %self.program.display(), ?args, "Running nvram {operation}");
        Command::new(&self.program).args(args).output()
    }

    fn run_checked(
        &self,
        operation: &str,
        args: &[&str],
    ) -> std::result::Result<Output, ProgramError> {
        let program = || self.program.display().to_string();
        let output = self
            .run(operation, args)
            .map_err(|source| ProgramError::Spawn {
                program: program(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProgramError::Exit {
                program: program(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl NvramStore for CommandStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<String> {
        let output = self
            .run_checked("get", &["get", key])
            .map_err(|e| e.into_store_access("get"))?;

        String::from_utf8(output.stdout).map_err(|source| {
            ProgramError::NonUtf8 {
                program: self.program.display().to_string(),
                source,
            }
            .into_store_access("get")
        })
    }

    #[instrument(skip(self, value))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let assignment = format!("{key}={value}");
        self.run_checked("set", &["set", &assignment])
            .map_err(|e| e.into_store_access("set"))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn unset(&self, key: &str) -> Result<()> {
        self.run_checked("unset", &["unset", key])
            .map_err(|e| e.into_store_access("unset"))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn commit(&self) -> Result<()> {
        self.run_checked("commit", &["commit"])
            .map_err(|e| NvramError::Commit(e.to_string()))?;
        Ok(())
    }
}
