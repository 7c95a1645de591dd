use crate::error::{Result, SemverError};
use crate::git::{split_tag_lines, TagSource};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Lists tags by running the `git` executable
///
/// The directory is handed to the child process as its working directory.
pub struct CommandTagSource {
    program: String,
}

impl CommandTagSource {
    /// Use `git` from `PATH`
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<String>) -> Self {
        CommandTagSource {
            program: program.into(),
        }
    }
}

impl Default for CommandTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for CommandTagSource {
    fn list_tags(&self, dir: &Path) -> Result<Vec<String>> {
        // Surface a missing directory as an I/O error before spawning.
        std::fs::metadata(dir)?;

        debug!(program = %self.program, dir = %dir.display(), "running git tag");
        let output = Command::new(&self.program)
            .arg("tag")
            .current_dir(dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SemverError::tag_source(format!(
                "'{} tag' in {} exited with {}: {}",
                self.program,
                dir.display(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(split_tag_lines(&stdout))
    }
}
