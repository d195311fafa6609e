//! Resume-at-step persistence.
//!
//! The flow owns the truth about the current step; this module is the passive
//! mirror. Whenever the current step changes, the main loop writes its name
//! here, and on the next launch the saved name is mapped back to a `StepId`
//! and handed to the flow as a resume target. A missing, corrupt, or unknown
//! saved step simply means "start from the beginning".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::flow::StepId;

const STATE_DIR: &str = "workspace-onboard";
const STATE_FILE: &str = "session.toml";

#[derive(Debug, Serialize, Deserialize)]
struct SessionState {
    step: String,
}

/// Handle on the session state file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store in the platform state directory (falling back to the local data
    /// directory). `None` when neither can be determined.
    pub fn new() -> Option<Self> {
        let base = dirs::state_dir().or_else(dirs::data_local_dir)?;
        Some(Self {
            path: base.join(STATE_DIR).join(STATE_FILE),
        })
    }

    /// Store at an explicit path (config override, tests).
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved resume target, if any. Corrupt or unknown contents are
    /// treated as no saved session, with a warning in the log.
    pub fn load(&self) -> Option<StepId> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let state: SessionState = match toml::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!("ignoring corrupt session file {:?}: {e}", self.path);
                return None;
            }
        };
        match StepId::from_name(&state.step) {
            Some(step) => {
                info!("resuming session at step '{}'", step.short_name());
                Some(step)
            }
            None => {
                warn!("session file names unknown step '{}'", state.step);
                None
            }
        }
    }

    /// Mirror the current step name out to disk.
    pub fn store(&self, step: StepId) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let state = SessionState {
            step: step.short_name().to_string(),
        };
        std::fs::write(&self.path, toml::to_string(&state)?)?;
        Ok(())
    }

    /// Drop the saved session (wizard finished or `--fresh`).
    pub fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("failed to remove session file {:?}: {e}", self.path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn store_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.toml"));

        store.store(StepId::Branding).unwrap();
        assert_eq!(store.load(), Some(StepId::Branding));
    }

    #[test]
    fn missing_file_means_no_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::at(dir.path().join("session.toml"));

        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_file_means_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "step = [not toml").unwrap();

        assert_eq!(SessionStore::at(&path).load(), None);
    }

    #[test]
    fn unknown_step_name_means_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "step = \"billing\"\n").unwrap();

        assert_eq!(SessionStore::at(&path).load(), None);
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::at(dir.path().join("session.toml"));

        store.store(StepId::CompanyInfo).unwrap();
        store.clear();
        assert_eq!(store.load(), None);

        // Clearing an already-missing file is fine
        store.clear();
    }
}
