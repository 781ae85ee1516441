//! Generation safety gate.
//!
//! A persisted artifact is what recipients rely on to claim funds, so
//! writing one requires explicit opt-in: the `--persist` flag or the
//! environment toggle. The mode is resolved once here and threaded into
//! the generate command as a value — nothing deeper in the stack reads
//! the environment.

/// Environment toggle enabling persist mode (`1`, `true` or `yes`).
pub const PERSIST_ENV_VAR: &str = "CLAIMTREE_PERSIST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Log the computed root and a few claims; write nothing. Default.
    Preview,
    /// Write the full claim artifact.
    Persist,
}

impl RunMode {
    pub fn resolve(persist_flag: bool) -> Self {
        Self::from_parts(persist_flag, std::env::var(PERSIST_ENV_VAR).ok().as_deref())
    }

    fn from_parts(persist_flag: bool, env_value: Option<&str>) -> Self {
        let env_opt_in = matches!(
            env_value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("1") | Some("true") | Some("yes")
        );

        if persist_flag || env_opt_in {
            RunMode::Persist
        } else {
            RunMode::Preview
        }
    }
}
