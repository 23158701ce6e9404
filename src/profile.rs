//! Named default filesystem shapes and their home directories.
//!
//! spec.md leaves the home directory inconsistent across profiles; this
//! module makes it a single constant per profile, consumed uniformly by
//! `cd`, `~` expansion, and history placement (see SPEC_FULL.md §9).

use crate::fs::FsState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Default,
    Portfolio,
}

impl Profile {
    pub fn parse(name: &str) -> Self {
        match name {
            "portfolio" => Profile::Portfolio,
            _ => Profile::Default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Default => "default",
            Profile::Portfolio => "portfolio",
        }
    }

    /// The home directory as an ordered path-segment sequence.
    pub fn home(&self) -> Vec<String> {
        match self {
            Profile::Default => vec!["home".to_string(), "user".to_string()],
            Profile::Portfolio => vec!["about".to_string()],
        }
    }

    /// Seed the fresh tree with whatever scaffold directories/files this
    /// profile ships by default (beyond the bare home directory `FsState::new`
    /// already creates).
    pub fn seed(&self, state: &mut FsState) {
        match self {
            Profile::Default => {
                let docs = state.resolve_path("~/documents");
                let projects = state.resolve_path("~/documents/projects");
                let now = chrono::Utc::now();
                let _ = state.mkdir_p(&docs, now);
                let _ = state.mkdir_p(&projects, now);
            }
            Profile::Portfolio => {}
        }
    }
}
