//! Terminal onboarding wizard for setting up a company workspace.
//!
//! Two steps: company information, then branding. The current step is owned
//! by [`flow::StepFlow`] and mirrored to a session file so an interrupted
//! run resumes where it left off.

pub mod config;
pub mod error;
pub mod event;
pub mod flow;
pub mod logo;
pub mod session;
pub mod strings;
pub mod ui;
pub mod vim;
pub mod wizard;
