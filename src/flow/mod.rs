//! Step sequencing for the onboarding wizard.
//!
//! `StepFlow` tracks the current position in a fixed, ordered list of steps.
//! Position is an index into the list; `advance` is index arithmetic that
//! saturates at the terminal step, and repositioning (resuming a session,
//! jumping via a command) is a forward scan for the requested step with a
//! fallback to the first step when the target is unknown.

mod steps;

pub use steps::{StepId, StepResult, WIZARD_STEPS};

use tracing::warn;

/// Finite, linear step sequencer.
///
/// The step list is immutable for the lifetime of the flow. None of the
/// operations fail: an unknown target falls back to the first step and
/// advancing past the end saturates on the terminal step.
#[derive(Debug, Clone)]
pub struct StepFlow {
    steps: Vec<StepId>,
    current: usize,
    finished: bool,
    last_observed: Option<StepId>,
}

impl StepFlow {
    /// Create a flow over `steps` (must be non-empty), optionally positioned
    /// at `initial` (e.g. a resume target from a saved session).
    pub fn new(steps: &[StepId], initial: Option<StepId>) -> Self {
        debug_assert!(!steps.is_empty(), "step sequence must have at least one step");
        let mut flow = Self {
            steps: steps.to_vec(),
            current: 0,
            finished: false,
            last_observed: initial,
        };
        flow.current = flow.locate(initial);
        flow
    }

    /// The step the flow is currently positioned at.
    pub fn current(&self) -> StepId {
        self.steps[self.current]
    }

    /// True once `advance` has been called on the terminal step.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current 0-based index and total number of steps.
    pub fn position(&self) -> (usize, usize) {
        (self.current, self.steps.len())
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.steps.len() - 1
    }

    /// Reposition at `target`, or at the first step when `target` is `None`
    /// or not part of the sequence. Never fails; idempotent.
    pub fn resolve(&mut self, target: Option<StepId>) -> StepId {
        self.current = self.locate(target);
        self.current()
    }

    /// Move to the next step. At the terminal step this saturates: the
    /// terminal step is returned again and the flow is marked finished.
    pub fn advance(&mut self) -> StepId {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
        // External mirrors (session file, jump commands) track advances too,
        // so a later jump back to the step we just left is a real change,
        // not a re-delivery of the last observation.
        self.last_observed = Some(self.current());
        self.current()
    }

    /// Reposition from an external source (saved session, `:step` command).
    ///
    /// A repeat of the last externally observed target is a no-op, so a
    /// re-delivered signal does not churn state. Otherwise the target is
    /// resolved and `finished` is cleared, except for a single-step sequence
    /// whose only step is the target.
    pub fn observe_external_target(&mut self, target: StepId) -> StepId {
        if self.last_observed == Some(target) {
            return self.current();
        }
        self.last_observed = Some(target);
        let step = self.resolve(Some(target));
        if !(self.steps.len() == 1 && self.is_terminal()) {
            self.finished = false;
        }
        step
    }

    /// Forward scan for `target`; unknown targets fall back to index 0.
    fn locate(&self, target: Option<StepId>) -> usize {
        let Some(target) = target else {
            return 0;
        };
        match self.steps.iter().position(|step| *step == target) {
            Some(idx) => idx,
            None => {
                warn!("unknown step target {:?}, falling back to first step", target);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: [StepId; 2] = WIZARD_STEPS;
    const ONE: [StepId; 1] = [StepId::CompanyInfo];

    #[test]
    fn resolve_without_target_returns_first_step() {
        let mut flow = StepFlow::new(&TWO, None);
        assert_eq!(flow.resolve(None), StepId::CompanyInfo);
        assert_eq!(flow.current(), StepId::CompanyInfo);
    }

    #[test]
    fn resolve_finds_named_step() {
        let mut flow = StepFlow::new(&TWO, None);
        assert_eq!(flow.resolve(Some(StepId::Branding)), StepId::Branding);
        assert_eq!(flow.position(), (1, 2));
    }

    #[test]
    fn unknown_target_falls_back_to_first_step() {
        let mut flow = StepFlow::new(&ONE, None);
        assert_eq!(flow.resolve(Some(StepId::Branding)), StepId::CompanyInfo);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut flow = StepFlow::new(&TWO, None);
        flow.resolve(Some(StepId::Branding));
        flow.resolve(Some(StepId::Branding));
        assert_eq!(flow.current(), StepId::Branding);
        assert!(!flow.is_finished());
    }

    #[test]
    fn advance_walks_then_saturates() {
        let mut flow = StepFlow::new(&TWO, None);

        assert_eq!(flow.advance(), StepId::Branding);
        assert!(!flow.is_finished());

        assert_eq!(flow.advance(), StepId::Branding);
        assert!(flow.is_finished());

        // Beyond terminal: still the terminal step, still finished.
        assert_eq!(flow.advance(), StepId::Branding);
        assert!(flow.is_finished());
    }

    #[test]
    fn single_step_sequence_finishes_immediately() {
        let mut flow = StepFlow::new(&ONE, None);
        assert_eq!(flow.current(), StepId::CompanyInfo);
        assert_eq!(flow.advance(), StepId::CompanyInfo);
        assert!(flow.is_finished());
    }

    #[test]
    fn new_with_initial_target_resumes_there() {
        let flow = StepFlow::new(&TWO, Some(StepId::Branding));
        assert_eq!(flow.current(), StepId::Branding);
        assert!(!flow.is_finished());
    }

    #[test]
    fn observe_external_target_repositions_and_clears_finished() {
        let mut flow = StepFlow::new(&TWO, None);
        flow.advance();
        flow.advance();
        assert!(flow.is_finished());

        assert_eq!(
            flow.observe_external_target(StepId::CompanyInfo),
            StepId::CompanyInfo
        );
        assert!(!flow.is_finished());
    }

    #[test]
    fn observe_external_target_dedups_repeats() {
        let mut flow = StepFlow::new(&TWO, None);
        flow.observe_external_target(StepId::Branding);
        let before = flow.clone();

        flow.observe_external_target(StepId::Branding);
        assert_eq!(flow.position(), before.position());
        assert_eq!(flow.is_finished(), before.is_finished());
    }

    #[test]
    fn external_jump_back_works_after_each_advance() {
        let mut flow = StepFlow::new(&TWO, None);

        flow.advance();
        assert_eq!(
            flow.observe_external_target(StepId::CompanyInfo),
            StepId::CompanyInfo
        );

        // Advancing again makes the same jump target a real change again
        flow.advance();
        assert_eq!(
            flow.observe_external_target(StepId::CompanyInfo),
            StepId::CompanyInfo
        );
        assert_eq!(flow.position(), (0, 2));
    }

    #[test]
    fn observe_external_terminal_on_single_step_keeps_finished() {
        let mut flow = StepFlow::new(&ONE, None);
        flow.advance();
        assert!(flow.is_finished());

        flow.observe_external_target(StepId::CompanyInfo);
        assert!(flow.is_finished());
    }
}
