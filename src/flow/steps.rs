/// Unique identifier for each wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    CompanyInfo,
    Branding,
}

/// The steps of the onboarding wizard, in traversal order.
pub const WIZARD_STEPS: [StepId; 2] = [StepId::CompanyInfo, StepId::Branding];

impl StepId {
    pub fn short_name(&self) -> &'static str {
        match self {
            StepId::CompanyInfo => "company-info",
            StepId::Branding => "branding",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StepId::CompanyInfo => "Company Information",
            StepId::Branding => "Make your company recognizable",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            StepId::CompanyInfo => "Fill out your company information below",
            StepId::Branding => "This helps identify your workspace",
        }
    }

    /// Parse an externally supplied step reference: the step's short name or
    /// its 1-based position ("company-info", "branding", "1", "2").
    pub fn from_name(name: &str) -> Option<StepId> {
        let name = name.trim();
        if let Ok(n) = name.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| WIZARD_STEPS.get(i)).copied();
        }
        WIZARD_STEPS
            .iter()
            .find(|step| step.short_name().eq_ignore_ascii_case(name))
            .copied()
    }
}

/// Completion state of a step, shown in the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepResult {
    #[default]
    Pending,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_short_names() {
        assert_eq!(StepId::from_name("company-info"), Some(StepId::CompanyInfo));
        assert_eq!(StepId::from_name("Branding"), Some(StepId::Branding));
    }

    #[test]
    fn from_name_accepts_positions() {
        assert_eq!(StepId::from_name("1"), Some(StepId::CompanyInfo));
        assert_eq!(StepId::from_name("2"), Some(StepId::Branding));
        assert_eq!(StepId::from_name("0"), None);
        assert_eq!(StepId::from_name("3"), None);
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(StepId::from_name("billing"), None);
        assert_eq!(StepId::from_name(""), None);
    }
}
