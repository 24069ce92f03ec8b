use std::collections::HashMap;

use serde::Serialize;

// Field names double as keys into the wizard's field map and as stable ids
// for the rendered inputs.
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const PROJECT_TYPE: &str = "project_type";
pub const BUDGET: &str = "budget";
pub const DESCRIPTION: &str = "description";
pub const PLOT: &str = "plot";
pub const CITY: &str = "city";

/// One step of the project-submission flow. The step list is fixed; only
/// the entered field values change at runtime.
pub struct StepDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: &'static str,
    pub fields: &'static [&'static str],
}

pub const STEPS: &[StepDefinition] = &[
    StepDefinition {
        id: "basics",
        title: "Your Details",
        subtitle: "Let's get to know you",
        accent: "#3b82f6",
        fields: &[NAME, EMAIL, PHONE],
    },
    StepDefinition {
        id: "project",
        title: "Project Scope",
        subtitle: "What are you building?",
        accent: "#f59e0b",
        fields: &[PROJECT_TYPE, BUDGET],
    },
    StepDefinition {
        id: "details",
        title: "Vision & Goals",
        subtitle: "Paint the picture for us",
        accent: "#10b981",
        fields: &[DESCRIPTION],
    },
    StepDefinition {
        id: "location",
        title: "Site Location",
        subtitle: "Where's the construction site?",
        accent: "#8b5cf6",
        fields: &[PLOT, CITY],
    },
];

/// Linear step wizard: states `Step[0..N-1]` plus a terminal `Complete`
/// reachable only from the last step and escapable only via `reset()`.
/// Fields are stored without validation; none are required.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    step: usize,
    fields: HashMap<&'static str, String>,
    complete: bool,
}

/// Snapshot of the entered fields, produced when the last step submits.
/// There is no intake endpoint yet, so the app root only serializes and
/// logs it; a real intake client would take this payload instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub description: String,
    pub plot: String,
    pub city: String,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn current(&self) -> &'static StepDefinition {
        &STEPS[self.step]
    }

    /// Fraction of the flow reached, for the progress bar.
    pub fn progress(&self) -> f64 {
        (self.step + 1) as f64 / STEPS.len() as f64
    }

    pub fn on_last_step(&self) -> bool {
        self.step == STEPS.len() - 1
    }

    /// Next step, or mark the flow complete when already on the last one.
    pub fn advance(&mut self) {
        if self.step < STEPS.len() - 1 {
            self.step += 1;
        } else {
            self.complete = true;
        }
    }

    /// Previous step; no-op on the first.
    pub fn retreat(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    pub fn set_field(&mut self, name: &'static str, value: String) {
        self.fields.insert(name, value);
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn reset(&mut self) {
        self.step = 0;
        self.fields.clear();
        self.complete = false;
    }

    pub fn submission(&self) -> ProjectSubmission {
        ProjectSubmission {
            name: self.field(NAME).to_string(),
            email: self.field(EMAIL).to_string(),
            phone: self.field(PHONE).to_string(),
            project_type: self.field(PROJECT_TYPE).to_string(),
            budget: self.field(BUDGET).to_string(),
            description: self.field(DESCRIPTION).to_string(),
            plot: self.field(PLOT).to_string(),
            city: self.field(CITY).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_every_step_then_completes() {
        let mut w = WizardState::new();
        for i in 0..STEPS.len() - 1 {
            assert_eq!(w.step_index(), i);
            assert!(!w.is_complete());
            w.advance();
            assert_eq!(w.step_index(), i + 1);
        }
        assert!(w.on_last_step());
        w.advance();
        assert!(w.is_complete());
        // Completing does not move the index past the last step.
        assert_eq!(w.step_index(), STEPS.len() - 1);
    }

    #[test]
    fn retreat_is_noop_on_first_step() {
        let mut w = WizardState::new();
        w.retreat();
        assert_eq!(w.step_index(), 0);

        w.advance();
        w.advance();
        w.retreat();
        assert_eq!(w.step_index(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut w = WizardState::new();
        w.set_field(NAME, "Rajesh Kumar".into());
        w.advance();
        w.advance();
        w.advance();
        w.advance();
        assert!(w.is_complete());

        w.reset();
        assert_eq!(w.step_index(), 0);
        assert!(!w.is_complete());
        assert_eq!(w.field(NAME), "");
    }

    #[test]
    fn fields_store_and_overwrite_without_validation() {
        let mut w = WizardState::new();
        assert_eq!(w.field(EMAIL), "");
        w.set_field(EMAIL, "not an email".into());
        assert_eq!(w.field(EMAIL), "not an email");
        w.set_field(EMAIL, "rajesh@company.com".into());
        assert_eq!(w.field(EMAIL), "rajesh@company.com");
    }

    #[test]
    fn submission_reflects_entered_fields() {
        let mut w = WizardState::new();
        w.set_field(NAME, "Rajesh Kumar".into());
        w.set_field(CITY, "Gurugram, Haryana".into());
        let s = w.submission();
        assert_eq!(s.name, "Rajesh Kumar");
        assert_eq!(s.city, "Gurugram, Haryana");
        assert_eq!(s.budget, "");
    }

    #[test]
    fn progress_spans_the_step_list() {
        let mut w = WizardState::new();
        assert_eq!(w.progress(), 0.25);
        w.advance();
        w.advance();
        w.advance();
        assert_eq!(w.progress(), 1.0);
    }

    #[test]
    fn every_step_field_has_a_distinct_name() {
        let mut seen = std::collections::HashSet::new();
        for step in STEPS {
            for field in step.fields {
                assert!(seen.insert(*field), "duplicate field {field}");
            }
        }
    }
}
