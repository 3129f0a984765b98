//! Campaign creation dialog: draft state plus its open/closed lifecycle.
//!
//! ```text
//! Closed --open--> Open --cancel--> Closed
//!                  Open --submit(valid)--> Closed
//!                  Open --submit(invalid)--> Open
//! ```

use adspace_dashboard_models::{CampaignDraft, CampaignSubmission};
use strum_macros::Display;
use thiserror::Error;

/// Draft fields that must be filled before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RequiredField {
    /// Campaign name.
    Name,
    /// Campaign budget.
    Budget,
}

/// Validation failure for a campaign draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// A required field was empty or whitespace.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// The first empty required field.
        field: RequiredField,
    },
}

/// Checks `draft` and converts it into a submission.
///
/// # Errors
///
/// Returns [`CampaignError::MissingRequiredField`] for the first of `name`
/// or `budget` that is blank.
pub fn validate(draft: &CampaignDraft) -> Result<CampaignSubmission, CampaignError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(CampaignError::MissingRequiredField {
            field: RequiredField::Name,
        });
    }

    let budget = draft.budget.trim();
    if budget.is_empty() {
        return Err(CampaignError::MissingRequiredField {
            field: RequiredField::Budget,
        });
    }

    Ok(CampaignSubmission {
        name: name.to_string(),
        description: draft.description.clone(),
        budget: parse_budget(budget),
        duration: draft.duration,
        target_audience: draft.target_audience,
    })
}

/// Parses budget text such as `"5000"`, `"$5,000"`, or `"2500.50"`.
fn parse_budget(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Whether the dialog is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    /// Hidden.
    #[default]
    Closed,
    /// Showing the form.
    Open,
}

/// The creation dialog and the draft it edits.
#[derive(Debug, Clone, Default)]
pub struct CampaignDialog {
    state: DialogState,
    draft: CampaignDraft,
}

impl CampaignDialog {
    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    /// Whether the form is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Opens the dialog with an empty draft. Opening an already open dialog
    /// keeps the draft in progress.
    pub fn open(&mut self) {
        if self.state == DialogState::Closed {
            self.draft = CampaignDraft::default();
            self.state = DialogState::Open;
        }
    }

    /// Closes the dialog and discards the draft.
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
        self.draft = CampaignDraft::default();
    }

    /// The draft being edited.
    #[must_use]
    pub const fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    /// Mutable access for form widgets.
    pub const fn draft_mut(&mut self) -> &mut CampaignDraft {
        &mut self.draft
    }

    /// Validates the draft. On success the dialog closes and the draft
    /// resets; on failure both are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignError`] if validation fails.
    pub fn submit(&mut self) -> Result<CampaignSubmission, CampaignError> {
        let submission = validate(&self.draft)?;
        self.cancel();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspace_dashboard_models::{AudienceBracket, CampaignDuration};

    fn launch_draft() -> CampaignDraft {
        CampaignDraft {
            name: "Launch".to_string(),
            description: String::new(),
            budget: "5000".to_string(),
            duration: Some(CampaignDuration::OneMonth),
            target_audience: Some(AudienceBracket::Age18To25),
        }
    }

    #[test]
    fn valid_submit_closes_and_resets() {
        let mut dialog = CampaignDialog::default();
        dialog.open();
        *dialog.draft_mut() = launch_draft();

        let submission = dialog.submit().unwrap();

        assert_eq!(submission.name, "Launch");
        assert_eq!(submission.budget, Some(5000.0));
        assert_eq!(submission.duration, Some(CampaignDuration::OneMonth));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(dialog.draft().is_empty());
    }

    #[test]
    fn missing_name_keeps_dialog_open() {
        let mut dialog = CampaignDialog::default();
        dialog.open();
        let draft = CampaignDraft {
            name: String::new(),
            ..launch_draft()
        };
        *dialog.draft_mut() = draft.clone();

        let err = dialog.submit().unwrap_err();

        assert_eq!(
            err,
            CampaignError::MissingRequiredField {
                field: RequiredField::Name
            }
        );
        assert!(dialog.is_open());
        assert_eq!(*dialog.draft(), draft);
    }

    #[test]
    fn whitespace_budget_is_missing() {
        let draft = CampaignDraft {
            budget: "   ".to_string(),
            ..launch_draft()
        };
        assert_eq!(
            validate(&draft),
            Err(CampaignError::MissingRequiredField {
                field: RequiredField::Budget
            })
        );
    }

    #[test]
    fn budget_text_variants() {
        assert_eq!(parse_budget("$5,000"), Some(5000.0));
        assert_eq!(parse_budget("2500.50"), Some(2500.5));
        assert_eq!(parse_budget("lots"), None);
        assert_eq!(parse_budget("-10"), None);
    }

    #[test]
    fn reopening_keeps_draft_and_cancel_discards() {
        let mut dialog = CampaignDialog::default();
        dialog.open();
        dialog.draft_mut().name = "Half done".to_string();
        dialog.open();
        assert_eq!(dialog.draft().name, "Half done");

        dialog.cancel();
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(dialog.draft().is_empty());
    }
}
