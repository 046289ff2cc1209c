use crate::confirm::{
    AppConfig, ConfirmFlow, DELETE_FORM_ID, DeleteForm, DeleteLinkDelegate, FormRegistry, Record,
    Submission,
};
use uuid::Uuid;

#[derive(Clone, PartialEq, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub delegate: DeleteLinkDelegate,
    pub flow: ConfirmFlow,
    pub forms: FormRegistry,
    pub message: Option<Message>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut forms = FormRegistry::new();
        forms.mount(DELETE_FORM_ID, DeleteForm::new());

        Self {
            config: AppConfig::new(),
            delegate: DeleteLinkDelegate::default(),
            flow: ConfirmFlow::Idle,
            forms,
            message: None,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.config.records
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Routes a submitted delete form to the record it targets.
    ///
    /// Stands in for the server the form would post to: the action URL is
    /// expected to be `/records/{id}/delete`. Anything else is reported,
    /// not panicked on, since URL validation is not the client's job.
    pub fn apply_submission(&mut self, submission: &Submission) -> Result<Record, String> {
        let id = parse_delete_action(&submission.action)
            .ok_or_else(|| format!("Unsupported action URL: {:?}", submission.action))?;

        self.config
            .remove_record(id)
            .ok_or_else(|| format!("No record with id {id}"))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_delete_action(action: &str) -> Option<Uuid> {
    action
        .strip_prefix("/records/")?
        .strip_suffix("/delete")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::{Decision, submit_delete};

    fn state_with_records(names: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.config.records = names.iter().map(|name| Record::new(*name)).collect();
        state
    }

    /// Click -> confirm -> form retargeted and submitted -> record removed.
    #[test]
    fn test_confirm_scenario() {
        let mut state = state_with_records(&["Quarterly report", "Old backup"]);
        let href = state.records()[0].delete_href();

        assert!(state.flow.request(href.clone()));
        let confirmed = state.flow.resolve(Decision::Confirmed).unwrap();
        let submission = submit_delete(&mut state.forms, DELETE_FORM_ID, &confirmed).unwrap();

        assert_eq!(submission.action, href);
        assert_eq!(state.forms.find(DELETE_FORM_ID).unwrap().action(), href);

        let removed = state.apply_submission(&submission).unwrap();
        assert_eq!(removed.name, "Quarterly report");
        assert_eq!(state.records().len(), 1);

        state.flow.finish();
        assert_eq!(state.flow, ConfirmFlow::Idle);
    }

    /// Click -> cancel -> form untouched, nothing submitted or removed.
    #[test]
    fn test_cancel_scenario() {
        let mut state = state_with_records(&["Draft invoice"]);
        let href = state.records()[0].delete_href();

        assert!(state.flow.request(href));
        assert_eq!(state.flow.resolve(Decision::Cancelled), None);

        let form = state.forms.find(DELETE_FORM_ID).unwrap();
        assert_eq!(form.action(), "");
        assert_eq!(form.submit_count(), 0);
        assert_eq!(state.records().len(), 1);
    }

    /// Two interactions in sequence target the second link's URL.
    #[test]
    fn test_sequential_deletes_target_second_url() {
        let mut state = state_with_records(&["First", "Second"]);
        let first = state.records()[0].delete_href();
        let second = state.records()[1].delete_href();

        state.flow.request(first);
        let href = state.flow.resolve(Decision::Confirmed).unwrap();
        submit_delete(&mut state.forms, DELETE_FORM_ID, &href);
        state.flow.finish();

        state.flow.request(second.clone());
        let href = state.flow.resolve(Decision::Confirmed).unwrap();
        submit_delete(&mut state.forms, DELETE_FORM_ID, &href);

        assert_eq!(state.forms.find(DELETE_FORM_ID).unwrap().action(), second);
    }

    #[test]
    fn test_unknown_action_is_reported() {
        let mut state = state_with_records(&["Only"]);
        let submission = Submission {
            action: "/somewhere/else".to_string(),
        };
        let err = state.apply_submission(&submission).unwrap_err();
        assert!(err.contains("Unsupported action URL"));
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn test_stale_record_id_is_reported() {
        let mut state = state_with_records(&[]);
        let submission = Submission {
            action: format!("/records/{}/delete", Uuid::new_v4()),
        };
        assert!(state.apply_submission(&submission).is_err());
    }

    #[test]
    fn test_parse_delete_action() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_delete_action(&format!("/records/{id}/delete")),
            Some(id)
        );
        assert_eq!(parse_delete_action("/records//delete"), None);
        assert_eq!(parse_delete_action("/records/not-a-uuid/delete"), None);
        assert_eq!(parse_delete_action(""), None);
    }
}
