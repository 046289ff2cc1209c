use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a confirmation dialog. Only `Warning` is used by the delete
/// flow, but the config file may override it.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    #[default]
    Warning,
    Error,
    Info,
    Success,
}

impl DialogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Warning => "warning",
            DialogKind::Error => "error",
            DialogKind::Info => "info",
            DialogKind::Success => "success",
        }
    }
}

/// Options for the modal confirmation dialog.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct DialogOptions {
    pub title: String,
    pub text: String,
    pub kind: DialogKind,
    pub show_cancel_button: bool,
    pub confirm_button_color: String,
    pub confirm_button_text: String,
    /// When false the dialog stays open (buttons disabled) until the
    /// confirmed action has completed.
    pub close_on_confirm: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "The record will be permanently deleted!".to_string(),
            kind: DialogKind::Warning,
            show_cancel_button: true,
            confirm_button_color: "#DD6B55".to_string(),
            confirm_button_text: "Yes, delete it!".to_string(),
            close_on_confirm: false,
        }
    }
}

/// The user's answer to an open confirmation dialog.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Per-interaction state of the delete-confirmation flow.
///
/// A click on a delete link moves `Idle` to `AwaitingDecision` with the
/// link's destination captured; the dialog resolves it either forward to
/// `Submitting` or back to `Idle`. The captured destination can only be
/// replaced from `Idle`, so a click while a dialog is open cannot corrupt
/// the pending action.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub enum ConfirmFlow {
    #[default]
    Idle,
    AwaitingDecision {
        href: String,
    },
    Submitting {
        href: String,
    },
}

impl ConfirmFlow {
    /// Starts a new interaction. Returns false (and leaves the flow
    /// untouched) unless the flow is idle.
    pub fn request(&mut self, href: impl Into<String>) -> bool {
        if *self != ConfirmFlow::Idle {
            return false;
        }
        *self = ConfirmFlow::AwaitingDecision { href: href.into() };
        true
    }

    /// Resolves an open dialog. On confirm the flow moves to `Submitting`
    /// and the captured destination is returned; on cancel it returns to
    /// `Idle`. Resolving a flow with no open dialog is a no-op.
    pub fn resolve(&mut self, decision: Decision) -> Option<String> {
        let ConfirmFlow::AwaitingDecision { href } = self else {
            return None;
        };
        let href = std::mem::take(href);
        match decision {
            Decision::Confirmed => {
                *self = ConfirmFlow::Submitting { href: href.clone() };
                Some(href)
            }
            Decision::Cancelled => {
                *self = ConfirmFlow::Idle;
                None
            }
        }
    }

    /// Ends the interaction once the submission has been dealt with.
    pub fn finish(&mut self) {
        *self = ConfirmFlow::Idle;
    }

    #[allow(dead_code)]
    pub fn pending_href(&self) -> Option<&str> {
        match self {
            ConfirmFlow::Idle => None,
            ConfirmFlow::AwaitingDecision { href } | ConfirmFlow::Submitting { href } => {
                Some(href)
            }
        }
    }

    /// Whether the dialog should be on screen.
    pub fn dialog_open(&self, close_on_confirm: bool) -> bool {
        match self {
            ConfirmFlow::Idle => false,
            ConfirmFlow::AwaitingDecision { .. } => true,
            ConfirmFlow::Submitting { .. } => !close_on_confirm,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ConfirmFlow::Submitting { .. })
    }
}

/// A record shown on the admin page.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Record {
    pub id: Uuid,
    pub name: String,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Destination URL carried by the record's delete link.
    pub fn delete_href(&self) -> String {
        format!("/records/{}/delete", self.id)
    }

    /// Starter records for a first run with no config file.
    pub fn samples() -> Vec<Record> {
        ["Quarterly report", "Staging credentials", "Old backup", "Draft invoice"]
            .into_iter()
            .map(Record::new)
            .collect()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub dialog: DialogOptions,
    pub records: Vec<Record>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove_record(&mut self, id: Uuid) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }
}
