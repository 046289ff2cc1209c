use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Fixed identifier of the container holding the shared delete form.
pub const DELETE_FORM_ID: &str = "delete-form";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("no form mounted under container #{0}")]
    Missing(String),
}

/// A completed form submission, carrying the action URL it was sent to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Submission {
    pub action: String,
}

/// The page-level form reused for every delete action. Its action is
/// rewritten immediately before each submit.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct DeleteForm {
    action: String,
    submit_count: u32,
}

impl DeleteForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn set_action(&mut self, url: impl Into<String>) {
        self.action = url.into();
    }

    pub fn submit(&mut self) -> Submission {
        self.submit_count += 1;
        Submission {
            action: self.action.clone(),
        }
    }

    #[allow(dead_code)]
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }
}

/// Forms mounted on the page, keyed by their container identifier.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct FormRegistry {
    containers: HashMap<String, DeleteForm>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, container_id: impl Into<String>, form: DeleteForm) {
        self.containers.insert(container_id.into(), form);
    }

    #[allow(dead_code)]
    pub fn find(&self, container_id: &str) -> Option<&DeleteForm> {
        self.containers.get(container_id)
    }

    pub fn find_mut(&mut self, container_id: &str) -> Result<&mut DeleteForm, FormError> {
        self.containers
            .get_mut(container_id)
            .ok_or_else(|| FormError::Missing(container_id.to_string()))
    }
}

/// Redirects the form under `container_id` to `href` and submits it.
///
/// A missing form is a no-op: the failure is logged and `None` returned,
/// never propagated as a panic out of the click handler.
pub fn submit_delete(
    registry: &mut FormRegistry,
    container_id: &str,
    href: &str,
) -> Option<Submission> {
    match registry.find_mut(container_id) {
        Ok(form) => {
            form.set_action(href);
            Some(form.submit())
        }
        Err(e) => {
            warn!("confirmed delete dropped: {e}");
            None
        }
    }
}
