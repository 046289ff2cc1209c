pub mod config;
pub mod delegate;
pub mod form;
pub mod types;

pub use config::{load_config, save_config};
pub use delegate::{ClickTarget, DELETE_LINK_CLASS, DeleteLinkDelegate};
pub use form::{DELETE_FORM_ID, DeleteForm, FormRegistry, Submission, submit_delete};
pub use types::{AppConfig, ConfirmFlow, Decision, DialogKind, DialogOptions, Record};
