use crate::components::*;
use crate::confirm::{
    ClickTarget, DELETE_FORM_ID, Decision, Record, load_config, save_config, submit_delete,
};
use crate::state::{AppState, Message};
use dioxus::prelude::*;
use tracing::debug;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut state = use_signal(AppState::new);

    use_effect(move || {
        spawn(async move {
            initialize_app(state).await;
        });
    });

    // One delegated handler for every delete link on the page, present or
    // future: rows hand over a ClickTarget and the delegate decides at
    // dispatch time whether it is a delete link.
    let on_delete_click = move |target: ClickTarget| {
        let mut write_state = state.write();
        let Some(href) = write_state.delegate.dispatch(&target) else {
            return;
        };
        write_state.clear_message();
        if !write_state.flow.request(href) {
            debug!("delete link clicked while a confirmation is open; ignored");
        }
    };

    let on_confirm = move |_| {
        spawn(async move {
            confirm_delete(state).await;
        });
    };

    let on_cancel = move |_| {
        state.write().flow.resolve(Decision::Cancelled);
    };

    let (dialog_options, dialog_open, busy) = {
        let read_state = state.read();
        let options = read_state.config.dialog.clone();
        let open = read_state.flow.dialog_open(options.close_on_confirm);
        let busy = read_state.flow.is_submitting();
        (options, open, busy)
    };

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header {}
            div { class: "content",
                RecordList {
                    state: state,
                    on_delete_click: on_delete_click
                }
            }
            if dialog_open {
                ConfirmDialog {
                    options: dialog_options,
                    busy: busy,
                    on_confirm: on_confirm,
                    on_cancel: on_cancel
                }
            }
            StatusBar { state: state }
        }
    }
}

async fn initialize_app(mut state: Signal<AppState>) {
    match load_config() {
        Ok(mut config) => {
            if config.records.is_empty() {
                config.records = Record::samples();
            }
            state.write().config = config;
        }
        Err(e) => {
            state.write().config.records = Record::samples();
            state
                .write()
                .set_message(Message::error(format!("Failed to load config: {}", e)));
        }
    }
}

/// Confirm path of the dialog: retarget the shared form to the captured
/// URL, submit it, and route the submission. The flow stays in
/// `Submitting` (dialog open, buttons disabled) until this finishes.
async fn confirm_delete(mut state: Signal<AppState>) {
    let href = state.write().flow.resolve(Decision::Confirmed);
    let Some(href) = href else {
        return;
    };

    let submission = {
        let mut write_state = state.write();
        submit_delete(&mut write_state.forms, DELETE_FORM_ID, &href)
    };

    match submission {
        Some(submission) => {
            let applied = state.write().apply_submission(&submission);
            match applied {
                Ok(record) => {
                    let config = {
                        let mut write_state = state.write();
                        write_state.set_message(Message::success(format!(
                            "Deleted \"{}\"",
                            record.name
                        )));
                        write_state.config.clone()
                    };

                    if let Err(e) = save_config(&config) {
                        state.write().set_message(Message::error(format!(
                            "Record deleted but failed to save config: {}",
                            e
                        )));
                    }
                }
                Err(e) => {
                    state.write().set_message(Message::error(e));
                }
            }
        }
        None => {
            state.write().set_message(Message::error(
                "Delete form is missing; nothing was deleted",
            ));
        }
    }

    state.write().flow.finish();
}
