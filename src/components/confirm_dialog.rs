use crate::confirm::{DialogKind, DialogOptions};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdCheckCircle, MdInfo};
use dioxus_free_icons::icons::md_alert_icons::{MdError, MdWarning};

/// Modal confirmation dialog. While `busy` is set (confirm pressed, action
/// still running) both buttons are disabled and the dialog stays on screen.
#[component]
pub fn ConfirmDialog(
    options: DialogOptions,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let kind_class = options.kind.as_str();
    let icon = match options.kind {
        DialogKind::Warning => rsx! {
            Icon { width: 48, height: 48, icon: MdWarning }
        },
        DialogKind::Error => rsx! {
            Icon { width: 48, height: 48, icon: MdError }
        },
        DialogKind::Info => rsx! {
            Icon { width: 48, height: 48, icon: MdInfo }
        },
        DialogKind::Success => rsx! {
            Icon { width: 48, height: 48, icon: MdCheckCircle }
        },
    };

    rsx! {
        div { class: "dialog-overlay",
            div { class: "confirm-dialog {kind_class}",
                div { class: "dialog-icon {kind_class}", {icon} }
                h3 { "{options.title}" }
                p { "{options.text}" }
                div { class: "dialog-buttons",
                    if options.show_cancel_button {
                        button {
                            class: "secondary",
                            disabled: busy,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                    button {
                        class: "primary danger",
                        style: "background-color: {options.confirm_button_color};",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            "Deleting..."
                        } else {
                            "{options.confirm_button_text}"
                        }
                    }
                }
            }
        }
    }
}
