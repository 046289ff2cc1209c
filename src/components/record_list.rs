use crate::confirm::{ClickTarget, DELETE_LINK_CLASS};
use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

/// The records page. Every row carries a delete link marked with the
/// `delete-link` class; clicks are reported as a `ClickTarget` so one
/// delegated handler in the app can match them, instead of each row
/// owning its own delete logic.
#[component]
pub fn RecordList(state: Signal<AppState>, on_delete_click: EventHandler<ClickTarget>) -> Element {
    let records = state
        .read()
        .records()
        .iter()
        .map(|r| (r.id.to_string(), r.name.clone(), r.delete_href()))
        .collect::<Vec<_>>();

    let is_empty = records.is_empty();

    rsx! {
        div { class: "record-list",
            if is_empty {
                div { class: "empty-list", "No records left." }
            }
            for (id, name, href) in records {
                div { class: "record-row", key: "{id}",
                    div { class: "record-name", "{name}" }
                    a {
                        class: DELETE_LINK_CLASS,
                        href: "{href}",
                        title: "Delete record",
                        onclick: {
                            let href = href.clone();
                            move |evt: Event<MouseData>| {
                                // No navigation and no other handler runs; the
                                // delegated handler decides what the click means.
                                evt.prevent_default();
                                evt.stop_propagation();
                                on_delete_click.call(ClickTarget::from_element(
                                    DELETE_LINK_CLASS,
                                    Some(href.clone()),
                                ));
                            }
                        },
                        Icon { width: 18, height: 18, icon: MdDelete }
                    }
                }
            }
        }
    }
}
