mod confirm_dialog;
mod header;
mod record_list;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use record_list::RecordList;
pub use status_bar::StatusBar;
