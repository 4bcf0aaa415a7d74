// Presentation widgets shared by the preference pages
mod active_list;
mod button_bar;
mod confirm_dialog;
mod empty_placeholder;
mod toolbar;

pub use active_list::{ActiveList, ListEntry};
pub use button_bar::{ButtonBar, ButtonSpec};
pub use confirm_dialog::ConfirmDialog;
pub use empty_placeholder::EmptyPlaceholder;
pub use toolbar::{breadcrumb, Toolbar, ToolbarAction};
