// Terminal user interface
mod app;
pub mod aws_form;
pub mod connect;
pub mod panels;
pub mod prefs;

pub use app::App;
