//! Custom widgets for the TUI

mod address_bar;
mod header;
mod login;
pub mod modal_overlay;
mod nav;
mod panel;
mod status_bar;
mod tabs;

pub use address_bar::AddressBar;
pub use header::MainHeader;
pub use login::LoginView;
pub use nav::NavBar;
pub use panel::PanelCard;
pub use status_bar::StatusBar;
pub use tabs::TabBar;
