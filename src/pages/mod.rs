//! Page sections for the portfolio desktop.

mod contact;
mod home;
mod services;
mod works;

pub use contact::Contact;
pub use home::Home;
pub use services::Services;
pub use works::Works;
