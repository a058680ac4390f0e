mod about;
mod contact;
mod home;
mod not_found;
mod services;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use services::Services;
