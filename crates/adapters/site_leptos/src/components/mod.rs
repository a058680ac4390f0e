mod contact_form;
mod counter;
mod footer;
mod hours;
mod nav;

pub use contact_form::ContactFormView;
pub use counter::StatCounter;
pub use footer::Footer;
pub use hours::OpeningHours;
pub use nav::Nav;
