//! Static public pages of the venue site.

mod contact;
mod doubts;
mod environments;
mod home;
mod not_found;
mod parties;
mod reservations;
mod rules;

pub use contact::Contact;
pub use doubts::Doubts;
pub use environments::Environments;
pub use home::Home;
pub use not_found::NotFound;
pub use parties::Parties;
pub use reservations::Reservations;
pub use rules::Rules;
