// Home page sections

mod about;
mod backdrop;
mod contact;
mod hero;
mod nav;
mod ticker;

pub use about::About;
pub use backdrop::Backdrop;
pub use contact::Contact;
pub use hero::Hero;
pub use nav::Nav;
pub use ticker::SkillsTicker;
