// Page units, one per route

mod home;
mod projects;

pub use home::HomePage;
pub use projects::ProjectsPage;
