// Personal portfolio — Leptos 0.8, client-side rendered

mod content;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use content::{portfolio, projects};
use pages::{HomePage, ProjectsPage};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Site content is built once here and handed to the pages as props;
    // nothing reads it from a global.
    let content = portfolio();
    let work = projects();

    log::info!("portfolio mounted: {} projects", work.len());

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route
                    path=path!("/")
                    view=move || view! { <HomePage content=content.clone()/> }
                />
                <Route
                    path=path!("/projects")
                    view=move || view! { <ProjectsPage projects=work.clone()/> }
                />
            </Routes>
        </Router>
    }
}
