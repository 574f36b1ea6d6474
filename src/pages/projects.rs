use leptos::prelude::*;

use crate::content::Project;

/// Projects route: back-to-home nav plus one card per project record, in
/// the order given. The page tracks which card the pointer is over so that
/// card's icon overlay can scale and tilt.
#[component]
pub fn ProjectsPage(projects: Vec<Project>) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);

    let cards = projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectCard project index hovered set_hovered/> })
        .collect::<Vec<_>>();

    view! {
        <div class="page page-projects">
            <nav class="projects-nav">
                <a href="/" class="back-link">
                    <span class="back-arrow">"←"</span>
                    "Back to Home"
                </a>
                <div class="projects-heading">
                    <h1>"Selected Works"</h1>
                    <p>"2024 — 2025"</p>
                </div>
            </nav>
            <div class="projects-grid">{cards}</div>
        </div>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    index: usize,
    hovered: ReadSignal<Option<usize>>,
    set_hovered: WriteSignal<Option<usize>>,
) -> impl IntoView {
    // Missing image file: hide the img and show a solid block instead.
    // CSS does the hiding, the signal only flips the class.
    let failed = RwSignal::new(false);

    let media = {
        let gradient = project.gradient.clone();
        move || media_class(&gradient, failed.get())
    };
    let overlay_class = move || {
        if hovered.get() == Some(index) {
            "card-overlay-icon overlay-active"
        } else {
            "card-overlay-icon"
        }
    };

    view! {
        <article
            class="project-card"
            on:mouseenter=move |_| set_hovered.set(Some(index))
            on:mouseleave=move |_| set_hovered.set(None)
        >
            <div class=format!("card-glow gradient-{}", project.gradient)></div>
            <div class="card-body">
                <div class="card-meta">
                    <span class="card-category">{project.category.clone()}</span>
                    <span class="card-stack">{project.stack.clone()}</span>
                </div>
                <h2 class="card-title">{project.title.clone()}</h2>
                <p class="card-description">{project.description.clone()}</p>
                <div class="card-links">
                    <a
                        href=project.github.clone()
                        target="_blank"
                        rel="noreferrer"
                        class="card-link"
                    >
                        "View Code"
                    </a>
                    {project
                        .demo
                        .clone()
                        .map(|demo| {
                            view! {
                                <a
                                    href=demo
                                    target="_blank"
                                    rel="noreferrer"
                                    class="card-link card-link-demo"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class=media>
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    on:error=move |_| failed.set(true)
                />
                <div class=overlay_class>
                    <span class=format!("icon-{}", overlay_icon(index))></span>
                </div>
            </div>
        </article>
    }
}

/// Media container classes. The fallback class hides the broken image and
/// paints the container with a solid block instead.
fn media_class(gradient: &str, failed: bool) -> String {
    if failed {
        format!("card-media tint-{gradient} media-fallback")
    } else {
        format!("card-media tint-{gradient}")
    }
}

/// Decorative overlay icon per card position, cycling through the three
/// originals.
fn overlay_icon(index: usize) -> &'static str {
    match index % 3 {
        0 => "sparkles",
        1 => "cpu",
        _ => "code",
    }
}
