use leptos::prelude::*;

use crate::content::PortfolioContent;

#[component]
pub fn Hero(content: PortfolioContent) -> impl IntoView {
    let intro = format!(
        "I'm {}, a specialized engineer based in {}. I fuse scalable backend \
         systems with cutting-edge generative AI to build intelligent digital \
         products.",
        content.name, content.location
    );
    let mailto = format!("mailto:{}", content.contact.email);

    view! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Available for work"
                    </div>
                    <h1 class="hero-title">
                        "FULL STACK"
                        <br/>
                        <span class="hero-title-accent">"AI ENGINEER."</span>
                    </h1>
                    <p class="hero-description">{intro}</p>
                    <div class="hero-actions">
                        <a href="/projects" class="btn btn-primary">
                            "See My Work"
                        </a>
                        <div class="hero-socials">
                            <a
                                href=content.contact.github.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                aria-label="GitHub"
                            >
                                "GitHub"
                            </a>
                            <a
                                href=content.contact.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                aria-label="LinkedIn"
                            >
                                "LinkedIn"
                            </a>
                            <a href=mailto class="social-link" aria-label="Email">
                                "Email"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="hero-portrait">
                    <img src="/manish.jpg" alt=content.name.clone()/>
                    <div class="hero-portrait-frame"></div>
                </div>
            </div>
        </section>
    }
}
