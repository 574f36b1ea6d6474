use leptos::prelude::*;

use crate::content::{Certification, PortfolioContent};

#[component]
pub fn About(content: PortfolioContent) -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about-grid">
                <div class="about-narrative">
                    <h2 class="about-title">
                        "I bridge the gap between "
                        <span class="about-dim">"complex backend logic"</span>
                        " and "
                        <span class="about-accent">"seamless user experiences."</span>
                    </h2>
                    <p class="about-text">{content.bio.clone()}</p>
                    <p class="about-text">
                        "I don't just write code; I solve problems. My current focus \
                         is pushing the boundaries of what's possible by integrating \
                         Large Language Models (LLMs) into practical applications, \
                         turning cutting-edge AI research into usable features."
                    </p>
                </div>
                <div class="about-aside">
                    <InfoBlock label="Location" value=content.location.clone()/>
                    <InfoBlock label="Education" value=content.education.clone()/>
                    <CertificationList certifications=content.certifications.clone()/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoBlock(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-block">
            <div class="info-label">{label}</div>
            <div class="info-value">{value}</div>
        </div>
    }
}

#[component]
fn CertificationList(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <div class="info-block">
            <div class="info-label">"Certifications"</div>
            <ul class="cert-list">
                {certifications
                    .into_iter()
                    .map(|cert| {
                        view! {
                            <li class="cert-item">
                                <span class="cert-name">{cert.name}</span>
                                <span class="cert-provider">{cert.provider}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_bio_and_sidebar_facts() {
        let owner = Owner::new_root(None);
        let html = owner.with(|| {
            let content = portfolio();
            view! { <About content/> }.to_html()
        });

        assert!(html.contains("seamless user experiences."));
        assert!(html.contains("Udupi / Bangalore"));
        assert!(html.contains("SMVITM (CS)"));
        assert!(html.contains("Databricks"));
    }
}
