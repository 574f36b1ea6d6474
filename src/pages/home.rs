use leptos::prelude::*;

use crate::content::PortfolioContent;
use crate::sections::{About, Backdrop, Contact, Hero, Nav, SkillsTicker};

/// Home route: hero, skills ticker, about, and contact sections over the
/// fixed decorative backdrop.
#[component]
pub fn HomePage(content: PortfolioContent) -> impl IntoView {
    view! {
        <div class="page page-home">
            <Backdrop/>
            <Nav contact=content.contact.clone()/>
            <main>
                <Hero content=content.clone()/>
                <SkillsTicker skills=content.skills.clone()/>
                <About content=content.clone()/>
                <Contact contact=content.contact.clone()/>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_home() -> String {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let content = portfolio();
            view! { <HomePage content/> }.to_html()
        })
    }

    #[test]
    fn hero_heading_and_cta_are_present() {
        let html = render_home();
        assert!(html.contains("FULL STACK"));
        assert!(html.contains("AI ENGINEER."));
        assert!(html.contains("See My Work"));
        assert!(html.contains("href=\"/projects\""));
    }

    #[test]
    fn ticker_entries_are_duplicated_for_the_loop() {
        let html = render_home();
        // These names appear nowhere else on the page, so the count is the
        // ticker's alone.
        assert_eq!(html.matches("FastAPI").count(), 2);
        assert_eq!(html.matches("Node.js").count(), 2);
        assert_eq!(html.matches("React.js").count(), 2);
    }

    #[test]
    fn contact_section_links_the_email() {
        let html = render_home();
        assert!(html.contains("mailto:manishmahesh456@gmail.com"));
        assert!(html.contains("NEXT BIG THING."));
    }
}
