use leptos::prelude::*;

use crate::content::SkillEntry;

/// Scrolling skills strip. The list is rendered twice back to back so the
/// CSS marquee can loop without a visible seam.
#[component]
pub fn SkillsTicker(skills: Vec<SkillEntry>) -> impl IntoView {
    let entries = skills
        .iter()
        .chain(skills.iter())
        .map(|entry| {
            view! {
                <span class="ticker-entry">
                    <span class=format!(
                        "ticker-icon icon-{} tone-{}",
                        entry.icon,
                        entry.color,
                    )></span>
                    {entry.name.clone()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="ticker">
            <div class="ticker-track">{entries}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_ticker(skills: Vec<SkillEntry>) -> String {
        let owner = Owner::new_root(None);
        owner.with(|| view! { <SkillsTicker skills/> }.to_html())
    }

    #[test]
    fn every_skill_appears_exactly_twice() {
        let skills = portfolio().skills;
        let html = render_ticker(skills.clone());
        for entry in &skills {
            assert_eq!(
                html.matches(entry.name.as_str()).count(),
                2,
                "skill {} not duplicated for the loop",
                entry.name
            );
        }
    }

    #[test]
    fn empty_skill_list_renders_an_empty_track() {
        let html = render_ticker(Vec::new());
        assert!(html.contains("ticker-track"));
        assert!(!html.contains("ticker-entry"));
    }
}
