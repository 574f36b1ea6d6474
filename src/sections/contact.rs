use leptos::prelude::*;

use crate::content::ContactInfo;

/// Final call-to-action: big heading, the email as a mailto link, and the
/// outbound profile links one more time.
#[component]
pub fn Contact(contact: ContactInfo) -> impl IntoView {
    let mailto = format!("mailto:{}", contact.email);

    view! {
        <section class="cta">
            <h2 class="cta-title">
                "LET'S BUILD"
                <br/>
                "THE "
                <span class="cta-accent">"NEXT BIG THING."</span>
            </h2>
            <a href=mailto class="cta-email">{contact.email.clone()}</a>
            <div class="cta-socials">
                <a
                    href=contact.github.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-social"
                >
                    "GitHub"
                </a>
                <a
                    href=contact.linkedin.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-social"
                >
                    "LinkedIn"
                </a>
                <a
                    href=contact.resume_file.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-social"
                >
                    "Resume"
                </a>
            </div>
            <p class="cta-copyright">"(c)2025 Manish M"</p>
        </section>
    }
}
