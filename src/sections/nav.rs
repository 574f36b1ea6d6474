use leptos::prelude::*;

use crate::content::ContactInfo;

/// Pixel offset past which the navbar switches to its condensed style.
const SCROLL_THRESHOLD: f64 = 30.0;

/// Next navbar state for a scroll offset, or `None` when nothing changes.
///
/// Keeping this pure makes the listener a plain "write only on flips"
/// wrapper: a burst of scroll events at the same offset produces exactly
/// one signal write.
fn scroll_transition(current: bool, scroll_y: f64) -> Option<bool> {
    let past = scroll_y > SCROLL_THRESHOLD;
    (past != current).then_some(past)
}

/// Home navbar: desktop link row, mobile toggle, full-screen overlay menu.
///
/// Which of the link row and the toggle is visible is decided by the CSS
/// breakpoint (768px); both are always in the markup. The overlay closes
/// on navigation simply because the page unmounts.
#[component]
pub fn Nav(contact: ContactInfo) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    attach_scroll_listener(scrolled, set_scrolled);

    let resume_href = contact.resume_file.clone();
    let resume_href_overlay = contact.resume_file.clone();

    view! {
        <nav class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner">
                <div class="nav-links">
                    <a href="/projects" class="nav-link">"Projects"</a>
                    <a href="#about" class="nav-link">"About"</a>
                    <a
                        href=resume_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-resume"
                    >
                        "Resume"
                    </a>
                </div>

                <button
                    class="nav-menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>

                <Show when=move || menu_open.get()>
                    <div class="nav-overlay">
                        <a href="/projects" class="overlay-link">"Projects"</a>
                        <a
                            href="#about"
                            class="overlay-link"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "About"
                        </a>
                        <a
                            href=resume_href_overlay.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="overlay-resume"
                        >
                            "Resume"
                        </a>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Window scroll drives the condensed navbar style. Only wired up on the
/// wasm target; there is no window anywhere else.
///
/// The browser owns the closure, so it outlives the navbar that created
/// it. Once the captured signals are disposed (the home page unmounted),
/// the next firing detaches the listener instead of touching them.
fn attach_scroll_listener(scrolled: ReadSignal<bool>, set_scrolled: WriteSignal<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };

        let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle_inner = Rc::clone(&handle);
        let win = window.clone();

        let on_scroll = Closure::wrap(Box::new(move || {
            let Some(current) = scrolled.try_get_untracked() else {
                if let Some(closure) = handle_inner.borrow().as_ref() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                return;
            };

            let y = win.scroll_y().unwrap_or(0.0);
            if let Some(next) = scroll_transition(current, y) {
                let _ = set_scrolled.try_set(next);
            }
        }) as Box<dyn FnMut()>);

        let _ =
            window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        *handle.borrow_mut() = Some(on_scroll);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (scrolled, set_scrolled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_nav() -> String {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let contact = portfolio().contact;
            view! { <Nav contact/> }.to_html()
        })
    }

    #[test]
    fn crossing_the_threshold_flips_state_once() {
        assert_eq!(scroll_transition(false, 45.0), Some(true));
        // Repeated events past the threshold are no-ops.
        assert_eq!(scroll_transition(true, 45.0), None);
        assert_eq!(scroll_transition(true, 500.0), None);

        assert_eq!(scroll_transition(true, 10.0), Some(false));
        assert_eq!(scroll_transition(false, 10.0), None);
    }

    #[test]
    fn threshold_is_exclusive_at_30px() {
        assert_eq!(scroll_transition(false, 30.0), None);
        assert_eq!(scroll_transition(false, 30.5), Some(true));
        assert_eq!(scroll_transition(false, 0.0), None);
    }

    #[test]
    fn scroll_firing_after_unmount_is_a_noop() {
        let owner = Owner::new_root(None);
        let (scrolled, set_scrolled) = owner.with(|| signal(false));

        // Mirrors one firing of the window listener.
        let fire = |y: f64| {
            if let Some(current) = scrolled.try_get_untracked() {
                if let Some(next) = scroll_transition(current, y) {
                    let _ = set_scrolled.try_set(next);
                }
            }
        };

        // While the navbar is alive, a firing past the threshold flips state.
        fire(45.0);
        assert_eq!(scrolled.try_get_untracked(), Some(true));

        // After the owner is disposed, the signals are gone; a stale firing
        // must bail out rather than panic.
        drop(owner);
        assert_eq!(scrolled.try_get_untracked(), None);
        fire(10.0);
        let _ = set_scrolled.try_set(false);
    }

    #[test]
    fn renders_both_desktop_links_and_mobile_toggle() {
        let html = render_nav();
        assert!(html.contains("nav-links"));
        assert!(html.contains("nav-menu-toggle"));
        assert!(html.contains("href=\"/projects\""));
        assert!(html.contains("Resume"));
    }

    #[test]
    fn overlay_menu_starts_closed() {
        let html = render_nav();
        assert!(!html.contains("nav-overlay"));
    }
}
