use leptos::prelude::*;

/// Fixed decorative background: giant watermark text, grid and noise
/// layers, two blurred glow blobs. Purely visual, no state.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-watermark">"ENGINEER"</div>
            <div class="backdrop-grid"></div>
            <div class="backdrop-noise"></div>
            <div class="backdrop-glow backdrop-glow-warm"></div>
            <div class="backdrop-glow backdrop-glow-cool"></div>
        </div>
    }
}
