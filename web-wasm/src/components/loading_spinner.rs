//! ローディングスピナー

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
