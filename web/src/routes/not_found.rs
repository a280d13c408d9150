//! Minimal 404 page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center h-screen bg-gray-100 text-center">
            <h1 class="text-6xl font-black text-gray-300 select-none">"404"</h1>
            <p class="mt-2 text-xl font-bold">"Page not found"</p>
            <A
                href="/login"
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-500 rounded-lg hover:bg-blue-600"
            >
                "Go to login"
            </A>
        </div>
    }
}
