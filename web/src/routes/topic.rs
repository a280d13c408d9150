use crate::features::auth::client;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Landing page after a successful login. The session cookie rides along
/// on every request here, so no token handling shows up in the view.
#[component]
pub fn TopicPage() -> impl IntoView {
    let navigate = use_navigate();
    let (greeting, set_greeting) = signal::<Option<String>>(None);

    let whoami_action = Action::new_local(|_: &()| client::current_user());
    let logout_action = Action::new_local(|_: &()| client::logout());

    Effect::new(move |_| {
        if let Some(result) = whoami_action.value().get() {
            match result {
                Ok(user) => {
                    set_greeting.set(Some(format!("Signed in as {} <{}>", user.name, user.email)));
                }
                Err(err) => set_greeting.set(Some(err.to_string())),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = logout_action.value().get() {
            match result {
                Ok(()) => navigate("/login", Default::default()),
                Err(_) => leptos::logging::error!("Logout failed"),
            }
        }
    });

    view! {
        <div class="flex justify-center items-center h-screen bg-gray-100">
            <div class="bg-white p-6 rounded-lg shadow-lg w-full max-w-sm space-y-4">
                <h2 class="text-2xl font-bold text-center">"Topic"</h2>
                {move || greeting.get().map(|text| view! { <p class="text-sm text-center">{text}</p> })}
                <button
                    class="w-full bg-blue-500 text-white py-2 px-4 rounded-lg hover:bg-blue-600"
                    on:click=move |_| {
                        whoami_action.dispatch(());
                    }
                >
                    "Who am I?"
                </button>
                <button
                    class="w-full bg-gray-300 py-2 px-4 rounded-lg hover:bg-gray-400"
                    on:click=move |_| {
                        logout_action.dispatch(());
                    }
                >
                    "Log out"
                </button>
            </div>
        </div>
    }
}
