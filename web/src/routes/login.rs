use crate::features::auth::client;
use crate::features::auth::types::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    // A failed attempt stays on the page; the log line never says which
    // factor was wrong, mirroring the server's generic error.
    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => navigate("/topic", Default::default()),
                Err(_) => leptos::logging::error!("Login failed"),
            }
        }
    });

    // Every submit sends exactly one request; field checks belong to the
    // server, which answers empty fields with the same 400 either way.
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        login_action.dispatch(LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="flex justify-center items-center h-screen bg-gray-100">
            <div class="bg-white p-6 rounded-lg shadow-lg w-full max-w-sm">
                <h2 class="text-2xl font-bold text-center mb-6">"Login"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-bold mb-1" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-400"
                            autocomplete="email"
                            placeholder="Enter your email"
                            prop:value=email
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-bold mb-1" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-400"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            prop:value=password
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-blue-500 text-white py-2 px-4 rounded-lg hover:bg-blue-600 disabled:opacity-50"
                        disabled=login_action.pending()
                    >
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
