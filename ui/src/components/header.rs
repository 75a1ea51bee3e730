//! Header component

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wingman::Route;

/// Top bar of the dashboard with the sign-out action
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_auth = Signal::derive(move || state.session.with(|s| s.is_authenticated()));

    view! {
        <header class="h-16 sticky top-0 z-40 bg-slate-800 border-b border-slate-700">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                <a href=Route::Dashboard.path() class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                    <span class="text-2xl">"🤖"</span>
                    <h1 class="text-xl font-bold text-slate-100">"Wingman AI"</h1>
                </a>

                <nav class="flex items-center gap-2">
                    {move || {
                        if is_auth.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    on:click=move |_| {
                                        state.clear_auth();
                                        navigate(Route::Login.path(), Default::default());
                                    }
                                    class="px-4 py-2 rounded-lg text-slate-300 hover:bg-slate-700 transition-colors"
                                >
                                    "Logout"
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <a
                                    href=Route::Login.path()
                                    class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                                >
                                    "Sign In"
                                </a>
                            }
                            .into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
