//! Login page with the password reset dialog

use crate::api;
use crate::components::{ErrorAlert, LoadingSpinner};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wingman::auth::{reset_outcome, ForgotPasswordForm, LoginForm};
use wingman::{Credentials, Route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let reset_open = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm::new(email.get_untracked(), password.get_untracked());
        let req = match form.validate() {
            Ok(req) => req,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base_url = state.api_base.get_untracked();
            let result = api::login(&base_url, &req).await;

            is_loading.set(false);

            match result {
                Ok(resp) => {
                    state.set_auth(Credentials::from_auth_response(resp));
                    navigate(Route::Dashboard.path(), Default::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-slate-800 rounded-2xl p-8 shadow-xl">
                <div class="text-center mb-8">
                    <div class="text-5xl mb-3">"🤖"</div>
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-slate-400 mt-2">"Sign in to Wingman AI"</p>
                </div>

                <ErrorAlert message=error />

                <form on:submit=on_submit class="flex flex-col gap-4">
                    <label class="flex flex-col gap-1">
                        <span class="text-sm text-slate-400">"Email Address"</span>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            autocomplete="email"
                            required=true
                            class="input px-3 py-2 rounded-lg bg-slate-900 border border-slate-700"
                        />
                    </label>

                    <label class="flex flex-col gap-1">
                        <span class="text-sm text-slate-400">"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            autocomplete="current-password"
                            required=true
                            class="input px-3 py-2 rounded-lg bg-slate-900 border border-slate-700"
                        />
                    </label>

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="flex items-center justify-center gap-2 py-3 rounded-lg bg-blue-600 hover:bg-blue-700 disabled:opacity-50 font-medium"
                    >
                        <Show when=move || is_loading.get()>
                            <LoadingSpinner />
                        </Show>
                        "Sign In"
                    </button>
                </form>

                <div class="flex justify-between mt-6 text-sm">
                    <button
                        type="button"
                        on:click=move |_| reset_open.set(true)
                        class="text-blue-400 hover:underline"
                    >
                        "Forgot password?"
                    </button>
                    <a href=Route::Register.path() class="text-blue-400 hover:underline">
                        "Don't have an account? Sign Up"
                    </a>
                </div>
            </div>

            <Show when=move || reset_open.get()>
                <ForgotPasswordDialog open=reset_open initial_email=email.get_untracked() />
            </Show>
        </div>
    }
}

/// Modal asking the backend to email reset instructions
#[component]
fn ForgotPasswordDialog(open: RwSignal<bool>, initial_email: String) -> impl IntoView {
    let state = expect_context::<AppState>();

    let email = RwSignal::new(initial_email);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let req = match ForgotPasswordForm::new(email.get_untracked()).validate() {
            Ok(req) => req,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let state = state.clone();
        spawn_local(async move {
            is_loading.set(true);
            error.set(None);
            notice.set(None);

            let base_url = state.api_base.get_untracked();
            let result = reset_outcome(api::forgot_password(&base_url, &req).await);

            is_loading.set(false);

            match result {
                Ok(message) => notice.set(Some(message.to_string())),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="fixed inset-0 bg-slate-900/80 backdrop-blur-sm flex items-center justify-center z-50 px-4">
            <div class="w-full max-w-md bg-slate-800 rounded-2xl p-6 shadow-xl">
                <h2 class="text-xl font-semibold mb-2">"Reset Password"</h2>
                <p class="text-sm text-slate-400 mb-4">
                    "Enter your email address and we'll send you instructions to reset your password."
                </p>

                <ErrorAlert message=error />
                <Show when=move || notice.with(Option::is_some)>
                    <div class="mb-4 p-4 bg-green-500/10 border border-green-500/50 rounded-lg text-green-400 text-sm">
                        {move || notice.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit class="flex flex-col gap-4">
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        placeholder="Email Address"
                        required=true
                        class="input px-3 py-2 rounded-lg bg-slate-900 border border-slate-700"
                    />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            on:click=move |_| open.set(false)
                            class="px-4 py-2 rounded-lg text-slate-300 hover:bg-slate-700"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class="flex items-center gap-2 px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                        >
                            <Show when=move || is_loading.get()>
                                <LoadingSpinner />
                            </Show>
                            "Send Reset Link"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
