//! Registration page

use crate::api;
use crate::components::{ErrorAlert, LoadingSpinner};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wingman::auth::RegisterForm;
use wingman::{Credentials, Route};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let company_url = RwSignal::new(String::new());
    let company_description = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterForm {
            username: username.get_untracked(),
            company_url: company_url.get_untracked(),
            company_description: company_description.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
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
            let result = api::register(&base_url, &req).await;

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
        <div class="min-h-screen flex items-center justify-center px-4 py-8">
            <div class="w-full max-w-md bg-slate-800 rounded-2xl p-8 shadow-xl">
                <div class="text-center mb-8">
                    <div class="text-5xl mb-3">"🤖"</div>
                    <h1 class="text-3xl font-bold">"Create Account"</h1>
                    <p class="text-slate-400 mt-2">"Tell Wingman about your company"</p>
                </div>

                <ErrorAlert message=error />

                <form on:submit=on_submit class="flex flex-col gap-4">
                    <Field label="Username" kind="text" value=username />
                    <Field label="Company URL" kind="url" value=company_url />
                    <Field label="Company Description" kind="text" value=company_description />
                    <Field label="Email Address" kind="email" value=email />
                    <Field label="Password" kind="password" value=password />
                    <Field label="Confirm Password" kind="password" value=confirm_password />

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="flex items-center justify-center gap-2 py-3 rounded-lg bg-blue-600 hover:bg-blue-700 disabled:opacity-50 font-medium"
                    >
                        <Show when=move || is_loading.get()>
                            <LoadingSpinner />
                        </Show>
                        "Sign Up"
                    </button>
                </form>

                <div class="mt-6 text-center text-sm">
                    <a href=Route::Login.path() class="text-blue-400 hover:underline">
                        "Already have an account? Sign In"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// One required, labelled input
#[component]
fn Field(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1">
            <span class="text-sm text-slate-400">{label}</span>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                required=true
                class="input px-3 py-2 rounded-lg bg-slate-900 border border-slate-700"
            />
        </label>
    }
}
