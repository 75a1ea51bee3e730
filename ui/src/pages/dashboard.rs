//! Dashboard page: analysis form, result cards and chat
//!
//! All state transitions go through [`wingman::Dashboard`]; this module only
//! binds them to the DOM and performs the requests.

use crate::api;
use crate::components::{ChatMessage, ErrorAlert, Header, LoadingSpinner};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wingman::{AnalysisKind, Dashboard, Navigation, Route, RouteGuard, Tab};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let session = state.session;

    // Leave as soon as the session goes away, including after logout
    Effect::new(move |_| {
        let decision = session.with(|s| RouteGuard::evaluate(Route::Dashboard, s));
        if let Navigation::Redirect(to) = decision {
            navigate(to.path(), Default::default());
        }
    });

    let dashboard = RwSignal::new(Dashboard::new(&session.get_untracked()));
    let active_tab = Memo::new(move |_| dashboard.with(|d| d.active_tab()));

    view! {
        <Show when=move || session.with(|s| s.is_authenticated())>
            <div class="min-h-screen flex flex-col">
                <Header />

                <main class="flex-1 w-full max-w-5xl mx-auto p-6">
                    <nav class="flex gap-2 border-b border-slate-700 mb-6">
                        {Tab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        type="button"
                                        disabled=move || !dashboard.with(|d| d.is_tab_enabled(tab))
                                        class=move || {
                                            if active_tab.get() == tab {
                                                "px-4 py-2 border-b-2 border-blue-500 text-blue-400 font-medium"
                                            } else {
                                                "px-4 py-2 text-slate-400 hover:text-slate-200 disabled:opacity-40 disabled:cursor-not-allowed"
                                            }
                                        }
                                        on:click=move |_| {
                                            dashboard.update(|d| {
                                                d.select_tab(tab);
                                            });
                                        }
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    {move || match active_tab.get() {
                        Tab::Analysis => view! { <AnalysisPanel dashboard=dashboard /> }.into_any(),
                        Tab::Results => view! { <ResultsPanel dashboard=dashboard /> }.into_any(),
                        Tab::Chat => view! { <ChatPanel dashboard=dashboard /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}

#[component]
fn AnalysisPanel(dashboard: RwSignal<Dashboard>) -> impl IntoView {
    let state = expect_context::<AppState>();

    let error = Signal::derive(move || dashboard.with(|d| d.error().map(str::to_string)));
    let is_loading = Signal::derive(move || dashboard.with(|d| d.is_loading()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some((ticket, req)) = dashboard.try_update(|d| d.begin_analysis()) else {
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            let base_url = state.api_base.get_untracked();
            let token = state.token();
            let result = api::analyze_market(&base_url, &req, token.as_deref()).await;

            // A reply to a superseded submission is dropped by the dashboard
            dashboard.update(|d| {
                d.finish_analysis(ticket, result);
            });
        });
    };

    view! {
        <ErrorAlert message=error />

        <form on:submit=on_submit class="bg-slate-800 rounded-xl p-6 grid grid-cols-1 md:grid-cols-2 gap-4">
            <TextInput
                label="Company Website"
                required=true
                value=Signal::derive(move || dashboard.with(|d| d.form.company_website.clone()))
                on_change=move |v| dashboard.update(|d| d.form.company_website = v)
            />
            <TextInput
                label="Competitor Website"
                value=Signal::derive(move || dashboard.with(|d| d.form.competitor_website.clone()))
                on_change=move |v| dashboard.update(|d| d.form.competitor_website = v)
            />
            <div class="md:col-span-2">
                <TextInput
                    label="Company Description"
                    required=true
                    multiline=true
                    value=Signal::derive(move || dashboard.with(|d| d.form.company_description.clone()))
                    on_change=move |v| dashboard.update(|d| d.form.company_description = v)
                />
            </div>
            <TextInput
                label="Prospect URL"
                required=true
                value=Signal::derive(move || dashboard.with(|d| d.form.prospect_url.clone()))
                on_change=move |v| dashboard.update(|d| d.form.prospect_url = v)
            />
            <TextInput
                label="Prospect Job Title"
                required=true
                value=Signal::derive(move || dashboard.with(|d| d.form.prospect_job_title.clone()))
                on_change=move |v| dashboard.update(|d| d.form.prospect_job_title = v)
            />

            <fieldset class="md:col-span-2">
                <legend class="text-sm text-slate-400 mb-2">"Analyses"</legend>
                <div class="flex flex-wrap gap-2 mb-3 min-h-[2rem]">
                    {move || {
                        dashboard
                            .with(|d| d.selected().to_vec())
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <span class="px-3 py-1 rounded-full bg-blue-600/20 text-blue-300 text-sm">
                                        {kind.label()}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-2">
                    {AnalysisKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <label class="flex items-center gap-2 text-sm cursor-pointer">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || dashboard.with(|d| d.is_selected(kind))
                                        on:change=move |_| dashboard.update(|d| d.toggle(kind))
                                    />
                                    <span>{kind.label()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </fieldset>

            <button
                type="submit"
                disabled=move || is_loading.get()
                class="md:col-span-2 flex items-center justify-center gap-2 py-3 rounded-lg bg-blue-600 hover:bg-blue-700 disabled:opacity-50 font-medium"
            >
                <Show when=move || is_loading.get()>
                    <LoadingSpinner />
                </Show>
                "Analyze"
            </button>
        </form>
    }
}

#[component]
fn ResultsPanel(dashboard: RwSignal<Dashboard>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4">
            {move || {
                dashboard.with(|d| {
                    d.results()
                        .cards()
                        .into_iter()
                        .map(|(label, body)| {
                            let label = label.to_string();
                            let body = body.to_string();
                            view! {
                                <article class="bg-slate-800 rounded-xl p-6">
                                    <h2 class="text-lg font-semibold mb-3">{label}</h2>
                                    <p class="whitespace-pre-wrap text-slate-300">{body}</p>
                                </article>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[component]
fn ChatPanel(dashboard: RwSignal<Dashboard>) -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(req) = dashboard.try_update(|d| d.begin_chat()).flatten() else {
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            let base_url = state.api_base.get_untracked();
            let token = state.token();
            let result = api::chat(&base_url, &req, token.as_deref()).await;
            dashboard.update(|d| d.finish_chat(result));
        });
    };

    view! {
        <div class="bg-slate-800 rounded-xl p-4 flex flex-col gap-4 h-[60vh]">
            <div class="flex-1 overflow-y-auto">
                {move || {
                    dashboard.with(|d| {
                        d.chat
                            .transcript()
                            .iter()
                            .cloned()
                            .map(|entry| view! { <ChatMessage entry=entry /> })
                            .collect_view()
                    })
                }}
            </div>

            <form on:submit=on_submit class="flex gap-2">
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || dashboard.with(|d| d.chat.input.clone())
                    on:input=move |ev| dashboard.update(|d| d.chat.input = event_target_value(&ev))
                    class="flex-1 px-3 py-2 rounded-lg bg-slate-900 border border-slate-700"
                />
                <button type="submit" class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 font-medium">
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// Labelled text input or textarea bound to a derived value
#[component]
fn TextInput(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let class = "px-3 py-2 rounded-lg bg-slate-900 border border-slate-700";

    let input = if multiline {
        view! {
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_change(event_target_value(&ev))
                required=required
                class=class
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_change(event_target_value(&ev))
                required=required
                class=class
            />
        }
        .into_any()
    };

    view! {
        <label class="flex flex-col gap-1">
            <span class="text-sm text-slate-400">{label}</span>
            {input}
        </label>
    }
}
