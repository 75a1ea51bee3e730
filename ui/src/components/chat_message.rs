//! Chat message component

use leptos::prelude::*;
use wingman::ChatEntry;

/// Render a single transcript entry
#[component]
pub fn ChatMessage(entry: ChatEntry) -> impl IntoView {
    let is_user = entry.is_user;

    view! {
        <div class=format!(
            "flex items-start gap-3 mb-3 {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-white text-sm shrink-0 {}",
                if is_user { "bg-blue-600" } else { "bg-violet-600" }
            )>
                {if is_user { "👤" } else { "🤖" }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[70%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!(
                    "px-4 py-3 rounded-2xl whitespace-pre-wrap break-words {}",
                    if is_user {
                        "bg-blue-600 text-white rounded-tr-sm"
                    } else {
                        "bg-slate-800 text-slate-100 rounded-tl-sm"
                    }
                )>
                    {entry.text.clone()}
                </div>

                <span class="text-xs text-slate-600">
                    {entry.timestamp.with_timezone(&chrono::Local).format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}
