use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search field with a clear button. Every input event is forwarded to
/// `on_change` as is (no debounce).
#[component]
pub fn SearchInput(
    /// Element id of the `<input>`
    #[prop(into)]
    id: String,
    /// Current search text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every input event
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search products...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="search"
                id=id
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || {
                if value.with(|v| v.is_empty()) {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="search-input__clear"
                            title="Clear"
                            on:click=move |_| on_change.run(String::new())
                        >
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
