//! Search form and pager for the list pages.

use leptos::prelude::*;

/// Name search with submit and an optional clear button.
#[component]
pub fn SearchForm(
    placeholder: &'static str,
    draft: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_clear: Callback<()>,
    show_clear: Signal<bool>,
) -> impl IntoView {
    view! {
        <form
            class="search-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                class="input"
                type="search"
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button class="btn btn-primary" type="submit">"Search"</button>
            <Show when=move || show_clear.get()>
                <button class="btn" type="button" on:click=move |_| on_clear.run(())>"Clear"</button>
            </Show>
        </form>
    }
}

/// "Page N of M" plus Prev/Next.
#[component]
pub fn Pager(
    page: Signal<u32>,
    total_pages: Signal<Option<u32>>,
    filter: Signal<String>,
    can_prev: Signal<bool>,
    can_next: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let summary = move || {
        let mut text = String::new();
        if let Some(total) = total_pages.get() {
            text.push_str(&format!(" of {total}"));
        }
        let filter = filter.get();
        if !filter.trim().is_empty() {
            text.push_str(&format!(" • query: \"{}\"", filter.trim()));
        }
        text
    };

    view! {
        <div class="pager">
            <div class="pager__summary">"Page " <b>{move || page.get()}</b> {summary}</div>
            <div class="pager__buttons">
                <button class="btn" disabled=move || !can_prev.get() on:click=move |_| on_prev.run(())>"Prev"</button>
                <button class="btn" disabled=move || !can_next.get() on:click=move |_| on_next.run(())>"Next"</button>
            </div>
        </div>
    }
}
