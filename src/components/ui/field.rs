use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {Field, div, "flex items-baseline gap-3"}
    clx! {StatsBar, div, "flex gap-4 text-xs text-muted-foreground tabular-nums"}
}

pub use components::*;

/// Fixed-width label column, so every field on the write page lines up.
#[component]
pub fn FieldLabel(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!("w-20 shrink-0 text-sm font-medium select-none", class);

    view! {
        <label class=class r#for=html_for>
            {children()}
        </label>
    }
}

const TEXT_INPUT_CLASS: &str = "h-9 w-full min-w-0 rounded-md border border-input bg-transparent px-3 py-1 text-sm shadow-xs outline-none focus-visible:border-ring focus-visible:ring-2 focus-visible:ring-ring/50 read-only:bg-muted";

/// Class list shared by the plain inputs and the tag input.
pub fn text_input_class(extra: &str) -> String {
    tw_merge!(TEXT_INPUT_CLASS, extra)
}
