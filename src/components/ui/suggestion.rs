use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {SuggestionList, ul, "absolute z-50 m-0 min-w-40 list-none rounded-md border border-border bg-background p-0 text-sm shadow-lg"}
    clx! {SuggestionItem, li, "cursor-pointer px-2 py-1 hover:bg-muted data-[selected=true]:bg-accent data-[selected=true]:text-accent-foreground"}
}

pub use components::*;
