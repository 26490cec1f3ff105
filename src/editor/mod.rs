use crate::util::{byte_idx_to_utf16, utf16_to_byte_idx};
use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Replace the byte range `[start, end)` of `value` with `insert`.
pub(crate) fn replace_selection(value: &str, start: usize, end: usize, insert: &str) -> String {
    let end = end.min(value.len());
    let start = start.min(end);

    let mut next = String::with_capacity(value.len() + insert.len());
    next.push_str(&value[..start]);
    next.push_str(insert);
    next.push_str(&value[end..]);
    next
}

/// Plain-text document editor.
///
/// `text` is the single source of truth; `on_change` fires after every user edit, never for
/// programmatic updates.
#[component]
pub fn NoteEditor(
    text: RwSignal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let editor_ref: NodeRef<html::Textarea> = NodeRef::new();

    let emit = move |value: String| {
        text.set(value.clone());
        if let Some(cb) = on_change {
            cb.run(value);
        }
    };

    Effect::new(move |_| {
        if let Some(el) = editor_ref.get() {
            let _ = el.focus();
        }
    });

    // Tab indents with a literal tab instead of leaving the editor.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Tab" || ev.shift_key() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(el) = editor_ref.get_untracked() else {
            return;
        };
        ev.prevent_default();

        let v = el.value();
        let start_utf16 = el.selection_start().ok().flatten().unwrap_or(0);
        let end_utf16 = el.selection_end().ok().flatten().unwrap_or(start_utf16);
        let start = utf16_to_byte_idx(&v, start_utf16);
        let end = utf16_to_byte_idx(&v, end_utf16);

        let next = replace_selection(&v, start, end, "\t");
        el.set_value(&next);
        let caret = byte_idx_to_utf16(&next, start.min(end) + 1);
        let _ = el.set_selection_range(caret, caret);

        emit(next);
    };

    let merged_class = tw_merge!(
        "min-h-[50vh] w-full resize-y rounded-md border border-input bg-transparent px-3 py-2 font-mono text-sm leading-relaxed shadow-xs outline-none focus-visible:border-ring focus-visible:ring-2 focus-visible:ring-ring/50",
        class
    );

    view! {
        <textarea
            node_ref=editor_ref
            data-name="NoteEditor"
            class=merged_class
            spellcheck="false"
            prop:value=move || text.get()
            on:input=move |ev| emit(event_target_value(&ev))
            on:keydown=on_keydown
        ></textarea>
    }
}
