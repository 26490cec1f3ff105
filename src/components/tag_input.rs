use crate::autocomplete::{
    handle_key, suppresses_default, FieldState, Key, Overlay, OverlayPosition, Transition,
};
use crate::components::ui::{text_input_class, Spinner, SuggestionItem, SuggestionList};
use crate::state::AppContext;
use crate::util::{byte_idx_to_utf16, utf16_to_byte_idx};
use crate::vocabulary::VocabularyStatus;
use leptos::html;
use leptos::prelude::*;

/// Snapshot the input's value and selection. DOM offsets are UTF-16; the engine wants bytes.
fn read_field(el: &web_sys::HtmlInputElement) -> FieldState {
    let value = el.value();
    let len_utf16 = value.encode_utf16().count() as u32;
    let start = el.selection_start().ok().flatten().unwrap_or(len_utf16);
    let end = el.selection_end().ok().flatten().unwrap_or(start);

    let selection_start = utf16_to_byte_idx(&value, start);
    let selection_end = utf16_to_byte_idx(&value, end);
    FieldState::new(value, selection_start, selection_end)
}

fn write_field(el: &web_sys::HtmlInputElement, field: &FieldState) {
    el.set_value(&field.value);
    let start = byte_idx_to_utf16(&field.value, field.selection_start);
    let end = byte_idx_to_utf16(&field.value, field.selection_end);
    let _ = el.set_selection_range(start, end);
    let _ = el.focus();
}

/// Text input with inline completion against the shared tag vocabulary.
///
/// Completion runs on key release, once the input already reflects the keystroke. Tab commits
/// the highlighted tag, ArrowUp/ArrowDown move the highlight, any other non-tag key closes the
/// list. Clicking an entry commits it as well.
#[component]
pub fn TagInput(
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let vocabulary = app_state.0.vocabulary;

    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let overlay: RwSignal<Overlay> = RwSignal::new(Overlay::Idle);
    let position: RwSignal<OverlayPosition> = RwSignal::new(OverlayPosition::Hidden);

    let apply = move |el: &web_sys::HtmlInputElement, transition: Transition| {
        if let Some(next) = transition.field {
            write_field(el, &next);
            bind_value.set(next.value);
        }

        // Re-measure on every show; the field may have moved since the last keystroke.
        position.set(if transition.overlay.is_open() {
            OverlayPosition::below(el.offset_left(), el.offset_top())
        } else {
            OverlayPosition::Hidden
        });
        overlay.set(transition.overlay);
    };

    // Keep Tab from moving focus, and arrows from moving the caret while a list is shown.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = Key::from_event_key(&ev.key());
        if overlay.with_untracked(|o| suppresses_default(&key, o)) {
            ev.prevent_default();
        }
    };

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        let Some(el) = input_ref.get_untracked() else {
            return;
        };

        let key = Key::from_event_key(&ev.key());
        let field = read_field(&el);
        let transition = overlay.with_untracked(|current| {
            vocabulary.with_tags(|tags| handle_key(current, &key, &field, tags))
        });
        apply(&el, transition);
    };

    let commit = move |index: usize| {
        let Some(el) = input_ref.get_untracked() else {
            return;
        };

        let next = overlay.with_untracked(|o| o.completions().and_then(|c| c.commit(index)));
        apply(
            &el,
            Transition {
                field: next,
                overlay: Overlay::Idle,
            },
        );
    };

    view! {
        <div class="relative w-full">
            <input
                node_ref=input_ref
                data-name="TagInput"
                type="text"
                id=id
                name=name
                placeholder=placeholder
                autocomplete="off"
                spellcheck="false"
                class=text_input_class(&class)
                prop:value=move || bind_value.get()
                on:input=move |ev| bind_value.set(event_target_value(&ev))
                on:keydown=on_keydown
                on:keyup=on_keyup
            />

            <Show
                when=move || vocabulary.status() == VocabularyStatus::Loading
                fallback=|| ().into_view()
            >
                <Spinner class="absolute right-2 top-2.5 text-muted-foreground" />
            </Show>

            <SuggestionList attr:role="listbox" attr:style=move || position.get().style()>
                {move || {
                    let Some(completions) = overlay.with(|o| o.completions().cloned()) else {
                        return ().into_any();
                    };

                    let selected_index = completions.selected;
                    completions
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(i, tag)| {
                            let selected = (i == selected_index).to_string();
                            view! {
                                <SuggestionItem
                                    attr:role="option"
                                    attr:aria-selected=selected.clone()
                                    attr:data-selected=selected
                                    // Keep focus in the input.
                                    on:mousedown=move |ev: web_sys::MouseEvent| ev.prevent_default()
                                    on:click=move |_| commit(i)
                                >
                                    {tag}
                                </SuggestionItem>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </SuggestionList>
        </div>
    }
}
