use crate::api::NewNoteRequest;
use crate::components::ui::{
    text_input_class, Alert, AlertDescription, Button, Field, FieldLabel, Spinner, StatsBar,
};
use crate::components::TagInput;
use crate::document::DocumentStore;
use crate::editor::NoteEditor;
use crate::state::AppContext;
use crate::stats::{body_without_title, derive_title, page_title, DocumentStats};
use crate::vocabulary::VocabularyStatus;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn WritePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let store = DocumentStore::open();
    log!("editing {}", store.key());
    let text: RwSignal<String> = RwSignal::new(store.load().unwrap_or_default());
    store.start_autosave(text);

    let url: RwSignal<String> = RwSignal::new(String::new());
    let tags: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let submitting: RwSignal<bool> = RwSignal::new(false);

    let title = Memo::new(move |_| text.with(|t| derive_title(t)));
    let stats = Memo::new(move |_| text.with(|t| DocumentStats::of(t)));

    Effect::new(move |_| {
        document().set_title(&page_title(&title.get()));
    });

    let store_for_change = store.clone();
    let on_change = Callback::new(move |_text: String| store_for_change.mark_dirty());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let req = text.with_untracked(|t| {
            NewNoteRequest::new(
                &url.get_untracked(),
                &derive_title(t),
                body_without_title(t),
                &tags.get_untracked(),
            )
        });
        let api_client = app_state.0.api_client.clone();
        let store = store.clone();

        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match api_client.create_note(&req).await {
                Ok(()) => {
                    store.flush(&text.get_untracked());
                    let _ = window().location().set_href("/notes");
                }
                Err(e) => {
                    warn!("failed to create note: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-3xl px-4 py-8">
                <form class="flex flex-col gap-3" on:submit=on_submit>
                    <Field>
                        <FieldLabel html_for="url">"url"</FieldLabel>
                        <input
                            id="url"
                            name="url"
                            type="url"
                            class=text_input_class("")
                            prop:value=move || url.get()
                            on:input=move |ev| url.set(event_target_value(&ev))
                        />
                    </Field>

                    <Field>
                        <FieldLabel html_for="title">"title"</FieldLabel>
                        <input
                            id="title"
                            name="title"
                            type="text"
                            readonly=true
                            class=text_input_class("")
                            prop:value=move || title.get()
                        />
                    </Field>

                    <NoteEditor text=text on_change=on_change />

                    <StatsBar>
                        <span id="stats-words">{move || stats.get().words_label()}</span>
                        <span id="stats-chars">{move || stats.get().characters_label()}</span>
                        <span id="stats-time">{move || stats.get().minutes_label()}</span>
                    </StatsBar>

                    <Field>
                        <FieldLabel html_for="tags">"tags"</FieldLabel>
                        <TagInput id="tags" name="tags" bind_value=tags placeholder="space separated" />
                    </Field>

                    <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                        {move || {
                            error.get().map(|e| view! {
                                <Alert class="border-destructive/30">
                                    <AlertDescription class="text-destructive">{e}</AlertDescription>
                                </Alert>
                            })
                        }}
                    </Show>

                    <Button class="self-end" attr:disabled=move || submitting.get()>
                        <span class="inline-flex items-center gap-2">
                            <Show when=move || submitting.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if submitting.get() { "Creating..." } else { "Create post" }}
                        </span>
                    </Button>
                </form>
            </div>
        </div>
    }
}

/// Bare tag input, for trying the completion widget in isolation.
#[component]
pub fn TagsTestPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let vocabulary = app_state.0.vocabulary;
    let tags: RwSignal<String> = RwSignal::new(String::new());

    Effect::new(move |_| {
        document().set_title("tags test");
    });

    view! {
        <div class="mx-auto flex w-full max-w-xl flex-col gap-2 px-4 py-8">
            <TagInput id="tags" bind_value=tags />
            <div class="text-xs text-muted-foreground">
                {move || match vocabulary.status() {
                    VocabularyStatus::Empty | VocabularyStatus::Loading => "Loading tags...".to_string(),
                    VocabularyStatus::Ready => format!("{} known tags", vocabulary.len()),
                    VocabularyStatus::Failed => "Tags unavailable".to_string(),
                }}
            </div>
        </div>
    }
}
