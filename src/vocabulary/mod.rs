use crate::api::{ApiClient, ApiResult};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VocabularyStatus {
    /// No fetch started yet.
    Empty,
    Loading,
    Ready,
    /// The fetch failed; the list stays empty for the rest of the page's life.
    Failed,
}

/// Known tags, filled once from the server.
///
/// Readers always see the latest snapshot, which is empty until the fetch completes.
#[derive(Clone, Copy)]
pub(crate) struct Vocabulary {
    tags: RwSignal<Vec<String>>,
    status: RwSignal<VocabularyStatus>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            tags: RwSignal::new(vec![]),
            status: RwSignal::new(VocabularyStatus::Empty),
        }
    }

    pub fn status(&self) -> VocabularyStatus {
        self.status.get()
    }

    pub fn len(&self) -> usize {
        self.tags.with(Vec::len)
    }

    /// Run `f` over the current snapshot without subscribing to changes.
    pub fn with_tags<R>(&self, f: impl FnOnce(&[String]) -> R) -> R {
        self.tags.with_untracked(|tags| f(tags))
    }

    /// Start the one-time fetch. Later calls are ignored.
    pub fn load(&self, api_client: ApiClient) {
        if self.status.get_untracked() != VocabularyStatus::Empty {
            return;
        }
        self.status.set(VocabularyStatus::Loading);

        let this = *self;
        spawn_local(async move {
            this.finish(api_client.get_tags().await);
        });
    }

    /// Settle a fetch. A failure leaves the list empty; nothing retries it.
    pub(crate) fn finish(&self, result: ApiResult<Vec<String>>) {
        match result {
            Ok(tags) => {
                let tags = unique_in_order(tags);
                log!("loaded {} tags", tags.len());
                self.tags.set(tags);
                self.status.set(VocabularyStatus::Ready);
            }
            Err(e) => {
                warn!("failed to load tags ({:?}): {e}", e.kind);
                self.status.set(VocabularyStatus::Failed);
            }
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop repeated tags, keeping the first occurrence.
pub(crate) fn unique_in_order(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind};

    #[test]
    fn test_unique_in_order() {
        let tags = ["go", "rust", "go", "notes", "rust"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(unique_in_order(tags), vec!["go", "rust", "notes"]);
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finish_ok_keeps_unique_tags_in_order() {
        let vocabulary = Vocabulary::new();
        vocabulary.finish(Ok(tags(&["rust", "go", "rust", "wasm"])));

        assert_eq!(vocabulary.status(), VocabularyStatus::Ready);
        assert_eq!(vocabulary.len(), 3);
        vocabulary.with_tags(|t| assert_eq!(t, tags(&["rust", "go", "wasm"]).as_slice()));
    }

    #[test]
    fn test_finish_err_leaves_list_empty() {
        let vocabulary = Vocabulary::new();
        vocabulary.finish(Err(ApiError {
            kind: ApiErrorKind::Network,
            message: "connection refused".to_string(),
        }));

        assert_eq!(vocabulary.status(), VocabularyStatus::Failed);
        assert_eq!(vocabulary.len(), 0);
    }

    #[test]
    fn test_load_only_starts_once() {
        let vocabulary = Vocabulary::new();
        vocabulary.status.set(VocabularyStatus::Loading);
        vocabulary.load(ApiClient::new("http://localhost:9999".to_string()));
        assert_eq!(vocabulary.status(), VocabularyStatus::Loading);

        vocabulary.finish(Ok(tags(&["go"])));
        vocabulary.load(ApiClient::new("http://localhost:9999".to_string()));
        assert_eq!(vocabulary.status(), VocabularyStatus::Ready);
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn test_unique_in_order_is_case_sensitive() {
        let tags = vec!["Go".to_string(), "go".to_string()];
        assert_eq!(unique_in_order(tags), vec!["Go", "go"]);
    }
}
