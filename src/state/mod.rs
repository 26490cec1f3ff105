use crate::api::ApiClient;
use crate::vocabulary::Vocabulary;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: ApiClient,

    /// Tag list shared by every tag input on the page. Loaded once at startup.
    pub vocabulary: Vocabulary,
}

impl AppState {
    pub fn new() -> Self {
        let api_client = ApiClient::from_env();
        let vocabulary = Vocabulary::new();
        vocabulary.load(api_client.clone());

        Self {
            api_client,
            vocabulary,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
