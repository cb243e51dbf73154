pub mod api;
pub mod app;
pub mod logger;
pub mod models;
pub mod profiles;
pub mod quiz;
pub mod ui;
pub mod utils;
pub mod words;


// Re-exports for convenience
pub use api::{spawn_store_worker, StoreClient, StoreError, DEFAULT_BASE_URL};
pub use app::App;
pub use models::{
    ApiAction, ApiEvent, ApiJob, ApiReply, ApiRequest, AppState, NewWord, Profile, Word, WordForm,
    WordPatch,
};
pub use profiles::ProfileContext;
pub use quiz::{QuizScreen, QuizSession};
pub use words::WordCollection;
