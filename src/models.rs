use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: i64,
    pub profile_id: i64,
    pub term: String,
    pub definition: String,
    pub example_sentence: String,
    pub meaning_of_example_sentence: String,
    pub level: u32,
}

/// Body of a create-word request: a `Word` minus the server-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    pub term: String,
    pub definition: String,
    pub example_sentence: String,
    pub meaning_of_example_sentence: String,
    pub level: u32,
}

/// Partial update body; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_of_example_sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    ProfileSelect,
    ProfileDeleteConfirm,
    CreateProfile,
    Menu,
    LogoutConfirm,
    WordList,
    WordDetail,
    WordEdit,
    WordDeleteConfirm,
    AddWord,
    Quiz,
    QuizDeleteConfirm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchProfiles,
    CreateProfile { name: String },
    DeleteProfile { profile_id: i64 },
    FetchWords { profile_id: i64 },
    CreateWord { profile_id: i64, word: NewWord },
    UpdateWord { word_id: i64, patch: WordPatch },
    DeleteWord { word_id: i64 },
}

impl ApiRequest {
    pub fn action(&self) -> ApiAction {
        match self {
            ApiRequest::FetchProfiles => ApiAction::FetchProfiles,
            ApiRequest::CreateProfile { .. } => ApiAction::CreateProfile,
            ApiRequest::DeleteProfile { .. } => ApiAction::DeleteProfile,
            ApiRequest::FetchWords { .. } => ApiAction::FetchWords,
            ApiRequest::CreateWord { .. } => ApiAction::CreateWord,
            ApiRequest::UpdateWord { .. } => ApiAction::UpdateWord,
            ApiRequest::DeleteWord { .. } => ApiAction::DeleteWord,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    FetchProfiles,
    CreateProfile,
    DeleteProfile,
    FetchWords,
    CreateWord,
    UpdateWord,
    DeleteWord,
}

impl ApiAction {
    pub fn describe(self) -> &'static str {
        match self {
            ApiAction::FetchProfiles => "Loading profiles",
            ApiAction::CreateProfile => "Creating profile",
            ApiAction::DeleteProfile => "Deleting profile",
            ApiAction::FetchWords => "Loading words",
            ApiAction::CreateWord => "Adding word",
            ApiAction::UpdateWord => "Updating word",
            ApiAction::DeleteWord => "Deleting word",
        }
    }
}

/// A store request tagged with the app generation that issued it.
#[derive(Debug)]
pub struct ApiJob {
    pub generation: u64,
    pub request: ApiRequest,
}

/// Worker reply; carries the generation of the job it answers so the app can
/// drop results whose originating screen is gone.
#[derive(Debug)]
pub struct ApiReply {
    pub generation: u64,
    pub event: ApiEvent,
}

#[derive(Debug)]
pub enum ApiEvent {
    ProfilesLoaded(Vec<Profile>),
    ProfileCreated(Profile),
    ProfileDeleted(i64),
    WordsLoaded(Vec<Word>),
    WordCreated(Word),
    WordUpdated(Word),
    WordDeleted(i64),
    Failed { action: ApiAction, error: String },
}

/// Input state for the add-word and edit-word forms: four text fields plus a
/// focus index and a flag marking that a submit was attempted (used to
/// highlight fields that are still empty).
#[derive(Debug, Clone, Default)]
pub struct WordForm {
    pub fields: [String; 4],
    pub focus: usize,
    pub submitted: bool,
}

impl WordForm {
    pub const LABELS: [&'static str; 4] =
        ["Term", "Definition", "Example sentence", "Example translation"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_word(word: &Word) -> Self {
        Self {
            fields: [
                word.term.clone(),
                word.definition.clone(),
                word.example_sentence.clone(),
                word.meaning_of_example_sentence.clone(),
            ],
            focus: 0,
            submitted: false,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut String {
        &mut self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| !f.trim().is_empty())
    }

    /// True when a submit attempt already happened and this field is still
    /// empty; the form highlights it.
    pub fn missing(&self, index: usize) -> bool {
        self.submitted && self.fields[index].trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_word(&self) -> NewWord {
        NewWord {
            term: self.fields[0].trim().to_string(),
            definition: self.fields[1].trim().to_string(),
            example_sentence: self.fields[2].trim().to_string(),
            meaning_of_example_sentence: self.fields[3].trim().to_string(),
            level: 0,
        }
    }

    pub fn to_patch(&self, level: u32) -> WordPatch {
        WordPatch {
            term: Some(self.fields[0].trim().to_string()),
            definition: Some(self.fields[1].trim().to_string()),
            example_sentence: Some(self.fields[2].trim().to_string()),
            meaning_of_example_sentence: Some(self.fields[3].trim().to_string()),
            level: Some(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_word(id: i64, term: &str, level: u32) -> Word {
        Word {
            id,
            profile_id: 1,
            term: term.to_string(),
            definition: format!("{} (definition)", term),
            example_sentence: format!("Example with {}.", term),
            meaning_of_example_sentence: format!("Translation of {}.", term),
            level,
        }
    }

    #[test]
    fn word_uses_camel_case_on_the_wire() {
        let word = sample_word(3, "run", 0);
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["profileId"], 1);
        assert_eq!(json["exampleSentence"], "Example with run.");
        assert_eq!(json["meaningOfExampleSentence"], "Translation of run.");
        assert!(json.get("profile_id").is_none());
    }

    #[test]
    fn word_decodes_from_camel_case() {
        let json = r#"{
            "id": 7,
            "profileId": 2,
            "term": "run",
            "definition": "달리다",
            "exampleSentence": "I run every day.",
            "meaningOfExampleSentence": "나는 매일 달린다.",
            "level": 0
        }"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.id, 7);
        assert_eq!(word.profile_id, 2);
        assert_eq!(word.definition, "달리다");
        assert_eq!(word.level, 0);
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = WordPatch {
            level: Some(3),
            ..WordPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "level": 3 }));
    }

    #[test]
    fn form_validity_requires_all_fields() {
        let mut form = WordForm::new();
        assert!(!form.is_valid());
        form.fields = [
            "run".into(),
            "달리다".into(),
            "I run every day.".into(),
            "나는 매일 달린다.".into(),
        ];
        assert!(form.is_valid());
        form.fields[2] = "   ".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn form_marks_missing_fields_only_after_submit() {
        let mut form = WordForm::new();
        assert!(!form.missing(0));
        form.submitted = true;
        assert!(form.missing(0));
        form.fields[0] = "apple".into();
        assert!(!form.missing(0));
    }

    #[test]
    fn form_focus_wraps_both_ways() {
        let mut form = WordForm::new();
        form.focus_prev();
        assert_eq!(form.focus, 3);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn new_word_from_form_trims_and_starts_at_level_zero() {
        let mut form = WordForm::new();
        form.fields = [
            "  run ".into(),
            "달리다".into(),
            "I run every day. ".into(),
            "나는 매일 달린다.".into(),
        ];
        let word = form.to_new_word();
        assert_eq!(word.term, "run");
        assert_eq!(word.example_sentence, "I run every day.");
        assert_eq!(word.level, 0);
    }
}
