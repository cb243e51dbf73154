use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logger;
use crate::models::{ApiAction, ApiEvent, ApiJob, ApiReply, ApiRequest, AppState, WordForm};
use crate::profiles::ProfileContext;
use crate::quiz::{QuizScreen, QuizSession};
use crate::words::WordCollection;

/// Whole-application state plus the sending half of the store-worker channel.
/// All mutation happens on the UI thread: key events come in through
/// [`App::on_key`], worker results through [`App::apply_reply`].
pub struct App {
    pub state: AppState,
    pub context: ProfileContext,
    pub words: WordCollection,
    pub quiz: QuizScreen,
    pub profile_index: usize,
    pub word_index: usize,
    pub name_input: String,
    pub add_form: WordForm,
    pub edit_form: WordForm,
    pub menu_word_count: Option<usize>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub pending_delete: Option<i64>,
    pub should_quit: bool,
    generation: u64,
    job_tx: Sender<ApiJob>,
}

impl App {
    pub fn new(job_tx: Sender<ApiJob>) -> Self {
        let app = Self {
            state: AppState::ProfileSelect,
            context: ProfileContext::new(),
            words: WordCollection::new(),
            quiz: QuizScreen::loading(),
            profile_index: 0,
            word_index: 0,
            name_input: String::new(),
            add_form: WordForm::new(),
            edit_form: WordForm::new(),
            menu_word_count: None,
            error: None,
            notice: None,
            pending_delete: None,
            should_quit: false,
            generation: 0,
            job_tx,
        };
        app.send(ApiRequest::FetchProfiles);
        app
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn send(&self, request: ApiRequest) {
        let job = ApiJob {
            generation: self.generation,
            request,
        };
        if self.job_tx.send(job).is_err() {
            logger::log("store worker is gone; dropping request");
        }
    }

    // Screen transitions. Each bump of `generation` invalidates every reply
    // still in flight for the screen being left.

    fn enter_profile_select(&mut self) {
        self.generation += 1;
        self.state = AppState::ProfileSelect;
        self.profile_index = 0;
        self.menu_word_count = None;
        self.words = WordCollection::new();
        self.quiz = QuizScreen::loading();
    }

    fn enter_menu(&mut self) {
        self.generation += 1;
        self.state = AppState::Menu;
        self.menu_word_count = None;
        self.quiz = QuizScreen::loading();
        if let Some(profile_id) = self.context.selected_id() {
            self.send(ApiRequest::FetchWords { profile_id });
        }
    }

    fn enter_word_list(&mut self) {
        self.generation += 1;
        self.state = AppState::WordList;
        self.word_index = 0;
        if let Some(profile_id) = self.context.selected_id() {
            self.send(ApiRequest::FetchWords { profile_id });
        }
    }

    fn enter_quiz(&mut self) {
        self.generation += 1;
        self.state = AppState::Quiz;
        self.quiz = QuizScreen::loading();
        if let Some(profile_id) = self.context.selected_id() {
            self.send(ApiRequest::FetchWords { profile_id });
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        // A blocking popup swallows the first key press.
        if self.error.take().is_some() {
            return;
        }
        if self.notice.take().is_some() {
            return;
        }
        match self.state {
            AppState::ProfileSelect => self.on_key_profile_select(key),
            AppState::ProfileDeleteConfirm => self.on_key_profile_delete_confirm(key),
            AppState::CreateProfile => self.on_key_create_profile(key),
            AppState::Menu => self.on_key_menu(key),
            AppState::LogoutConfirm => self.on_key_logout_confirm(key),
            AppState::WordList => self.on_key_word_list(key),
            AppState::WordDetail => self.on_key_word_detail(key),
            AppState::WordEdit => self.on_key_word_edit(key),
            AppState::WordDeleteConfirm => self.on_key_word_delete_confirm(key),
            AppState::AddWord => self.on_key_add_word(key),
            AppState::Quiz => self.on_key_quiz(key),
            AppState::QuizDeleteConfirm => self.on_key_quiz_delete_confirm(key),
        }
    }

    fn on_key_profile_select(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                if self.profile_index > 0 {
                    self.profile_index -= 1;
                }
            }
            KeyCode::Down => {
                if self.profile_index + 1 < self.context.len() {
                    self.profile_index += 1;
                }
            }
            KeyCode::Enter => {
                let id = self.context.profiles().get(self.profile_index).map(|p| p.id);
                if let Some(id) = id {
                    if self.context.select(id) {
                        self.enter_menu();
                    }
                }
            }
            KeyCode::Char('n') => {
                self.name_input.clear();
                self.state = AppState::CreateProfile;
            }
            KeyCode::Char('d') => {
                let id = self.context.profiles().get(self.profile_index).map(|p| p.id);
                if let Some(id) = id {
                    self.pending_delete = Some(id);
                    self.state = AppState::ProfileDeleteConfirm;
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn on_key_profile_delete_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => {
                if let Some(profile_id) = self.pending_delete {
                    self.send(ApiRequest::DeleteProfile { profile_id });
                }
                self.state = AppState::ProfileSelect;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_delete = None;
                self.state = AppState::ProfileSelect;
            }
            _ => {}
        }
    }

    fn on_key_create_profile(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.name_input.clear();
                self.state = AppState::ProfileSelect;
            }
            KeyCode::Enter => {
                let name = self.name_input.trim().to_string();
                if !name.is_empty() {
                    self.send(ApiRequest::CreateProfile { name });
                }
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) => self.name_input.push(c),
            _ => {}
        }
    }

    fn on_key_menu(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('w') => self.enter_word_list(),
            KeyCode::Char('t') => self.enter_quiz(),
            KeyCode::Char('l') | KeyCode::Esc => self.state = AppState::LogoutConfirm,
            _ => {}
        }
    }

    fn on_key_logout_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => {
                self.context.logout();
                self.enter_profile_select();
            }
            KeyCode::Char('n') | KeyCode::Esc => self.state = AppState::Menu,
            _ => {}
        }
    }

    fn on_key_word_list(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                if self.word_index > 0 {
                    self.word_index -= 1;
                }
            }
            KeyCode::Down => {
                if self.word_index + 1 < self.words.len() {
                    self.word_index += 1;
                }
            }
            KeyCode::Enter => {
                if self.words.get(self.word_index).is_some() {
                    self.state = AppState::WordDetail;
                }
            }
            KeyCode::Char('s') => self.words.toggle_sort(),
            KeyCode::Char('a') => {
                self.add_form.clear();
                self.state = AppState::AddWord;
            }
            KeyCode::Esc => self.enter_menu(),
            _ => {}
        }
    }

    fn on_key_word_detail(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') => {
                if let Some(word) = self.words.get(self.word_index) {
                    self.edit_form = WordForm::from_word(word);
                    self.state = AppState::WordEdit;
                }
            }
            KeyCode::Char('d') => {
                if let Some(word) = self.words.get(self.word_index) {
                    self.pending_delete = Some(word.id);
                    self.state = AppState::WordDeleteConfirm;
                }
            }
            KeyCode::Esc | KeyCode::Enter => self.state = AppState::WordList,
            _ => {}
        }
    }

    fn on_key_word_edit(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state = AppState::WordDetail,
            KeyCode::Tab | KeyCode::Down => self.edit_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.edit_form.focus_prev(),
            KeyCode::Enter => self.submit_edit(),
            KeyCode::Backspace => {
                self.edit_form.focused_field_mut().pop();
            }
            KeyCode::Char(c) => self.edit_form.focused_field_mut().push(c),
            _ => {}
        }
    }

    fn submit_edit(&mut self) {
        self.edit_form.submitted = true;
        if !self.edit_form.is_valid() {
            return;
        }
        if let Some(word) = self.words.get(self.word_index) {
            let request = ApiRequest::UpdateWord {
                word_id: word.id,
                patch: self.edit_form.to_patch(word.level),
            };
            self.send(request);
        }
    }

    fn on_key_word_delete_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => {
                if let Some(word_id) = self.pending_delete {
                    self.send(ApiRequest::DeleteWord { word_id });
                }
                self.state = AppState::WordList;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_delete = None;
                self.state = AppState::WordDetail;
            }
            _ => {}
        }
    }

    fn on_key_add_word(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.enter_word_list(),
            KeyCode::Tab | KeyCode::Down => self.add_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.add_form.focus_prev(),
            KeyCode::Enter => self.submit_add(),
            KeyCode::Backspace => {
                self.add_form.focused_field_mut().pop();
            }
            KeyCode::Char(c) => self.add_form.focused_field_mut().push(c),
            _ => {}
        }
    }

    fn submit_add(&mut self) {
        self.add_form.submitted = true;
        if !self.add_form.is_valid() {
            return;
        }
        if let Some(profile_id) = self.context.selected_id() {
            let word = self.add_form.to_new_word();
            self.send(ApiRequest::CreateWord { profile_id, word });
        }
    }

    fn on_key_quiz(&mut self, key: KeyEvent) {
        let (loading, has_error, finished, revealed) = match &self.quiz {
            QuizScreen::Loading { error } => (true, error.is_some(), false, false),
            QuizScreen::Ready(session) => (false, false, session.is_finished(), session.revealed()),
        };

        if loading {
            match key.code {
                KeyCode::Char('r') if has_error => self.retry_quiz_fetch(),
                KeyCode::Esc => self.enter_menu(),
                _ => {}
            }
            return;
        }

        if finished {
            match key.code {
                KeyCode::Enter | KeyCode::Char('m') | KeyCode::Esc => self.enter_menu(),
                KeyCode::Char('w') => self.enter_word_list(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Right => {
                if let QuizScreen::Ready(session) = &mut self.quiz {
                    if session.revealed() {
                        session.skip();
                    } else {
                        session.reveal();
                    }
                }
            }
            KeyCode::Enter => {
                if revealed {
                    self.mark_current_learned();
                } else if let QuizScreen::Ready(session) = &mut self.quiz {
                    session.reveal();
                }
            }
            KeyCode::Down | KeyCode::Char('n') => {
                if let QuizScreen::Ready(session) = &mut self.quiz {
                    session.skip();
                }
            }
            KeyCode::Char('d') => {
                let id = match &self.quiz {
                    QuizScreen::Ready(session) => session.current().map(|w| w.id),
                    QuizScreen::Loading { .. } => None,
                };
                if let Some(word_id) = id {
                    self.pending_delete = Some(word_id);
                    self.state = AppState::QuizDeleteConfirm;
                }
            }
            KeyCode::Esc => self.enter_menu(),
            _ => {}
        }
    }

    fn mark_current_learned(&mut self) {
        let update = match &mut self.quiz {
            QuizScreen::Ready(session) => session.mark_learned(),
            QuizScreen::Loading { .. } => None,
        };
        if let Some((word_id, level)) = update {
            self.send(ApiRequest::UpdateWord {
                word_id,
                patch: crate::models::WordPatch {
                    level: Some(level),
                    ..Default::default()
                },
            });
        }
    }

    fn retry_quiz_fetch(&mut self) {
        self.quiz = QuizScreen::loading();
        if let Some(profile_id) = self.context.selected_id() {
            self.send(ApiRequest::FetchWords { profile_id });
        }
    }

    fn on_key_quiz_delete_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => {
                if let Some(word_id) = self.pending_delete {
                    self.send(ApiRequest::DeleteWord { word_id });
                }
                self.state = AppState::Quiz;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_delete = None;
                self.state = AppState::Quiz;
            }
            _ => {}
        }
    }

    /// Fold a worker reply into the app. Replies issued under an older
    /// generation belong to a screen that no longer exists and are dropped.
    pub fn apply_reply(&mut self, reply: ApiReply) {
        if reply.generation != self.generation {
            logger::log("dropping stale store reply");
            return;
        }

        match reply.event {
            ApiEvent::ProfilesLoaded(profiles) => {
                self.context.set_profiles(profiles);
                self.clamp_profile_index();
            }
            ApiEvent::ProfileCreated(profile) => {
                let id = profile.id;
                self.context.add_profile(profile);
                self.context.select(id);
                self.name_input.clear();
                self.enter_menu();
            }
            ApiEvent::ProfileDeleted(profile_id) => {
                self.context.remove_profile(profile_id);
                self.pending_delete = None;
                self.clamp_profile_index();
            }
            ApiEvent::WordsLoaded(words) => match self.state {
                AppState::Menu | AppState::LogoutConfirm => {
                    self.menu_word_count = Some(words.len());
                }
                AppState::Quiz | AppState::QuizDeleteConfirm => {
                    if let QuizScreen::Loading { .. } = self.quiz {
                        // An empty fetch stays in the loading view; there is
                        // nothing to quiz.
                        if !words.is_empty() {
                            let session = QuizSession::new(&words, &mut rand::thread_rng());
                            self.quiz = QuizScreen::Ready(session);
                        }
                    }
                }
                _ => {
                    self.words.set_words(words);
                    self.clamp_word_index();
                }
            },
            ApiEvent::WordCreated(word) => {
                self.words.apply_created(word);
                self.word_index = self.words.len().saturating_sub(1);
                self.add_form.clear();
                self.notice = Some("Word added.".to_string());
                self.state = AppState::WordList;
            }
            ApiEvent::WordUpdated(word) => {
                if let QuizScreen::Ready(session) = &mut self.quiz {
                    session.apply_updated(&word);
                }
                self.words.apply_updated(word);
                if self.state == AppState::WordEdit {
                    self.state = AppState::WordList;
                }
            }
            ApiEvent::WordDeleted(word_id) => {
                if let QuizScreen::Ready(session) = &mut self.quiz {
                    session.apply_removed(word_id);
                }
                self.words.apply_removed(word_id);
                self.pending_delete = None;
                self.clamp_word_index();
            }
            ApiEvent::Failed { action, error } => {
                logger::log(&format!("{} failed: {}", action.describe(), error));
                if matches!(action, ApiAction::DeleteWord | ApiAction::DeleteProfile) {
                    self.pending_delete = None;
                }
                let quiz_fetch = action == ApiAction::FetchWords
                    && matches!(self.state, AppState::Quiz | AppState::QuizDeleteConfirm)
                    && matches!(self.quiz, QuizScreen::Loading { .. });
                if quiz_fetch {
                    self.quiz = QuizScreen::Loading { error: Some(error) };
                } else {
                    self.error = Some(format!("{} failed: {}", action.describe(), error));
                }
            }
        }
    }

    fn clamp_profile_index(&mut self) {
        if self.profile_index >= self.context.len() {
            self.profile_index = self.context.len().saturating_sub(1);
        }
    }

    fn clamp_word_index(&mut self) {
        if self.word_index >= self.words.len() {
            self.word_index = self.words.len().saturating_sub(1);
        }
    }
}
