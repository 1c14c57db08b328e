use crate::config::UiConfig;
use crate::mvi::Reducer;
use crate::profile::{ProfileCard, IDLE_DESCRIPTION, IDLE_TITLE};
use crate::search::{FailureKind, LookupOutcome, SearchIntent, SearchReducer, SearchState};
use tokio::sync::mpsc;
use tracing::warn;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Lookup { generation: u64, login: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Search state (MVI pattern).
    search: SearchState,
    /// Card for the current profile, rebuilt whenever `search` changes.
    card: Option<ProfileCard>,
    command_sender: Option<UiCommandSender>,
    separator: char,
    spinner_frame: usize,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            search: SearchState::default(),
            card: None,
            command_sender: None,
            separator: config.thousands_separator,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn card(&self) -> Option<&ProfileCard> {
        self.card.as_ref()
    }

    pub fn page_title(&self) -> String {
        match &self.card {
            Some(card) => card.page_title(),
            None => IDLE_TITLE.to_string(),
        }
    }

    pub fn description(&self) -> String {
        match &self.card {
            Some(card) => card.description(),
            None => IDLE_DESCRIPTION.to_string(),
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    pub fn on_tick(&mut self) {
        if self.search.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut text = self.search.query().to_string();
        text.push(ch);
        self.dispatch_search(SearchIntent::SetQuery { text });
    }

    pub fn pop_char(&mut self) {
        let mut text = self.search.query().to_string();
        if text.pop().is_some() {
            self.dispatch_search(SearchIntent::SetQuery { text });
        }
    }

    pub fn clear_query(&mut self) {
        self.dispatch_search(SearchIntent::SetQuery {
            text: String::new(),
        });
    }

    /// Submits the form. Returns true when a lookup was started.
    ///
    /// The trigger is disabled while a lookup is in flight or the query
    /// is blank; the reducer rejects both cases as well.
    pub fn submit(&mut self) -> bool {
        if !self.search.can_submit() {
            return false;
        }
        self.dispatch_search(SearchIntent::Submit);
        let generation = self.search.generation();
        self.spinner_frame = 0;

        let login = self.search.pending_login().unwrap_or_default().to_string();
        if !self.send_command(UiCommand::Lookup { generation, login }) {
            // Nobody will ever settle this lookup; do it here.
            self.on_lookup_settled(generation, LookupOutcome::Failed(FailureKind::Network));
        }
        true
    }

    pub fn on_lookup_settled(&mut self, generation: u64, outcome: LookupOutcome) {
        self.dispatch_search(SearchIntent::Settled {
            generation,
            outcome,
        });
    }

    /// Dispatch an intent to the search reducer.
    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
        self.card = self
            .search
            .profile()
            .map(|profile| ProfileCard::new(profile, self.separator));
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            warn!("no lookup worker attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to queue lookup");
                false
            }
        }
    }
}
