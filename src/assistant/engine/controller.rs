//! Conversation controller: per-session orchestration.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{Mutex, broadcast, mpsc, watch};
use tracing::{debug, info};

use crate::assistant::compose::composer::ResponseComposer;
use crate::assistant::core::config::{AssistantConfig, ComposeConfig};
use crate::assistant::core::errors::{AssistantError, AssistantResult};
use crate::assistant::core::ids::SessionId;
use crate::assistant::engine::speech::SpeechSink;
use crate::assistant::knowledge::base::KnowledgeBase;
use crate::assistant::matching::normalize::normalize_query;
use crate::assistant::session::context::ContextLog;
use crate::assistant::session::transcript::{ConversationTurn, Transcript};

/// Logical state of a conversation session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ControllerState {
    /// Awaiting user input.
    #[default]
    Idle,
    /// A simulated thinking delay is in flight.
    Composing,
}

/// Commands processed by the session worker, strictly in arrival order.
enum Command {
    Say {
        /// Trimmed text as submitted, shown in the transcript.
        raw: String,
        /// Normalized text used for matching.
        query: String,
    },
    Clear,
}

struct SessionState {
    transcript: Transcript,
    context: ContextLog,
}

/// Orchestrates one conversation session end to end.
///
/// Submissions travel a single FIFO queue into one worker task that owns
/// the transcript and context log, so a message submitted while a previous
/// answer is still composing queues behind it and appends never interleave.
/// Closing the controller (or dropping it) cancels an in-flight thinking
/// delay deterministically; nothing appends after close.
pub struct ConversationController {
    session_id: SessionId,
    commands: mpsc::UnboundedSender<Command>,
    shutdown: watch::Sender<bool>,
    events: broadcast::Sender<ConversationTurn>,
    state_rx: watch::Receiver<ControllerState>,
    session: Arc<Mutex<SessionState>>,
}

impl ConversationController {
    /// Spawn a controller and its worker task for one session.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the configuration or knowledge base is invalid.
    pub fn spawn(
        knowledge: Arc<KnowledgeBase>,
        config: AssistantConfig,
        speech: Option<Arc<dyn SpeechSink>>,
    ) -> AssistantResult<Self> {
        config.validate()?;
        knowledge.validate()?;

        let session_id = SessionId::new();
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (shutdown, shutdown_rx) = watch::channel(false);
        let (events, _) = broadcast::channel(config.channels.event_capacity);
        let (state_tx, state_rx) = watch::channel(ControllerState::Idle);
        let session = Arc::new(Mutex::new(SessionState {
            transcript: Transcript::new(knowledge.greeting.clone()),
            context: ContextLog::new(),
        }));

        let worker = Worker {
            session_id,
            composer: ResponseComposer::new(knowledge),
            compose: config.compose,
            session: Arc::clone(&session),
            events: events.clone(),
            state: state_tx,
            speech,
        };
        tokio::spawn(worker.run(command_rx, shutdown_rx));

        info!("Started conversation session {session_id}");

        Ok(Self {
            session_id,
            commands,
            shutdown,
            events,
            state_rx,
            session,
        })
    }

    /// Session identifier.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Submit one user message.
    ///
    /// Returns `Ok(false)` when the input normalizes to empty (a no-op by
    /// contract) and `Ok(true)` when the message was queued.
    ///
    /// # Errors
    /// Returns [`AssistantError::SessionClosed`] after [`Self::close`].
    pub fn submit(&self, raw: &str) -> AssistantResult<bool> {
        let query = normalize_query(raw);
        if query.is_empty() {
            debug!("Ignoring empty submission");
            return Ok(false);
        }

        self.commands
            .send(Command::Say {
                raw: raw.trim().to_string(),
                query,
            })
            .map_err(|_| AssistantError::SessionClosed)?;
        Ok(true)
    }

    /// Reset the transcript to the seeded greeting and empty the context
    /// log. Travels the same FIFO queue as submissions, so it cannot
    /// interleave with an in-flight answer.
    ///
    /// # Errors
    /// Returns [`AssistantError::SessionClosed`] after [`Self::close`].
    pub fn clear(&self) -> AssistantResult<()> {
        self.commands
            .send(Command::Clear)
            .map_err(|_| AssistantError::SessionClosed)
    }

    /// Snapshot of the transcript in insertion order.
    pub async fn transcript(&self) -> Vec<ConversationTurn> {
        self.session.lock().await.transcript.turns().to_vec()
    }

    /// Current logical state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        *self.state_rx.borrow()
    }

    /// Watch state transitions (Idle, Composing).
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<ControllerState> {
        self.state_rx.clone()
    }

    /// Subscribe to turns as they are appended (user and assistant).
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationTurn> {
        self.events.subscribe()
    }

    /// Close the session, cancelling any in-flight thinking delay. Pending
    /// queued submissions are discarded; later calls to
    /// [`Self::submit`]/[`Self::clear`] report the session as closed.
    pub fn close(&self) {
        let _ = self.shutdown.send(true);
    }
}

impl Drop for ConversationController {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

struct Worker {
    session_id: SessionId,
    composer: ResponseComposer,
    compose: ComposeConfig,
    session: Arc<Mutex<SessionState>>,
    events: broadcast::Sender<ConversationTurn>,
    state: watch::Sender<ControllerState>,
    speech: Option<Arc<dyn SpeechSink>>,
}

impl Worker {
    async fn run(
        self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            let command = tokio::select! {
                _ = shutdown.changed() => break,
                command = commands.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                Command::Say { raw, query } => {
                    if !self.handle_say(raw, query, &mut shutdown).await {
                        break;
                    }
                }
                Command::Clear => self.handle_clear().await,
            }
        }

        let _ = self.state.send(ControllerState::Idle);
        debug!("Conversation session {} stopped", self.session_id);
    }

    /// Process one submission. Returns `false` when shutdown interrupted
    /// the thinking delay: the user turn stays in the transcript, the
    /// pending answer is discarded.
    async fn handle_say(
        &self,
        raw: String,
        query: String,
        shutdown: &mut watch::Receiver<bool>,
    ) -> bool {
        let user_turn = ConversationTurn::user(raw);
        {
            let mut session = self.session.lock().await;
            session.transcript.push(user_turn.clone());
        }
        let _ = self.events.send(user_turn);
        let _ = self.state.send(ControllerState::Composing);

        tokio::select! {
            _ = shutdown.changed() => return false,
            () = tokio::time::sleep(self.thinking_delay()) => {}
        }

        let assistant_turn = {
            let mut session = self.session.lock().await;
            let text = self.composer.answer(&mut session.context, &query);
            let turn = ConversationTurn::assistant(text);
            session.transcript.push(turn.clone());
            turn
        };

        if let Some(sink) = &self.speech
            && let Err(err) = sink.speak(&assistant_turn.text)
        {
            debug!("Speech sink unavailable: {err}");
        }

        let _ = self.events.send(assistant_turn);
        let _ = self.state.send(ControllerState::Idle);
        true
    }

    async fn handle_clear(&self) {
        let mut session = self.session.lock().await;
        session.transcript.reset();
        session.context.clear();
        info!("Cleared conversation session {}", self.session_id);
    }

    /// Bounded random delay standing in for thinking latency.
    fn thinking_delay(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.compose.min_delay_ms..=self.compose.max_delay_ms);
        Duration::from_millis(ms)
    }
}
