//! The spoken turn loop and the I/O seams it runs against.
//!
//! A [`Session`] owns the game. Each user turn is
//! listen → normalize → classify → resolve → speak, and every failure along the way is a
//! [`TurnError`] that is spoken back and leaves the game untouched.

mod console;
mod opponent;

pub use console::{ConsoleListener, ConsoleSpeaker, ScriptListener};
pub use opponent::RandomOpponent;

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{ChessMove, Square};
use crate::narrate;
use crate::render::render_board;
use crate::resolve::{resolve, GameState, MoveRecord, ResolvedAction};
use crate::rules::{GameOutcome, RulesEngine};
use crate::speech::{classify, Normalizer};

/// Source of transcripts. `None` means nothing usable was heard.
pub trait Listener {
    fn listen(&mut self) -> Option<String>;

    /// True once no further input can arrive (end of script, closed stdin).
    fn is_closed(&self) -> bool {
        false
    }
}

/// Sink for everything said to the user.
pub trait Speaker {
    fn speak(&mut self, text: &str);

    /// Show a rendered board. Speech-only sinks ignore it.
    fn display(&mut self, _board: &str) {}
}

/// Picks the computer's reply from the legal moves.
pub trait Opponent {
    fn choose(&mut self, legal: &[ChessMove]) -> Option<ChessMove>;
}

/// A recoverable failure in one user turn. `Display` is the prompt spoken back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("I could not understand. Please try again.")]
    TranscriptionFailure,
    #[error("I could not understand. Please try again.")]
    ClassificationMiss { reason: String },
    #[error("That's not a legal move.")]
    IllegalMove { from: Square, to: Square },
    #[error("Couldn't extract move. Say like 'E2 to E4' or 'B1 to C3'.")]
    MalformedCoordinates { heard: Option<Square> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub think_time: (Duration, Duration),
    pub prompt_each_turn: bool,
    pub show_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            think_time: (Duration::ZERO, Duration::ZERO),
            prompt_each_turn: true,
            show_board: false,
        }
    }
}

impl From<&Config> for SessionConfig {
    fn from(config: &Config) -> Self {
        Self {
            think_time: config.game.think_time(),
            prompt_each_turn: config.speech.prompt_each_turn,
            show_board: config.display.show_board,
        }
    }
}

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    InputClosed,
    GameOver(GameOutcome),
    /// The opponent had nothing (legal) to play in a live position.
    OpponentResigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    End(SessionEnd),
}

pub struct Session<E, L, S, O> {
    state: GameState<E>,
    normalizer: Normalizer,
    listener: L,
    speaker: S,
    opponent: O,
    config: SessionConfig,
}

impl<E, L, S, O> Session<E, L, S, O>
where
    E: RulesEngine,
    L: Listener,
    S: Speaker,
    O: Opponent,
{
    pub fn new(state: GameState<E>, listener: L, speaker: S, opponent: O) -> Self {
        Self {
            state,
            normalizer: Normalizer::default(),
            listener,
            speaker,
            opponent,
            config: SessionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn state(&self) -> &GameState<E> {
        &self.state
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Play until the user quits, input runs out, or the game ends.
    pub fn run(&mut self) -> SessionEnd {
        self.speaker.speak(narrate::WELCOME);
        self.show_board(None);

        let end = loop {
            if let Some(outcome) = self.state.engine.outcome() {
                self.speaker.speak(narrate::describe_outcome(Some(outcome)));
                break SessionEnd::GameOver(outcome);
            }
            let flow = if self.state.is_user_turn() {
                self.user_turn()
            } else {
                self.opponent_turn()
            };
            if let Flow::End(end) = flow {
                break end;
            }
        };

        if matches!(end, SessionEnd::Quit | SessionEnd::InputClosed) {
            self.speaker.speak("Goodbye!");
        }
        info!(?end, "session finished");
        end
    }

    fn user_turn(&mut self) -> Flow {
        if self.config.prompt_each_turn {
            self.speaker.speak(narrate::PROMPT);
        }
        match self.listener.listen() {
            Some(heard) => self.handle_utterance(&heard),
            None if self.listener.is_closed() => Flow::End(SessionEnd::InputClosed),
            None => {
                self.report(TurnError::TranscriptionFailure);
                Flow::Continue
            }
        }
    }

    /// Interpret one transcript against the game and speak the result.
    pub fn handle_utterance(&mut self, heard: &str) -> Flow {
        let text = self.normalizer.normalize(heard);
        debug!(heard, normalized = %text, "utterance");
        if text.trim().is_empty() {
            self.report(TurnError::TranscriptionFailure);
            return Flow::Continue;
        }

        let intent = classify(&text);
        match resolve(&intent, &mut self.state) {
            ResolvedAction::MoveApplied(record) => self.announce(&record, false),
            ResolvedAction::IllegalMove { from, to } => {
                self.report(TurnError::IllegalMove { from, to })
            }
            ResolvedAction::MalformedCoordinates { heard } => {
                self.report(TurnError::MalformedCoordinates { heard })
            }
            ResolvedAction::Unrecognized { reason } => {
                self.report(TurnError::ClassificationMiss { reason })
            }
            ResolvedAction::QueryAnswer { text } => self.speaker.speak(&text),
            ResolvedAction::Help => self.speaker.speak(narrate::HELP),
            ResolvedAction::NewGame => {
                self.state.new_game();
                self.speaker.speak("Starting a new game.");
                self.show_board(None);
            }
            ResolvedAction::Quit => return Flow::End(SessionEnd::Quit),
        }
        Flow::Continue
    }

    fn opponent_turn(&mut self) -> Flow {
        self.speaker.speak("Now my move...");
        self.think();

        let legal = self.state.engine.legal_moves();
        let Some(mv) = self.opponent.choose(&legal) else {
            warn!("opponent returned no move");
            return Flow::End(SessionEnd::OpponentResigned);
        };
        match self.state.apply_opponent_move(&mv) {
            Ok(record) => {
                self.announce(&record, true);
                Flow::Continue
            }
            Err(err) => {
                warn!(%err, "opponent chose an illegal move");
                Flow::End(SessionEnd::OpponentResigned)
            }
        }
    }

    fn think(&mut self) {
        let (a, b) = self.config.think_time;
        let (min, max) = (a.min(b), a.max(b));
        if max.is_zero() {
            return;
        }
        let min_ms = u64::try_from(min.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        let ms = rand::thread_rng().gen_range(min_ms..=max_ms);
        thread::sleep(Duration::from_millis(ms));
    }

    fn announce(&mut self, record: &MoveRecord, by_opponent: bool) {
        self.show_board(Some(&record.mv));
        if by_opponent {
            self.speaker.speak(&format!("My move is {}", record.description));
        } else {
            self.speaker.speak(&record.description);
        }
        if record.is_check && !record.is_game_over() {
            self.speaker.speak("Check.");
        }
    }

    fn report(&mut self, err: TurnError) {
        warn!(?err, "turn failed");
        self.speaker.speak(&err.to_string());
    }

    fn show_board(&mut self, last: Option<&ChessMove>) {
        if self.config.show_board {
            let board = render_board(&self.state.engine, last);
            self.speaker.display(&board);
        }
    }
}
