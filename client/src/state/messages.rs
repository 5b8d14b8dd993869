//! Message-board state for the community chat page.
//!
//! DESIGN
//! ======
//! All transitions are plain methods on `MessageBoardState` so the page only
//! wires them to signals and async requests. The list is append-only from the
//! client's side: `finish_load` replaces it wholesale, `finish_submit` pushes
//! one record, and nothing else touches it.
//!
//! ERROR HANDLING
//! ==============
//! Load failures and form failures are tracked separately. A load failure
//! replaces the list for the lifetime of the view; validation and submit
//! failures are shown above the form and cleared on the next attempt.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::api::RequestFailure;
use crate::net::types::{Message, NewMessage};

/// User-visible failures of the message board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A field was empty after trimming; no request was made.
    #[error("Please enter both your name and a message")]
    Validation,
    /// The initial list fetch failed.
    #[error("Failed to load messages: {0}")]
    Load(RequestFailure),
    /// Posting a new message failed.
    #[error("Failed to send message: {0}")]
    Submit(RequestFailure),
}

/// Which of the four mutually exclusive list presentations to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardView {
    Loading,
    Error,
    ReadyEmpty,
    ReadyWithMessages,
}

/// Outcome of asking to start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; send this trimmed payload.
    Send(NewMessage),
    /// A submission is already outstanding; nothing happened.
    InFlight,
    /// A field was blank; `form_error` now holds `BoardError::Validation`.
    Invalid,
}

/// Per-view state for the message board.
#[derive(Clone, Debug)]
pub struct MessageBoardState {
    pub messages: Vec<Message>,
    pub sender: String,
    pub body: String,
    pub sending: bool,
    pub loading: bool,
    pub load_error: Option<BoardError>,
    pub form_error: Option<BoardError>,
}

impl Default for MessageBoardState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            sender: String::new(),
            body: String::new(),
            sending: false,
            loading: true,
            load_error: None,
            form_error: None,
        }
    }
}

impl MessageBoardState {
    /// Which list presentation the current state selects.
    #[must_use]
    pub fn view(&self) -> BoardView {
        if self.loading {
            BoardView::Loading
        } else if self.load_error.is_some() {
            BoardView::Error
        } else if self.messages.is_empty() {
            BoardView::ReadyEmpty
        } else {
            BoardView::ReadyWithMessages
        }
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.sending && !self.sender.trim().is_empty() && !self.body.trim().is_empty()
    }

    /// Apply the result of the mount-time list fetch.
    pub fn finish_load(&mut self, result: Result<Vec<Message>, RequestFailure>) {
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.load_error = None;
            }
            Err(failure) => {
                self.messages.clear();
                self.load_error = Some(BoardError::Load(failure));
            }
        }
        self.loading = false;
    }

    /// Validate the form and, if allowed, mark a submission as in flight.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.sending {
            return SubmitAttempt::InFlight;
        }
        let sender = self.sender.trim();
        let message = self.body.trim();
        if sender.is_empty() || message.is_empty() {
            self.form_error = Some(BoardError::Validation);
            return SubmitAttempt::Invalid;
        }
        let payload = NewMessage { sender: sender.to_owned(), message: message.to_owned() };
        self.sending = true;
        self.form_error = None;
        SubmitAttempt::Send(payload)
    }

    /// Apply the result of an in-flight submission.
    ///
    /// The sender field survives either way; the body is cleared only on
    /// success so a failed post can be retried as typed.
    pub fn finish_submit(&mut self, result: Result<Message, RequestFailure>) {
        match result {
            Ok(message) => {
                self.messages.push(message);
                self.body.clear();
            }
            Err(failure) => self.form_error = Some(BoardError::Submit(failure)),
        }
        self.sending = false;
    }

    /// Rendering keys in display order.
    #[must_use]
    pub fn rendered_ids(&self) -> Vec<i64> {
        self.messages.iter().map(|m| m.id).collect()
    }
}
