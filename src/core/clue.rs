//! Clue representation and reveal state
//!
//! A clue moves through three display states and never goes back:
//! - `None`: the placeholder glyph is shown
//! - `Question`: the question text is shown
//! - `Answer`: the answer text is shown (terminal)

use std::fmt;

/// Placeholder shown on a clue that has not been revealed yet
pub const PLACEHOLDER: &str = "?";

/// What a clue cell is currently showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Showing {
    #[default]
    None,
    Question,
    Answer,
}

impl Showing {
    /// The state a reveal moves to, or `None` if this state is terminal
    #[inline]
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::None => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl fmt::Display for Showing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Question => "question",
            Self::Answer => "answer",
        };
        f.write_str(name)
    }
}

/// A single question/answer pair with its reveal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
}

impl Clue {
    /// Create a clue in the unrevealed state
    ///
    /// # Examples
    /// ```
    /// use jeopardy::core::{Clue, Showing};
    ///
    /// let clue = Clue::new("2+2", "4");
    /// assert_eq!(clue.showing(), Showing::None);
    /// assert_eq!(clue.display_text(), "?");
    /// ```
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::None,
        }
    }

    #[inline]
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn showing(&self) -> Showing {
        self.showing
    }

    /// Advance the reveal state by one step
    ///
    /// Returns the new state, or `None` when the clue already shows its answer.
    ///
    /// # Examples
    /// ```
    /// use jeopardy::core::{Clue, Showing};
    ///
    /// let mut clue = Clue::new("Hamlet author", "Shakespeare");
    /// assert_eq!(clue.reveal(), Some(Showing::Question));
    /// assert_eq!(clue.reveal(), Some(Showing::Answer));
    /// assert_eq!(clue.reveal(), None);
    /// assert_eq!(clue.display_text(), "Shakespeare");
    /// ```
    pub fn reveal(&mut self) -> Option<Showing> {
        let next = self.showing.next()?;
        self.showing = next;
        Some(next)
    }

    /// Text the cell should display for the current state
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self.showing {
            Showing::None => PLACEHOLDER,
            Showing::Question => &self.question,
            Showing::Answer => &self.answer,
        }
    }
}
