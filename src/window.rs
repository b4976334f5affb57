//! Bounded double-ended token window.
//!
//! A [`Window`] holds at most `capacity` tokens (the Markov chain order).
//! Pushing at one end evicts from the other once the window is full, so
//! rolling `push_back` across a token stream yields every order-N context
//! in turn.

use std::collections::{vec_deque, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::WindowError;

#[derive(Debug, Clone, Copy)]
enum End {
    Front,
    Back,
}

/// Sliding window of string tokens keyed by content.
///
/// Equality and hashing go through [`Window::structural_hash`] only, so two
/// windows are equal exactly when their hashes are. Capacity takes no part in
/// either. Use [`Window::elements_equal`] where a collision would matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct Window {
    capacity: usize,
    tokens: VecDeque<String>,
}

#[derive(Deserialize)]
struct RawWindow {
    capacity: usize,
    tokens: Vec<String>,
}

impl TryFrom<RawWindow> for Window {
    type Error = WindowError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        let mut window = Self::try_new(raw.capacity)?;
        if raw.tokens.len() > raw.capacity {
            return Err(WindowError::Overfull {
                len: raw.tokens.len(),
                capacity: raw.capacity,
            });
        }
        window.tokens.extend(raw.tokens);
        Ok(window)
    }
}

impl Window {
    /// Create an empty window.
    ///
    /// Capacity 0 is accepted: such a window empties itself before every
    /// insertion and so always holds just the latest token. Use
    /// [`Window::try_new`] to reject it.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tokens: VecDeque::with_capacity(capacity.min(4096)),
        }
    }

    /// Create an empty window, failing on a capacity of 0.
    pub fn try_new(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::InvalidCapacity { capacity });
        }
        Ok(Self::new(capacity))
    }

    /// Build a full window from `items`; the number of items becomes the capacity.
    pub fn from_seed<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let mut window = Self::new(items.len());
        for item in items {
            window.push_back(item);
        }
        window
    }

    /// Insert at the front, evicting from the back while full.
    /// Returns the token evicted last, if any.
    pub fn push_front(&mut self, token: impl Into<String>) -> Option<String> {
        let evicted = self.make_room(End::Back);
        self.tokens.push_front(token.into());
        evicted
    }

    /// Insert at the back, evicting from the front while full.
    /// Returns the token evicted last, if any.
    pub fn push_back(&mut self, token: impl Into<String>) -> Option<String> {
        let evicted = self.make_room(End::Front);
        self.tokens.push_back(token.into());
        evicted
    }

    fn make_room(&mut self, from: End) -> Option<String> {
        let mut evicted = None;
        while self.tokens.len() >= self.capacity {
            let dropped = match from {
                End::Front => self.tokens.pop_front(),
                End::Back => self.tokens.pop_back(),
            };
            let Some(dropped) = dropped else {
                break;
            };
            trace!(token = %dropped, end = ?from, capacity = self.capacity, "evicted token");
            evicted = Some(dropped);
        }
        evicted
    }

    /// Configured order. Never changed by pushes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tokens.len() >= self.capacity
    }

    #[must_use]
    pub fn front(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    #[must_use]
    pub fn back(&self) -> Option<&str> {
        self.tokens.back().map(String::as_str)
    }

    /// Tokens front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Hash of the token sequence, recomputed on every call.
    ///
    /// Seeded with 1; each token folds in as `h + 31 * h + token_hash(token)`
    /// in wrapping `i32` arithmetic.
    #[must_use]
    pub fn structural_hash(&self) -> i32 {
        self.tokens.iter().fold(1i32, |h, token| {
            h.wrapping_add(h.wrapping_mul(31))
                .wrapping_add(token_hash(token))
        })
    }

    /// Hash comparison. Distinct sequences can collide, e.g. `["Aa"]` and `["BB"]`.
    #[must_use]
    pub fn hashes_equal(&self, other: &Window) -> bool {
        self.structural_hash() == other.structural_hash()
    }

    /// Token-by-token comparison, ignoring capacity.
    #[must_use]
    pub fn elements_equal(&self, other: &Window) -> bool {
        self.tokens == other.tokens
    }
}

/// Polynomial hash over the UTF-16 code units of `token`.
///
/// The empty string hashes to 0, which is also how a missing token counts.
#[must_use]
pub fn token_hash(token: &str) -> i32 {
    token
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        self.hashes_equal(other)
    }
}

impl Eq for Window {}

impl Hash for Window {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash().hash(state);
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .tokens
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<&str>>()
            .join(" ");
        f.write_str(&joined)
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a String;
    type IntoIter = vec_deque::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
