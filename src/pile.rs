//! The pile trait shared by every card collection, and the unordered pile.

use core::fmt;
use std::collections::HashMap;

use rand::Rng;

use crate::card::{CardId, PlayingCard};
use crate::error::PileError;

/// A collection of cards with transfer and flip operations.
///
/// Membership is tracked by [`CardId`], so two cards showing the same face
/// coexist in any pile; each card belongs to exactly one pile at a time and
/// moves between piles by value through [`take`](Pile::take),
/// [`merge_from`](Pile::merge_from), and
/// [`extract_matching`](Pile::extract_matching).
pub trait Pile {
    /// Number of cards in the pile.
    fn len(&self) -> usize;

    /// Whether the pile contains the card with this identity.
    fn contains(&self, id: CardId) -> bool;

    /// Adds a card at the pile's natural insertion point.
    fn add(&mut self, card: PlayingCard);

    /// Removes and returns the card with this identity.
    fn take(&mut self, id: CardId) -> Result<PlayingCard, PileError>;

    /// Clears the pile, returning every card.
    fn take_all(&mut self) -> Vec<PlayingCard>;

    /// Iterates the cards in the pile's own order.
    fn iter(&self) -> impl Iterator<Item = &PlayingCard>;

    /// Iterates the cards mutably.
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayingCard>;

    /// Whether the pile has no cards.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reverses the orientation of every card.
    fn flip_all(&mut self) {
        for card in self.iter_mut() {
            card.flip();
        }
    }

    /// Turns every card's printed face up.
    fn flip_all_face_up(&mut self) {
        for card in self.iter_mut() {
            card.flip_face_up();
        }
    }

    /// Turns every card's printed face down.
    fn flip_all_face_down(&mut self) {
        for card in self.iter_mut() {
            card.flip_face_down();
        }
    }

    /// Sets every card's orientation from a flag.
    fn turn_all(&mut self, face_up: bool) {
        for card in self.iter_mut() {
            card.turn(face_up);
        }
    }

    /// Uniformly picks a card without removing it. `None` on an empty pile.
    fn random_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PlayingCard> {
        if self.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..self.len());
        self.iter().nth(pick)
    }

    /// Drains every card of `other` into this pile, in `other`'s iteration
    /// order.
    fn merge_from(&mut self, other: &mut impl Pile) {
        for card in other.take_all() {
            self.add(card);
        }
    }

    /// Moves the by-representation intersection out of both piles.
    ///
    /// For each card of `other` whose up face matches a card still in
    /// `self`, the matching card leaves `self` for the returned pile and the
    /// twin is removed from `other`. Matching is one-to-one, so a pile
    /// holding a single "Two of Hearts" gives up one card even if `other`
    /// shows two of them.
    fn extract_matching(&mut self, other: &mut impl Pile) -> Self
    where
        Self: Sized + Default,
    {
        let mut taken = Self::default();
        let theirs: Vec<(CardId, String)> = other
            .iter()
            .map(|card| (card.id(), card.up_face().to_string()))
            .collect();
        for (their_id, face) in theirs {
            let mine = self
                .iter()
                .find(|card| card.up_face() == face)
                .map(PlayingCard::id);
            if let Some(my_id) = mine {
                if let Ok(card) = self.take(my_id) {
                    taken.add(card);
                    let _ = other.take(their_id);
                }
            }
        }
        taken
    }
}

/// An unordered pile of cards with set semantics over card identity.
///
/// Iteration order is unspecified. Adding a card the pile already holds (by
/// identity) replaces it, so duplicate identities are impossible; duplicate
/// faces are fine.
#[derive(Debug, Default)]
pub struct UnorderedPile {
    cards: HashMap<CardId, PlayingCard>,
}

impl UnorderedPile {
    /// Creates an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pile for UnorderedPile {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    fn add(&mut self, card: PlayingCard) {
        self.cards.insert(card.id(), card);
    }

    fn take(&mut self, id: CardId) -> Result<PlayingCard, PileError> {
        self.cards.remove(&id).ok_or(PileError::CardNotFound)
    }

    fn take_all(&mut self) -> Vec<PlayingCard> {
        self.cards.drain().map(|(_, card)| card).collect()
    }

    fn iter(&self) -> impl Iterator<Item = &PlayingCard> {
        self.cards.values()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayingCard> {
        self.cards.values_mut()
    }
}

impl FromIterator<PlayingCard> for UnorderedPile {
    fn from_iter<T: IntoIterator<Item = PlayingCard>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().map(|card| (card.id(), card)).collect(),
        }
    }
}

impl fmt::Display for UnorderedPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<&str> = self.iter().map(PlayingCard::up_face).collect();
        write!(f, "{{{}}}", faces.join(", "))
    }
}
