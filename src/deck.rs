//! Ordered deck with top/bottom access, shuffling, sorting, and dealing.

use core::fmt;
use std::collections::VecDeque;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{CardId, PlayingCard};
use crate::error::{DealError, FillError, PileError};
use crate::pile::Pile;
use crate::rank::Rank;
use crate::suit::Suit;

/// Number of cards in a standard deck without jokers.
pub const DECK_SIZE: usize = 52;

/// How [`Deck::sort`] orders the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by rank value, aces low.
    RankAscending,
    /// Descending by rank value, aces low.
    RankDescending,
    /// Ascending with aces counted above kings: circular key
    /// `(value - 2) mod 14`.
    AcesHighAscending,
    /// Descending with aces counted above kings.
    AcesHighDescending,
    /// Grouped by suit value.
    BySuit,
}

impl SortOrder {
    fn key(self, card: &PlayingCard) -> i32 {
        let value = i32::from(card.value());
        match self {
            Self::RankAscending => value,
            Self::RankDescending => -value,
            Self::AcesHighAscending => (value - 2).rem_euclid(14),
            Self::AcesHighDescending => -(value - 2).rem_euclid(14),
            Self::BySuit => i32::from(card.suit().value()),
        }
    }
}

/// An ordered pile of cards. The front of the deck is the top.
///
/// [`Pile::add`] inserts at the top and [`draw`](Deck::draw) removes from the
/// top; [`add_to_bottom`](Deck::add_to_bottom) and
/// [`draw_from_bottom`](Deck::draw_from_bottom) mirror them at the back.
#[derive(Debug, Default)]
pub struct Deck {
    cards: VecDeque<PlayingCard>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a freshly filled deck: all 52 rank and suit combinations, plus
    /// two jokers when requested.
    #[must_use]
    pub fn standard(jokers: bool) -> Self {
        let mut deck = Self::new();
        deck.push_standard(jokers);
        deck
    }

    /// Fills an empty deck in canonical order: for each suit, Ace through
    /// King appended to the bottom, then two jokers when requested.
    pub fn fill(&mut self, jokers: bool) -> Result<(), FillError> {
        if !self.is_empty() {
            return Err(FillError::NotEmpty(self.len()));
        }
        self.push_standard(jokers);
        Ok(())
    }

    fn push_standard(&mut self, jokers: bool) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push_back(PlayingCard::new(rank, suit));
            }
        }
        if jokers {
            self.cards.push_back(PlayingCard::new(Rank::Joker, Suit::Heart));
            self.cards.push_back(PlayingCard::new(Rank::Joker, Suit::Club));
        }
        debug!("filled deck with {} cards", self.len());
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<PlayingCard, PileError> {
        self.cards.pop_front().ok_or(PileError::Empty)
    }

    /// Removes and returns the bottom card.
    pub fn draw_from_bottom(&mut self) -> Result<PlayingCard, PileError> {
        self.cards.pop_back().ok_or(PileError::Empty)
    }

    /// Adds a card to the bottom.
    pub fn add_to_bottom(&mut self, card: PlayingCard) {
        self.cards.push_back(card);
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&PlayingCard> {
        self.cards.front()
    }

    /// The card at `index` counting from the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlayingCard> {
        self.cards.get(index)
    }

    /// Uniformly permutes the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        debug!("shuffled {} cards", self.len());
    }

    /// Sorts the deck by the given order.
    pub fn sort(&mut self, order: SortOrder) {
        self.cards
            .make_contiguous()
            .sort_by_key(|card| order.key(card));
    }

    /// Deals cards round-robin into `piles` by repeated [`draw`](Deck::draw).
    ///
    /// When `per_pile` is given and `piles.len() * per_pile` cards remain,
    /// exactly that many are dealt; otherwise the largest multiple of
    /// `piles.len()` that fits when `even`, otherwise everything. Card `i`
    /// goes to pile `i % piles.len()`. Returns the number of cards dealt.
    pub fn deal<P: Pile>(
        &mut self,
        piles: &mut [P],
        per_pile: Option<usize>,
        even: bool,
    ) -> Result<usize, DealError> {
        if piles.is_empty() {
            return Err(DealError::NoPiles);
        }

        let total = match per_pile {
            Some(count) if piles.len() * count <= self.len() => piles.len() * count,
            _ if even => self.len() - self.len() % piles.len(),
            _ => self.len(),
        };

        for i in 0..total {
            if let Some(card) = self.cards.pop_front() {
                piles[i % piles.len()].add(card);
            }
        }
        debug!("dealt {total} cards into {} piles", piles.len());
        Ok(total)
    }

    /// Creates `deck_count` empty decks and deals into them, by the same
    /// rules as [`deal`](Deck::deal).
    pub fn deal_new(
        &mut self,
        deck_count: usize,
        per_pile: Option<usize>,
        even: bool,
    ) -> Result<Vec<Self>, DealError> {
        if deck_count == 0 {
            return Err(DealError::NoPiles);
        }
        let mut piles: Vec<Self> = (0..deck_count).map(|_| Self::new()).collect();
        self.deal(&mut piles, per_pile, even)?;
        Ok(piles)
    }
}

impl Pile for Deck {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Inserts at the top of the deck.
    fn add(&mut self, card: PlayingCard) {
        self.cards.push_front(card);
    }

    fn take(&mut self, id: CardId) -> Result<PlayingCard, PileError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id() == id)
            .ok_or(PileError::CardNotFound)?;
        self.cards.remove(index).ok_or(PileError::CardNotFound)
    }

    fn take_all(&mut self) -> Vec<PlayingCard> {
        self.cards.drain(..).collect()
    }

    fn iter(&self) -> impl Iterator<Item = &PlayingCard> {
        self.cards.iter()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayingCard> {
        self.cards.iter_mut()
    }
}

impl FromIterator<PlayingCard> for Deck {
    fn from_iter<T: IntoIterator<Item = PlayingCard>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<&str> = self.iter().map(PlayingCard::up_face).collect();
        write!(f, "[{}]", faces.join(", "))
    }
}
