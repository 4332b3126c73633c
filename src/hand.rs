//! Hands: piles with a scoring strategy and named properties.

use core::fmt;
use std::collections::{HashMap, VecDeque};
use std::ops::Index;

use crate::card::{CardId, PlayingCard};
use crate::error::PileError;
use crate::pile::Pile;

/// A hand-scoring strategy.
///
/// Pure function of the cards currently held; [`Hand::value`] invokes it on
/// demand and never caches the result.
pub type Evaluator = fn(&[&PlayingCard]) -> i64;

/// The default scoring strategy: the sum of rank values.
#[must_use]
pub fn card_sum(cards: &[&PlayingCard]) -> i64 {
    cards.iter().map(|card| i64::from(card.value())).sum()
}

/// A named property attached to a hand: a player name, bankroll, bet, or
/// hold flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// An integer property, e.g. money or a bet.
    Int(i64),
    /// A text property, e.g. a player name.
    Text(String),
    /// A boolean property, e.g. a hold flag.
    Flag(bool),
}

impl PropValue {
    /// The integer payload, if this is an [`PropValue::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The text payload, if this is a [`PropValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The flag payload, if this is a [`PropValue::Flag`].
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An unordered hand: cards, a scoring strategy, and a property bag.
///
/// Card storage and the property bag are separate: cards move through the
/// [`Pile`] operations, while properties are read and written by string key.
#[derive(Debug)]
pub struct Hand {
    cards: HashMap<CardId, PlayingCard>,
    evaluate: Evaluator,
    properties: HashMap<String, PropValue>,
}

impl Hand {
    /// Creates an empty hand scored by [`card_sum`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: HashMap::new(),
            evaluate: card_sum,
            properties: HashMap::new(),
        }
    }

    /// Replaces the scoring strategy.
    #[must_use]
    pub fn with_evaluator(mut self, evaluate: Evaluator) -> Self {
        self.evaluate = evaluate;
        self
    }

    /// Sets the `name` property.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set("name", name.into());
        self
    }

    /// Sets an arbitrary property.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Scores the hand with its evaluator.
    #[must_use]
    pub fn value(&self) -> i64 {
        let cards: Vec<&PlayingCard> = self.cards.values().collect();
        (self.evaluate)(&cards)
    }

    /// An all-face-up duplicate of this hand, leaving the original untouched.
    ///
    /// The duplicate carries fresh card identities, the same evaluator, and a
    /// copy of the properties.
    #[must_use]
    pub fn view(&self) -> Self {
        Self {
            cards: self
                .cards
                .values()
                .map(|card| {
                    let mut copy = card.duplicate();
                    copy.flip_face_up();
                    (copy.id(), copy)
                })
                .collect(),
            evaluate: self.evaluate,
            properties: self.properties.clone(),
        }
    }

    /// Sets a property.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Reads a property.
    #[must_use]
    pub fn get_prop(&self, key: &str) -> Option<&PropValue> {
        self.properties.get(key)
    }

    /// Removes a property, returning its previous value.
    pub fn remove_prop(&mut self, key: &str) -> Option<PropValue> {
        self.properties.remove(key)
    }

    /// Reads an integer property.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get_prop(key).and_then(PropValue::as_int)
    }

    /// Reads a flag property.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get_prop(key).and_then(PropValue::as_flag)
    }

    /// Reads a text property.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get_prop(key).and_then(PropValue::as_text)
    }

    /// The hand's name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Pile for Hand {
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

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hand(f, self.name(), self.cards.values())
    }
}

/// An ordered hand: positional card storage alongside the property bag.
///
/// String keys address properties; positions address cards. The two access
/// paths never mix.
#[derive(Debug)]
pub struct OrderedHand {
    cards: VecDeque<PlayingCard>,
    evaluate: Evaluator,
    properties: HashMap<String, PropValue>,
}

impl OrderedHand {
    /// Creates an empty ordered hand scored by [`card_sum`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: VecDeque::new(),
            evaluate: card_sum,
            properties: HashMap::new(),
        }
    }

    /// Replaces the scoring strategy.
    #[must_use]
    pub fn with_evaluator(mut self, evaluate: Evaluator) -> Self {
        self.evaluate = evaluate;
        self
    }

    /// Sets the `name` property.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set("name", name.into());
        self
    }

    /// Sets an arbitrary property.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Scores the hand with its evaluator.
    #[must_use]
    pub fn value(&self) -> i64 {
        let cards: Vec<&PlayingCard> = self.cards.iter().collect();
        (self.evaluate)(&cards)
    }

    /// An all-face-up duplicate of this hand, leaving the original untouched.
    #[must_use]
    pub fn view(&self) -> Self {
        Self {
            cards: self
                .cards
                .iter()
                .map(|card| {
                    let mut copy = card.duplicate();
                    copy.flip_face_up();
                    copy
                })
                .collect(),
            evaluate: self.evaluate,
            properties: self.properties.clone(),
        }
    }

    /// The card at `index`, counting from the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlayingCard> {
        self.cards.get(index)
    }

    /// The top card, if any.
    #[must_use]
    pub fn first(&self) -> Option<&PlayingCard> {
        self.cards.front()
    }

    /// The bottom card, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PlayingCard> {
        self.cards.back()
    }

    /// The bottom card, mutably.
    pub fn last_mut(&mut self) -> Option<&mut PlayingCard> {
        self.cards.back_mut()
    }

    /// Sets a property.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Reads a property.
    #[must_use]
    pub fn get_prop(&self, key: &str) -> Option<&PropValue> {
        self.properties.get(key)
    }

    /// Removes a property, returning its previous value.
    pub fn remove_prop(&mut self, key: &str) -> Option<PropValue> {
        self.properties.remove(key)
    }

    /// Reads an integer property.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get_prop(key).and_then(PropValue::as_int)
    }

    /// Reads a flag property.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get_prop(key).and_then(PropValue::as_flag)
    }

    /// Reads a text property.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get_prop(key).and_then(PropValue::as_text)
    }

    /// The hand's name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }
}

impl Default for OrderedHand {
    fn default() -> Self {
        Self::new()
    }
}

impl Pile for OrderedHand {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Inserts at the top, like a deck.
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

impl Index<usize> for OrderedHand {
    type Output = PlayingCard;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl fmt::Display for OrderedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hand(f, self.name(), self.cards.iter())
    }
}

fn fmt_hand<'a>(
    f: &mut fmt::Formatter<'_>,
    name: Option<&str>,
    cards: impl Iterator<Item = &'a PlayingCard>,
) -> fmt::Result {
    if let Some(name) = name {
        write!(f, "{name}: ")?;
    }
    let faces: Vec<&str> = cards.map(PlayingCard::up_face).collect();
    if faces.is_empty() {
        f.write_str("Empty")
    } else {
        f.write_str(&faces.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;
    use crate::suit::Suit;

    #[test]
    fn default_evaluator_sums_rank_values() {
        let mut hand = Hand::new();
        hand.add(PlayingCard::new(Rank::King, Suit::Spade));
        hand.add(PlayingCard::new(Rank::Two, Suit::Heart));
        assert_eq!(hand.value(), 15);
    }

    #[test]
    fn evaluator_is_injected_and_never_cached() {
        fn count(cards: &[&PlayingCard]) -> i64 {
            cards.len() as i64
        }
        let mut hand = Hand::new().with_evaluator(count);
        assert_eq!(hand.value(), 0);
        hand.add(PlayingCard::new(Rank::King, Suit::Spade));
        assert_eq!(hand.value(), 1);
    }

    #[test]
    fn view_shows_hidden_cards_without_mutating() {
        let mut hand = OrderedHand::new().with_name("Alice");
        let mut card = PlayingCard::new(Rank::Ace, Suit::Spade);
        card.flip_face_down();
        hand.add(card);

        let visible = hand.view();
        assert_eq!(visible.to_string(), "Alice: Ace of Spades");
        assert!(!hand[0].is_face_up());
    }

    #[test]
    fn properties_are_separate_from_cards() {
        let mut hand = Hand::new().with_name("Bob").with_prop("money", 100);
        hand.set("hold", false);

        assert_eq!(hand.name(), Some("Bob"));
        assert_eq!(hand.int("money"), Some(100));
        assert_eq!(hand.flag("hold"), Some(false));
        assert_eq!(hand.int("bet"), None);
        assert!(hand.is_empty());

        assert_eq!(hand.remove_prop("money"), Some(PropValue::Int(100)));
        assert_eq!(hand.int("money"), None);
    }

    #[test]
    fn ordered_hand_adds_to_the_top() {
        let mut hand = OrderedHand::new();
        hand.add(PlayingCard::new(Rank::Ace, Suit::Spade));
        hand.add(PlayingCard::new(Rank::Two, Suit::Spade));
        assert_eq!(hand.first().unwrap().up_face(), "Two of Spades");
        assert_eq!(hand.last().unwrap().up_face(), "Ace of Spades");
        assert_eq!(hand[1].up_face(), "Ace of Spades");
    }

    #[test]
    fn empty_hand_displays_empty() {
        assert_eq!(Hand::new().to_string(), "Empty");
        assert_eq!(
            OrderedHand::new().with_name("Dealer").to_string(),
            "Dealer: Empty"
        );
    }
}
