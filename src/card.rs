//! Card types: identity handles, the two-faced card, and the playing card.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::error::ParseError;
use crate::rank::Rank;
use crate::suit::{Color, Suit};

/// Placeholder text shown by the hidden side of a card.
pub const FACE_DOWN: &str = "(Face Down)";

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a physical card.
///
/// Two cards can show the same face (a second "Two of Hearts" in a multi-deck
/// shoe, or any pair of face-down cards) yet remain different cards. Piles
/// track membership by this id, never by the printed face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl CardId {
    fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A physical card with two printable faces, exactly one of which is up.
///
/// Equality, hashing, and display use only the currently up face, so a
/// face-down card is indistinguishable from any other face-down card by
/// value. Identity comparisons go through [`Card::id`].
///
/// There is no `Clone`; a copy of a physical card is a new physical card.
/// Use [`Card::duplicate`] to mint an independent copy under a fresh id.
#[derive(Debug)]
pub struct Card {
    id: CardId,
    front: String,
    back: String,
    front_up: bool,
}

impl Card {
    /// Creates a face-up card with the given front and the standard
    /// face-down placeholder on the back.
    #[must_use]
    pub fn new(front: impl Into<String>) -> Self {
        Self {
            id: CardId::next(),
            front: front.into(),
            back: FACE_DOWN.to_string(),
            front_up: true,
        }
    }

    /// Replaces the back face.
    #[must_use]
    pub fn with_back(mut self, back: impl Into<String>) -> Self {
        self.back = back.into();
        self
    }

    /// Sets which face starts up.
    #[must_use]
    pub fn facing(mut self, front_up: bool) -> Self {
        self.front_up = front_up;
        self
    }

    /// This card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Front face text.
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    /// Back face text.
    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Whether the front face is up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.front_up
    }

    /// The currently visible face.
    #[must_use]
    pub fn up_face(&self) -> &str {
        if self.front_up { &self.front } else { &self.back }
    }

    /// Reverses which face is up.
    pub const fn flip(&mut self) {
        self.front_up = !self.front_up;
    }

    /// Turns the front face up.
    pub const fn flip_face_up(&mut self) {
        self.front_up = true;
    }

    /// Turns the back face up.
    pub const fn flip_face_down(&mut self) {
        self.front_up = false;
    }

    /// Sets the orientation from a flag.
    pub const fn turn(&mut self, face_up: bool) {
        self.front_up = face_up;
    }

    /// Mints an independent card with the same faces and orientation but its
    /// own identity.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: CardId::next(),
            front: self.front.clone(),
            back: self.back.clone(),
            front_up: self.front_up,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.up_face())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.up_face() == other.up_face()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.up_face().hash(state);
    }
}

/// A standard playing card: a [`Rank`] and [`Suit`] printed on a flippable
/// [`Card`].
///
/// Rank and suit are fixed at construction. The numeric value of the card is
/// the rank value alone (0–13); suit never participates in value comparisons.
#[derive(Debug)]
pub struct PlayingCard {
    rank: Rank,
    suit: Suit,
    card: Card,
}

impl PlayingCard {
    /// Creates a face-up playing card.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            card: Card::new(rank.of(suit)),
        }
    }

    /// Sets which face starts up.
    #[must_use]
    pub fn facing(mut self, face_up: bool) -> Self {
        self.card.turn(face_up);
        self
    }

    /// This card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.card.id()
    }

    /// The rank printed on the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The suit printed on the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The card's color, from its suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Numeric value of the card: the rank value, independent of suit.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Whether the rank is Jack, Queen, or King.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        self.rank.is_face_card()
    }

    /// Whether this card shows the given rank.
    #[must_use]
    pub fn eq_rank(&self, rank: Rank) -> bool {
        self.rank == rank
    }

    /// Whether this card is of the given suit.
    #[must_use]
    pub fn eq_suit(&self, suit: Suit) -> bool {
        self.suit == suit
    }

    /// Whether this card is of the given color.
    #[must_use]
    pub fn eq_color(&self, color: Color) -> bool {
        self.color() == color
    }

    /// Whether the printed face is up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.card.is_face_up()
    }

    /// The currently visible face.
    #[must_use]
    pub fn up_face(&self) -> &str {
        self.card.up_face()
    }

    /// Reverses which face is up.
    pub const fn flip(&mut self) {
        self.card.flip();
    }

    /// Turns the printed face up.
    pub const fn flip_face_up(&mut self) {
        self.card.flip_face_up();
    }

    /// Turns the printed face down.
    pub const fn flip_face_down(&mut self) {
        self.card.flip_face_down();
    }

    /// Sets the orientation from a flag.
    pub const fn turn(&mut self, face_up: bool) {
        self.card.turn(face_up);
    }

    /// Mints an independent card with the same printing and orientation but
    /// its own identity.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            rank: self.rank,
            suit: self.suit,
            card: self.card.duplicate(),
        }
    }
}

/// Parses the canonical `"<rank> of <suit>"` form, or the bare rank token
/// when it denotes the Joker (a joker's face carries no suit).
impl FromStr for PlayingCard {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((rank_text, suit_text)) = s.split_once(" of ") {
            return Ok(Self::new(rank_text.parse()?, suit_text.parse()?));
        }
        match s.parse::<Rank>() {
            Ok(Rank::Joker) => Ok(Self::new(Rank::Joker, Suit::Heart)),
            _ => Err(ParseError::MalformedCard(s.to_string())),
        }
    }
}

impl fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.up_face())
    }
}

impl PartialEq for PlayingCard {
    fn eq(&self, other: &Self) -> bool {
        self.up_face() == other.up_face()
    }
}

impl Eq for PlayingCard {}

impl Hash for PlayingCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.up_face().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_face_is_up() {
        let mut card = Card::new("front").with_back("back");
        assert_eq!(card.up_face(), "front");
        card.flip();
        assert_eq!(card.up_face(), "back");
        card.flip_face_up();
        assert_eq!(card.up_face(), "front");
        card.turn(false);
        assert!(!card.is_face_up());
    }

    #[test]
    fn equality_uses_only_the_up_face() {
        let ace = PlayingCard::new(Rank::Ace, Suit::Spade);
        let mut other_ace = PlayingCard::new(Rank::Ace, Suit::Spade);
        let king = PlayingCard::new(Rank::King, Suit::Spade);
        assert_eq!(ace, other_ace);
        assert_ne!(ace, king);

        other_ace.flip_face_down();
        assert_ne!(ace, other_ace);

        let mut hidden_king = PlayingCard::new(Rank::King, Suit::Heart);
        hidden_king.flip_face_down();
        assert_eq!(other_ace, hidden_king);
    }

    #[test]
    fn identity_survives_matching_faces() {
        let a = PlayingCard::new(Rank::Two, Suit::Heart);
        let b = PlayingCard::new(Rank::Two, Suit::Heart);
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn duplicate_is_a_new_card() {
        let mut card = PlayingCard::new(Rank::Nine, Suit::Club);
        card.flip_face_down();
        let copy = card.duplicate();
        assert_eq!(card, copy);
        assert!(!copy.is_face_up());
        assert_ne!(card.id(), copy.id());
    }

    #[test]
    fn renders_rank_of_suit() {
        assert_eq!(
            PlayingCard::new(Rank::Queen, Suit::Diamond).to_string(),
            "Queen of Diamonds"
        );
        assert_eq!(PlayingCard::new(Rank::Joker, Suit::Spade).to_string(), "Joker");

        let mut hidden = PlayingCard::new(Rank::Queen, Suit::Diamond);
        hidden.flip();
        assert_eq!(hidden.to_string(), FACE_DOWN);
    }

    #[test]
    fn parse_round_trips_all_standard_cards() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = PlayingCard::new(rank, suit);
                let parsed: PlayingCard = card.to_string().parse().unwrap();
                assert_eq!(parsed, card);
                assert_eq!(parsed.rank(), rank);
                assert_eq!(parsed.suit(), suit);
            }
        }
    }

    #[test]
    fn joker_round_trips_by_rank_alone() {
        let joker = PlayingCard::new(Rank::Joker, Suit::Club);
        let parsed: PlayingCard = joker.to_string().parse().unwrap();
        assert_eq!(parsed.rank(), Rank::Joker);
        assert_eq!(parsed, joker);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in ["", "Ace", "Ace of", "of Spades", "Ace of Spades of Clubs"] {
            assert!(bad.parse::<PlayingCard>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn value_ignores_suit() {
        let hearts = PlayingCard::new(Rank::Ten, Suit::Heart);
        let spades = PlayingCard::new(Rank::Ten, Suit::Spade);
        assert_eq!(hearts.value(), spades.value());
        assert!(hearts.eq_color(Color::Red));
        assert!(spades.eq_color(Color::Black));
    }
}
