//! Card rank value object.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::suit::Suit;

/// The rank printed on a playing card.
///
/// Discriminants are the canonical numeric values: Ace is low (1), King is
/// high (13), and the Joker sits outside the run at 0. The derived ordering
/// follows those values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Joker (0).
    Joker = 0,
    /// Ace (1).
    Ace = 1,
    /// Two (2).
    Two = 2,
    /// Three (3).
    Three = 3,
    /// Four (4).
    Four = 4,
    /// Five (5).
    Five = 5,
    /// Six (6).
    Six = 6,
    /// Seven (7).
    Seven = 7,
    /// Eight (8).
    Eight = 8,
    /// Nine (9).
    Nine = 9,
    /// Ten (10).
    Ten = 10,
    /// Jack (11).
    Jack = 11,
    /// Queen (12).
    Queen = 12,
    /// King (13).
    King = 13,
}

impl Rank {
    /// The thirteen standard ranks, ace first. Excludes the Joker.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Canonical numeric value (Joker 0, Ace 1, King 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank name as printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joker => "Joker",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Whether the rank is a face card (Jack, Queen, or King).
    #[must_use]
    pub const fn is_face_card(self) -> bool {
        self.value() > 10
    }

    /// Canonical label for this rank in the given suit, e.g. `"Ace of Spades"`.
    ///
    /// Jokers have no suit on their face and render as `"Joker"`.
    #[must_use]
    pub fn of(self, suit: Suit) -> String {
        if self == Self::Joker {
            self.name().to_string()
        } else {
            format!("{} of {}s", self.name(), suit.name())
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Joker),
            1 => Ok(Self::Ace),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            _ => Err(ParseError::UnknownRank(value.to_string())),
        }
    }
}

/// Parses the closed alias table: rank names, English numerals, digit
/// strings, and the one-letter court abbreviations, case-insensitive.
impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACE" | "ONE" | "1" | "A" => Ok(Self::Ace),
            "TWO" | "2" => Ok(Self::Two),
            "THREE" | "3" => Ok(Self::Three),
            "FOUR" | "4" => Ok(Self::Four),
            "FIVE" | "5" => Ok(Self::Five),
            "SIX" | "6" => Ok(Self::Six),
            "SEVEN" | "7" => Ok(Self::Seven),
            "EIGHT" | "8" => Ok(Self::Eight),
            "NINE" | "9" => Ok(Self::Nine),
            "TEN" | "10" => Ok(Self::Ten),
            "JACK" | "ELEVEN" | "11" | "J" => Ok(Self::Jack),
            "QUEEN" | "TWELVE" | "12" | "Q" => Ok(Self::Queen),
            "KING" | "THIRTEEN" | "13" | "K" => Ok(Self::King),
            "JOKER" | "FOURTEEN" | "ZERO" | "14" | "0" => Ok(Self::Joker),
            _ => Err(ParseError::UnknownRank(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
