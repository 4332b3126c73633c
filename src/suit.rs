//! Card suit value object.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Suit color, derived from the suit's numeric value (even red, odd black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "Red",
            Self::Black => "Black",
        })
    }
}

/// The suit printed on a playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts (0).
    Heart = 0,
    /// Clubs (1).
    Club = 1,
    /// Diamonds (2).
    Diamond = 2,
    /// Spades (3).
    Spade = 3,
}

impl Suit {
    /// The four suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Club, Self::Diamond, Self::Spade];

    /// Canonical numeric value (0–3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Suit name, singular, as printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "Heart",
            Self::Club => "Club",
            Self::Diamond => "Diamond",
            Self::Spade => "Spade",
        }
    }

    /// The color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.value() % 2 == 0 {
            Color::Red
        } else {
            Color::Black
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Heart),
            1 => Ok(Self::Club),
            2 => Ok(Self::Diamond),
            3 => Ok(Self::Spade),
            _ => Err(ParseError::UnknownSuit(value.to_string())),
        }
    }
}

/// Parses the closed alias table: singular and plural names, digit strings,
/// English numerals, and one-letter abbreviations, case-insensitive.
impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HEART" | "HEARTS" | "0" | "ZERO" | "H" => Ok(Self::Heart),
            "CLUB" | "CLUBS" | "1" | "ONE" | "C" => Ok(Self::Club),
            "DIAMOND" | "DIAMONDS" | "2" | "TWO" | "D" => Ok(Self::Diamond),
            "SPADE" | "SPADES" | "3" | "THREE" | "S" => Ok(Self::Spade),
            _ => Err(ParseError::UnknownSuit(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
