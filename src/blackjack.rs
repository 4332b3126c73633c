//! Blackjack scoring, table options, and round settlement.

use crate::card::PlayingCard;
use crate::rank::Rank;

/// Scores a blackjack hand.
///
/// Face cards count 10 and each ace counts 11 when the total stays at or
/// under 21 with every remaining ace still worth at least 1, otherwise 1.
/// Usable as a [`Hand`](crate::hand::Hand) evaluator.
#[must_use]
pub fn blackjack_value(cards: &[&PlayingCard]) -> i64 {
    let mut value: i64 = 0;
    let mut aces: i64 = 0;
    for card in cards {
        if card.eq_rank(Rank::Ace) {
            aces += 1;
        } else {
            value += i64::from(card.value()).min(10);
        }
    }

    for i in 0..aces {
        let aces_left = aces - i - 1;
        if value <= 21 - aces_left - 11 {
            value += 11;
        } else {
            value += 1;
        }
    }

    value
}

/// Table rules for a blackjack game.
///
/// ```
/// use bigcards::blackjack::BlackjackOptions;
///
/// let options = BlackjackOptions::default()
///     .with_starting_money(250)
///     .with_dealer_stands_above(17);
/// assert_eq!(options.starting_money, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackOptions {
    /// Bankroll each player starts with.
    pub starting_money: i64,
    /// The dealer holds once their total exceeds this.
    pub dealer_stands_above: i64,
    /// Cards dealt to every hand at the start of a round.
    pub initial_cards: usize,
}

impl Default for BlackjackOptions {
    fn default() -> Self {
        Self {
            starting_money: 100,
            dealer_stands_above: 16,
            initial_cards: 2,
        }
    }
}

impl BlackjackOptions {
    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the dealer's stand threshold.
    #[must_use]
    pub const fn with_dealer_stands_above(mut self, total: i64) -> Self {
        self.dealer_stands_above = total;
        self
    }

    /// Sets the opening deal size.
    #[must_use]
    pub const fn with_initial_cards(mut self, cards: usize) -> Self {
        self.initial_cards = cards;
        self
    }
}

/// How a player's round against the dealer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player's bet pays out.
    Win,
    /// The player's bet is lost.
    Lose,
}

/// Settles a player total against the dealer total. Ties pay the player.
///
/// Busted hands are expected to come in as 0, which loses to any standing
/// dealer and ties a busted dealer.
#[must_use]
pub const fn settle(player_total: i64, dealer_total: i64) -> RoundOutcome {
    if player_total >= dealer_total {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suit::Suit;

    fn hand(ranks: &[Rank]) -> Vec<PlayingCard> {
        ranks
            .iter()
            .map(|&rank| PlayingCard::new(rank, Suit::Spade))
            .collect()
    }

    fn value_of(ranks: &[Rank]) -> i64 {
        let cards = hand(ranks);
        let refs: Vec<&PlayingCard> = cards.iter().collect();
        blackjack_value(&refs)
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(value_of(&[Rank::King, Rank::Queen]), 20);
        assert_eq!(value_of(&[Rank::Jack, Rank::Nine, Rank::Two]), 21);
    }

    #[test]
    fn aces_flex_between_eleven_and_one() {
        assert_eq!(value_of(&[Rank::Ace, Rank::King]), 21);
        assert_eq!(value_of(&[Rank::Ace, Rank::Ace, Rank::Nine]), 21);
        assert_eq!(value_of(&[Rank::Ace, Rank::King, Rank::Five]), 16);
        assert_eq!(value_of(&[Rank::Ace, Rank::Ace]), 12);
    }

    #[test]
    fn totals_can_bust() {
        assert_eq!(value_of(&[Rank::King, Rank::Queen, Rank::Two]), 22);
    }

    #[test]
    fn ties_pay_the_player() {
        assert_eq!(settle(18, 18), RoundOutcome::Win);
        assert_eq!(settle(19, 18), RoundOutcome::Win);
        assert_eq!(settle(17, 18), RoundOutcome::Lose);
        assert_eq!(settle(0, 0), RoundOutcome::Win);
    }

    #[test]
    fn options_builder_sets_fields() {
        let options = BlackjackOptions::default()
            .with_starting_money(500)
            .with_dealer_stands_above(17)
            .with_initial_cards(3);
        assert_eq!(options.starting_money, 500);
        assert_eq!(options.dealer_stands_above, 17);
        assert_eq!(options.initial_cards, 3);
    }
}
