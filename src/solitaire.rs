//! Klondike piles: tableau columns, foundations, the talon, and the table.

use core::fmt;
use std::ops::Index;

use log::debug;
use rand::Rng;

use crate::card::{CardId, PlayingCard};
use crate::deck::Deck;
use crate::error::PileError;
use crate::pile::Pile;
use crate::rank::Rank;
use crate::suit::Suit;

/// Width of one rendered card cell: the longest label, "Queen of Diamonds".
const CELL_WIDTH: usize = 17;

/// A tableau column: a stack built downward in alternating colors.
///
/// The stack top is the last card; face-down cards sit beneath the face-up
/// run.
#[derive(Debug, Default)]
pub struct TableauColumn {
    cards: Vec<PlayingCard>,
}

impl TableauColumn {
    /// Creates an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The card on top of the stack, if any.
    #[must_use]
    pub fn top(&self) -> Option<&PlayingCard> {
        self.cards.last()
    }

    /// The card at `index`, counting from the base of the column.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlayingCard> {
        self.cards.get(index)
    }

    /// Turns the top card face up.
    pub fn flip_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.flip_face_up();
        }
    }

    /// Whether `card` may start a run here: a King on an empty column,
    /// otherwise one rank below the top card in the opposite color.
    #[must_use]
    pub fn can_place(&self, card: &PlayingCard) -> bool {
        match self.top() {
            None => card.eq_rank(Rank::King),
            Some(top) => card.color() != top.color() && card.value() + 1 == top.value(),
        }
    }

    /// Appends a run of cards, preserving their order.
    pub fn place(&mut self, mut run: Deck) {
        self.cards.extend(run.take_all());
    }

    /// Removes the top `num` cards as an ordered run and turns the newly
    /// exposed card face up.
    pub fn draw(&mut self, num: usize) -> Result<Deck, PileError> {
        if num == 0 || num > self.cards.len() {
            return Err(PileError::NotEnoughCards {
                want: num,
                have: self.cards.len(),
            });
        }
        let run: Deck = self.cards.split_off(self.cards.len() - num).into_iter().collect();
        self.flip_top();
        Ok(run)
    }
}

impl Pile for TableauColumn {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Places on top of the stack.
    fn add(&mut self, card: PlayingCard) {
        self.cards.push(card);
    }

    fn take(&mut self, id: CardId) -> Result<PlayingCard, PileError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id() == id)
            .ok_or(PileError::CardNotFound)?;
        Ok(self.cards.remove(index))
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

/// A foundation: one suit built ace upward. Renders as its top card.
#[derive(Debug, Default)]
pub struct Foundation {
    cards: Vec<PlayingCard>,
}

impl Foundation {
    /// Creates an empty foundation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all thirteen ranks have been placed.
    #[must_use]
    pub fn full(&self) -> bool {
        self.cards.len() == 13
    }

    /// The suit this foundation is building, fixed by its base card.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(PlayingCard::suit)
    }

    /// The card on top, if any.
    #[must_use]
    pub fn top(&self) -> Option<&PlayingCard> {
        self.cards.last()
    }

    /// Whether `card` continues the build: an Ace on an empty foundation,
    /// otherwise the same suit as the base and one rank above the top.
    #[must_use]
    pub fn can_place(&self, card: &PlayingCard) -> bool {
        match self.top() {
            None => card.eq_rank(Rank::Ace),
            Some(top) => {
                self.suit().is_some_and(|suit| card.eq_suit(suit))
                    && card.value() == top.value() + 1
            }
        }
    }

    /// Places a single card on top.
    pub fn place(&mut self, card: PlayingCard) {
        self.cards.push(card);
    }
}

impl Pile for Foundation {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    fn add(&mut self, card: PlayingCard) {
        self.cards.push(card);
    }

    fn take(&mut self, id: CardId) -> Result<PlayingCard, PileError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id() == id)
            .ok_or(PileError::CardNotFound)?;
        Ok(self.cards.remove(index))
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

impl fmt::Display for Foundation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top() {
            Some(card) => f.write_str(card.up_face()),
            None => f.write_str("Empty"),
        }
    }
}

/// The talon: a last-in-first-out discard next to the stock. Renders as its
/// top card.
#[derive(Debug, Default)]
pub struct Talon {
    cards: Vec<PlayingCard>,
}

impl Talon {
    /// Creates an empty talon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The card on top, if any.
    #[must_use]
    pub fn top(&self) -> Option<&PlayingCard> {
        self.cards.last()
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<PlayingCard, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }
}

impl Pile for Talon {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Discards on top.
    fn add(&mut self, card: PlayingCard) {
        self.cards.push(card);
    }

    fn take(&mut self, id: CardId) -> Result<PlayingCard, PileError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id() == id)
            .ok_or(PileError::CardNotFound)?;
        Ok(self.cards.remove(index))
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

impl fmt::Display for Talon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top() {
            Some(card) => f.write_str(card.up_face()),
            None => f.write_str("Empty"),
        }
    }
}

/// The tableau: the row of columns the game is played across.
///
/// Column `j` starts with `j + 1` cards, dealt face down from the shuffled
/// stock, with each column's top card then turned face up.
#[derive(Debug)]
pub struct Tableau {
    cols: Vec<TableauColumn>,
}

impl Tableau {
    /// Deals a tableau of `col_count` columns out of `stock`, leaving the
    /// remainder in the stock.
    pub fn new<R: Rng + ?Sized>(stock: &mut Deck, col_count: usize, rng: &mut R) -> Self {
        let mut cols: Vec<TableauColumn> = (0..col_count).map(|_| TableauColumn::new()).collect();

        stock.shuffle(rng);
        stock.flip_all_face_down();
        for i in 0..col_count {
            let _ = stock.deal(&mut cols[i..], Some(1), false);
        }
        stock.flip_all_face_up();

        for col in &mut cols {
            col.flip_top();
        }
        debug!(
            "tableau dealt across {col_count} columns, {} cards left in stock",
            stock.len()
        );
        Self { cols }
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Whether the tableau has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// The columns, in order.
    #[must_use]
    pub fn columns(&self) -> &[TableauColumn] {
        &self.cols
    }

    /// A column, mutably.
    pub fn column_mut(&mut self, index: usize) -> &mut TableauColumn {
        &mut self.cols[index]
    }
}

impl Index<usize> for Tableau {
    type Output = TableauColumn;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tallest = self.cols.iter().map(TableauColumn::len).max().unwrap_or(0);
        for row in 0..tallest {
            for col in &self.cols {
                match col.get(row) {
                    Some(card) => write!(f, "{:<width$}|", card.up_face(), width = CELL_WIDTH)?,
                    None => write!(f, "{:<width$}|", "", width = CELL_WIDTH)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A full klondike table: stock, tableau, four foundations, and the talon.
#[derive(Debug)]
pub struct Table {
    /// The face-down stock the talon is fed from.
    pub stock: Deck,
    /// The playing columns.
    pub tableau: Tableau,
    /// The four suit foundations.
    pub foundations: Vec<Foundation>,
    /// The discard next to the stock.
    pub talon: Talon,
}

impl Table {
    /// Sets up a standard seven-column game.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_columns(7, rng)
    }

    /// Sets up a game with a custom column count.
    pub fn with_columns<R: Rng + ?Sized>(col_count: usize, rng: &mut R) -> Self {
        let mut stock = Deck::standard(false);
        let tableau = Tableau::new(&mut stock, col_count, rng);
        Self {
            stock,
            tableau,
            foundations: (0..4).map(|_| Foundation::new()).collect(),
            talon: Talon::new(),
        }
    }

    /// Whether every foundation is complete.
    #[must_use]
    pub fn won(&self) -> bool {
        self.foundations.iter().all(Foundation::full)
    }

    /// Shuffles the talon back into the stock.
    pub fn redeal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.stock.merge_from(&mut self.talon);
        self.stock.shuffle(rng);
        debug!("talon recycled, stock holds {} cards", self.stock.len());
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stock = if self.stock.is_empty() {
            "Deck: Empty".to_string()
        } else {
            "Deck: (Face Down)".to_string()
        };
        write!(f, "{stock:<width$}|", width = CELL_WIDTH + 6)?;
        write!(
            f,
            "{:<width$}|",
            format!("Talon: {}", self.talon),
            width = CELL_WIDTH + 7
        )?;
        for foundation in &self.foundations {
            write!(f, "{:<width$}|", foundation.to_string(), width = CELL_WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        write!(f, "{}", self.tableau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn card(rank: Rank, suit: Suit) -> PlayingCard {
        PlayingCard::new(rank, suit)
    }

    #[test]
    fn empty_column_accepts_only_kings() {
        let col = TableauColumn::new();
        assert!(col.can_place(&card(Rank::King, Suit::Heart)));
        assert!(!col.can_place(&card(Rank::Queen, Suit::Heart)));
        assert!(!col.can_place(&card(Rank::Ace, Suit::Spade)));
    }

    #[test]
    fn column_builds_down_in_alternating_colors() {
        let mut col = TableauColumn::new();
        col.add(card(Rank::Nine, Suit::Spade));

        assert!(col.can_place(&card(Rank::Eight, Suit::Heart)));
        assert!(col.can_place(&card(Rank::Eight, Suit::Diamond)));
        assert!(!col.can_place(&card(Rank::Eight, Suit::Club)));
        assert!(!col.can_place(&card(Rank::Seven, Suit::Heart)));
        assert!(!col.can_place(&card(Rank::Ten, Suit::Heart)));
    }

    #[test]
    fn drawing_a_run_exposes_the_card_beneath() {
        let mut col = TableauColumn::new();
        let mut base = card(Rank::Ten, Suit::Club);
        base.flip_face_down();
        col.add(base);
        col.add(card(Rank::Nine, Suit::Heart));
        col.add(card(Rank::Eight, Suit::Spade));

        let run = col.draw(2).unwrap();
        assert_eq!(run.top().unwrap().up_face(), "Nine of Hearts");
        assert_eq!(run.len(), 2);
        assert_eq!(col.len(), 1);
        assert!(col.top().unwrap().is_face_up());
    }

    #[test]
    fn draw_is_bounded_by_the_column() {
        let mut col = TableauColumn::new();
        col.add(card(Rank::Four, Suit::Club));
        assert!(matches!(
            col.draw(2),
            Err(PileError::NotEnoughCards { want: 2, have: 1 })
        ));
        assert!(matches!(
            col.draw(0),
            Err(PileError::NotEnoughCards { want: 0, have: 1 })
        ));
    }

    #[test]
    fn placed_runs_keep_their_order() {
        let mut from = TableauColumn::new();
        from.add(card(Rank::Nine, Suit::Heart));
        from.add(card(Rank::Eight, Suit::Spade));
        let run = from.draw(2).unwrap();

        let mut to = TableauColumn::new();
        to.add(card(Rank::Ten, Suit::Club));
        to.place(run);

        assert_eq!(to.len(), 3);
        assert_eq!(to.top().unwrap().up_face(), "Eight of Spades");
        assert_eq!(to.get(1).unwrap().up_face(), "Nine of Hearts");
    }

    #[test]
    fn foundation_builds_one_suit_ace_upward() {
        let mut foundation = Foundation::new();
        assert!(foundation.can_place(&card(Rank::Ace, Suit::Heart)));
        assert!(!foundation.can_place(&card(Rank::Two, Suit::Heart)));

        foundation.place(card(Rank::Ace, Suit::Heart));
        assert_eq!(foundation.suit(), Some(Suit::Heart));
        assert!(foundation.can_place(&card(Rank::Two, Suit::Heart)));
        assert!(!foundation.can_place(&card(Rank::Two, Suit::Diamond)));
        assert!(!foundation.can_place(&card(Rank::Three, Suit::Heart)));
    }

    #[test]
    fn foundation_is_full_at_thirteen() {
        let mut foundation = Foundation::new();
        for rank in Rank::ALL {
            foundation.place(card(rank, Suit::Spade));
        }
        assert!(foundation.full());
    }

    #[test]
    fn talon_is_last_in_first_out() {
        let mut talon = Talon::new();
        talon.add(card(Rank::Ace, Suit::Spade));
        talon.add(card(Rank::Two, Suit::Club));
        assert_eq!(talon.to_string(), "Two of Clubs");
        assert_eq!(talon.draw().unwrap().up_face(), "Two of Clubs");
        assert_eq!(talon.draw().unwrap().up_face(), "Ace of Spades");
        assert_eq!(talon.draw(), Err(PileError::Empty));
    }

    #[test]
    fn table_setup_deals_the_classic_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let table = Table::new(&mut rng);

        let sizes: Vec<usize> = table.tableau.columns().iter().map(Pile::len).collect();
        assert_eq!(sizes, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(table.stock.len(), 52 - 28);
        assert!(table.talon.is_empty());
        assert!(!table.won());

        for col in table.tableau.columns() {
            assert!(col.top().unwrap().is_face_up());
            for hidden in 0..col.len() - 1 {
                assert!(!col.get(hidden).unwrap().is_face_up());
            }
        }
    }

    #[test]
    fn redeal_recycles_the_talon() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut table = Table::new(&mut rng);
        for _ in 0..3 {
            let drawn = table.stock.draw().unwrap();
            table.talon.add(drawn);
        }
        table.stock.take_all();
        table.redeal(&mut rng);
        assert!(table.talon.is_empty());
        assert_eq!(table.stock.len(), 3);
    }
}
