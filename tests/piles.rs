//! Integration tests across decks, piles, and hands.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bigcards::{
    DECK_SIZE, DealError, Deck, Hand, OrderedHand, Pile, PileError, PlayingCard, Rank, SortOrder,
    Suit, UnorderedPile,
};

#[test]
fn standard_deck_draws_52_distinct_cards_then_fails() {
    let mut deck = Deck::standard(false);
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let card = deck.draw().unwrap();
        assert_ne!(card.rank(), Rank::Joker);
        assert!(seen.insert(card.to_string()), "duplicate face drawn");
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(deck.draw(), Err(PileError::Empty));
}

#[test]
fn jokered_deck_holds_54() {
    let deck = Deck::standard(true);
    assert_eq!(deck.len(), 54);
    assert_eq!(
        deck.iter().filter(|card| card.rank() == Rank::Joker).count(),
        2
    );
}

#[test]
fn deal_exact_when_the_count_fits() {
    let mut deck = Deck::standard(false);
    let mut hands: Vec<OrderedHand> = (0..4).map(|_| OrderedHand::new()).collect();

    let dealt = deck.deal(&mut hands, Some(5), false).unwrap();

    assert_eq!(dealt, 20);
    assert!(hands.iter().all(|hand| hand.len() == 5));
    assert_eq!(deck.len(), 32);
}

#[test]
fn deal_falls_back_to_the_largest_even_spread() {
    let mut deck = Deck::standard(false);
    let mut hands: Vec<OrderedHand> = (0..5).map(|_| OrderedHand::new()).collect();

    // 5 * 11 does not fit in 52, so `even` wins: 50 cards, 10 each.
    let dealt = deck.deal(&mut hands, Some(11), true).unwrap();

    assert_eq!(dealt, 50);
    assert!(hands.iter().all(|hand| hand.len() == 10));
    assert_eq!(deck.len(), 2);
}

#[test]
fn deal_empties_the_deck_when_unconstrained() {
    let mut deck = Deck::standard(false);
    let mut hands: Vec<OrderedHand> = (0..5).map(|_| OrderedHand::new()).collect();

    let dealt = deck.deal(&mut hands, None, false).unwrap();

    assert_eq!(dealt, 52);
    assert!(deck.is_empty());
    let sizes: Vec<usize> = hands.iter().map(Pile::len).collect();
    assert_eq!(sizes, [11, 11, 10, 10, 10]);
}

#[test]
fn deal_goes_round_robin_from_the_top() {
    let mut deck: Deck = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four]
        .into_iter()
        .map(|rank| PlayingCard::new(rank, Suit::Spade))
        .collect();

    let piles = deck.deal_new(2, None, false).unwrap();

    // Card i goes to pile i % 2, and each deck receives on its top.
    assert_eq!(piles[0].len(), 2);
    assert_eq!(piles[0].top().unwrap().up_face(), "Three of Spades");
    assert_eq!(piles[1].len(), 2);
    assert_eq!(piles[1].top().unwrap().up_face(), "Four of Spades");
}

#[test]
fn deal_requires_targets() {
    let mut deck = Deck::standard(false);
    let mut none: Vec<OrderedHand> = Vec::new();
    assert_eq!(deck.deal(&mut none, None, false), Err(DealError::NoPiles));
    assert!(matches!(deck.deal_new(0, None, false), Err(DealError::NoPiles)));
}

#[test]
fn extract_matching_balances_the_books() {
    let mut left: UnorderedPile = Deck::standard(false).take_all().into_iter().collect();
    let mut right: UnorderedPile = [
        PlayingCard::new(Rank::Two, Suit::Heart),
        PlayingCard::new(Rank::King, Suit::Spade),
        PlayingCard::new(Rank::Joker, Suit::Heart),
    ]
    .into_iter()
    .collect();

    let left_before = left.len();
    let moved = left.extract_matching(&mut right);

    // The two standard faces match; the joker has no twin in a plain deck.
    assert_eq!(moved.len(), 2);
    assert_eq!(left_before, moved.len() + left.len());
    assert_eq!(right.len(), 1);
    assert_eq!(right.iter().next().unwrap().rank(), Rank::Joker);
}

#[test]
fn a_multi_deck_shoe_keeps_twin_cards() {
    let mut shoe = UnorderedPile::new();
    let mut first = Deck::standard(false);
    let mut second = Deck::standard(false);
    shoe.merge_from(&mut first);
    shoe.merge_from(&mut second);

    assert_eq!(shoe.len(), 104);
    let twos = shoe
        .iter()
        .filter(|card| card.up_face() == "Two of Hearts")
        .count();
    assert_eq!(twos, 2);
}

#[test]
fn a_round_of_hands_returns_every_card_to_the_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::standard(false);
    deck.shuffle(&mut rng);

    let mut hands: Vec<Hand> = (0..3).map(|_| Hand::new()).collect();
    deck.deal(&mut hands, Some(2), false).unwrap();
    assert_eq!(deck.len(), 46);

    for hand in &mut hands {
        deck.merge_from(hand);
    }
    assert_eq!(deck.len(), 52);
    assert!(hands.iter().all(Pile::is_empty));
}

#[test]
fn hole_cards_stay_hidden_until_the_showdown() {
    let mut deck = Deck::standard(false);
    let mut hand = OrderedHand::new().with_name("Alice");
    deck.deal(std::slice::from_mut(&mut hand), Some(2), false).unwrap();
    if let Some(card) = hand.last_mut() {
        card.flip();
    }

    let shown = hand.view();
    assert!(shown.iter().all(PlayingCard::is_face_up));
    assert!(!hand.last().unwrap().is_face_up());
    assert!(hand.to_string().contains("(Face Down)"));

    hand.flip_all_face_up();
    assert!(!hand.to_string().contains("(Face Down)"));
}

#[test]
fn shuffled_deck_sorts_back_into_rank_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::standard(false);
    deck.shuffle(&mut rng);

    deck.sort(SortOrder::RankAscending);
    let values: Vec<u8> = deck.iter().map(PlayingCard::value).collect();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));

    deck.sort(SortOrder::AcesHighDescending);
    assert_eq!(deck.top().unwrap().rank(), Rank::Ace);
    assert_eq!(deck.get(51).unwrap().rank(), Rank::Two);
}

#[test]
fn random_card_leaves_the_pile_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::standard(false);
    let picked = deck.random_card(&mut rng).unwrap().to_string();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.iter().any(|card| card.to_string() == picked));
}
