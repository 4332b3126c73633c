//! Console blackjack: any number of players against a hitting dealer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bigcards::blackjack::{BlackjackOptions, RoundOutcome, blackjack_value, settle};
use bigcards::{Deck, OrderedHand, Pile};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let options = BlackjackOptions::default();

    let mut deck = Deck::standard(false);
    deck.shuffle(&mut rng);

    println!("Welcome to Big Blackjack!");
    println!("We hope you enjoy your time.\n");

    let player_count = loop {
        let count = prompt_i64("How many players will be joining us: ");
        if count >= 1 {
            break count as usize;
        }
        println!("At least one player is required.");
    };

    // Players first, the dealer last.
    let mut hands: Vec<OrderedHand> = Vec::with_capacity(player_count + 1);
    for i in 0..player_count {
        let name = prompt_line(&format!("Enter player {}'s name: ", i + 1));
        hands.push(
            OrderedHand::new()
                .with_evaluator(blackjack_value)
                .with_name(name)
                .with_prop("money", options.starting_money),
        );
    }
    hands.push(
        OrderedHand::new()
            .with_evaluator(blackjack_value)
            .with_name("The Dealer")
            .with_prop("hold", false),
    );

    clear();
    println!("The dealer has arrived!");
    println!("They look awfully confident.");
    println!("Think you can outwit them?\n");
    prompt_line("Press enter to begin...");
    clear();

    while hands.len() > 1 {
        let dealer_index = hands.len() - 1;

        for hand in &hands[..dealer_index] {
            println!(
                "{} has ${}",
                hand.name().unwrap_or("?"),
                hand.int("money").unwrap_or(0)
            );
        }
        wait();

        for hand in &mut hands[..dealer_index] {
            let money = hand.int("money").unwrap_or(0);
            let name = hand.name().unwrap_or("?").to_string();
            let bet = loop {
                let bet = prompt_i64(&format!("How much will {name} bet: "));
                if bet > money {
                    println!("You must have enough money to cover the bet.");
                } else if bet < 1 {
                    println!("The bet must be at least $1.");
                } else {
                    break bet;
                }
            };
            hand.set("bet", bet);
            hand.set("value", 0);
            hand.set("hold", false);
        }
        hands[dealer_index].set("hold", false);
        hands[dealer_index].set("value", 0);
        wait();

        if deck.deal(&mut hands, Some(options.initial_cards), false).is_err() {
            println!("The deck has gone missing. The casino closes.");
            return;
        }
        // The last-dealt card of every hand goes face down as the hole card.
        for hand in &mut hands {
            if let Some(card) = hand.last_mut() {
                card.flip();
            }
        }

        while !hands.iter().all(|hand| hand.flag("hold").unwrap_or(false)) {
            for i in 0..dealer_index {
                if hands[i].flag("hold").unwrap_or(false) {
                    continue;
                }

                println!("It is {}'s turn!", hands[i].name().unwrap_or("?"));
                wait();
                print_hands(&hands);
                println!("\n{}\n", hands[i].view());

                update_total(&mut hands[i], true);

                if !hands[i].flag("hold").unwrap_or(false) {
                    let hit = loop {
                        let choice = prompt_line("HIT or HOLD: ").to_uppercase();
                        match choice.as_str() {
                            "HIT" => break true,
                            "HOLD" => break false,
                            _ => println!("Enter HIT or HOLD please."),
                        }
                    };
                    println!();

                    if hit {
                        match deck.draw() {
                            Ok(card) => hands[i].add(card),
                            Err(_) => {
                                println!("The deck is out of cards!");
                                hands[i].set("hold", true);
                            }
                        }
                        println!("{}", hands[i].view());
                        update_total(&mut hands[i], true);
                    } else {
                        hands[i].set("hold", true);
                    }
                }

                wait();
            }

            if !hands[dealer_index].flag("hold").unwrap_or(false) {
                println!("It's the dealer's turn!");
                wait();
                println!("The dealer is playing...\n");
                print_hands(&hands);
                println!();

                update_total(&mut hands[dealer_index], false);

                let total = hands[dealer_index].int("value").unwrap_or(0);
                if !hands[dealer_index].flag("hold").unwrap_or(false) {
                    hands[dealer_index].set("hold", total > options.dealer_stands_above);
                }

                if hands[dealer_index].flag("hold").unwrap_or(false) {
                    println!("The dealer HOLDs.\n");
                } else {
                    println!("The dealer HITs.\n");
                    match deck.draw() {
                        Ok(card) => hands[dealer_index].add(card),
                        Err(_) => {
                            println!("The deck is out of cards!");
                            hands[dealer_index].set("hold", true);
                        }
                    }
                    println!("{}", hands[dealer_index]);
                    update_total(&mut hands[dealer_index], false);
                }

                wait();
            }
        }

        println!("Everyone has held");
        wait();

        for hand in &mut hands {
            hand.flip_all_face_up();
            println!("{hand}");
            deck.merge_from(hand);
        }
        deck.shuffle(&mut rng);
        println!();

        let dealer_total = hands[dealer_index].int("value").unwrap_or(0);
        for hand in &mut hands[..dealer_index] {
            let name = hand.name().unwrap_or("?").to_string();
            let bet = hand.int("bet").unwrap_or(0);
            let money = hand.int("money").unwrap_or(0);
            match settle(hand.int("value").unwrap_or(0), dealer_total) {
                RoundOutcome::Win => {
                    println!("{name} won ${bet}!");
                    hand.set("money", money + bet);
                }
                RoundOutcome::Lose => {
                    println!("{name} lost ${bet}.");
                    hand.set("money", money - bet);
                    if money - bet < 1 {
                        println!("{name} has lost! Oh no!");
                    }
                }
            }
        }

        // Broke players leave the table; the dealer stays at the end.
        let mut i = 0;
        while i < hands.len() - 1 {
            if hands[i].int("money").unwrap_or(0) < 1 {
                hands.remove(i);
            } else {
                i += 1;
            }
        }

        wait();
    }

    println!("We hope you have enjoyed Big Blackjack!");
    println!("Come again soon <3\n");
}

/// Folds the current total into the hand's properties, holding on 21 or bust.
fn update_total(hand: &mut OrderedHand, announce: bool) {
    let total = hand.value();
    if total > 21 {
        if announce {
            println!("You've busted! Bummer.");
        }
        hand.set("hold", true);
        hand.set("value", 0);
    } else if total == 21 {
        if announce {
            println!("You've hit 21! Nice!");
        }
        hand.set("hold", true);
        hand.set("value", 21);
    } else {
        hand.set("value", total);
    }
}

fn print_hands(hands: &[OrderedHand]) {
    for hand in hands {
        let marker = if hand.flag("hold").unwrap_or(false) {
            " - HOLD"
        } else {
            ""
        };
        println!("{hand}{marker}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_i64(prompt: &str) -> i64 {
    loop {
        match prompt_line(prompt).parse::<i64>() {
            Ok(value) => return value,
            Err(_) => println!("Enter a number please."),
        }
    }
}

fn wait() {
    prompt_line("\nPress enter to continue...");
    clear();
}

fn clear() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}
