//! Console klondike solitaire.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bigcards::Pile;
use bigcards::solitaire::Table;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    clear();
    println!("Welcome to Big Solitaire!");
    println!("Your goal is to fill the four foundations with cards from each suit");
    println!("You must start with an ace and then add cards one higher on top");
    println!("\nTo flip over a card onto the talon, enter 0 twice");
    println!("Once to show that you want to move a card to the talon");
    println!("Twice to show that you want to flip a new card on top of the talon");
    println!("\nIf you enter an invalid move (like taking 4 cards from a column with only 3)");
    println!("nothing will happen and you will be prompted again to choose what to do");
    prompt_line("\nPress enter to begin...");

    let mut table = Table::new(&mut rng);

    while !table.won() {
        clear();
        println!("{table}");

        let columns = table.tableau.len();
        let from = loop {
            let pick = prompt_i64(&format!(
                "0: Talon, 1-{columns}: Tableau columns\nFrom what pile will you move cards: "
            ));
            if pick >= 0 && pick as usize <= columns {
                break pick as usize;
            }
            println!("Invalid choice");
        };

        // How many cards move, validating against the source pile.
        let count = if from == 0 {
            if table.talon.is_empty() {
                flip_to_talon(&mut table, &mut rng);
                continue;
            }

            let number = loop {
                let pick = prompt_i64("Enter the number of cards you'll move: ");
                if pick == 0 || pick == 1 {
                    break pick;
                }
                println!("Invalid choice");
            };
            if number == 0 {
                flip_to_talon(&mut table, &mut rng);
                continue;
            }
            1
        } else {
            println!();
            let number = loop {
                let pick = prompt_i64("Enter the number of cards you'll move: ");
                if pick >= 1 {
                    break pick as usize;
                }
                println!("Invalid choice");
            };

            let column = &table.tableau[from - 1];
            if number > column.len() {
                println!("Invalid choice");
                continue;
            }
            let deepest = column.get(column.len() - number);
            if !deepest.is_some_and(bigcards::PlayingCard::is_face_up) {
                println!("Invalid choice");
                continue;
            }
            number
        };
        println!();

        let to = loop {
            let pick = prompt_i64(&format!(
                "0: Foundation, 1-{columns}: Tableau columns\nWhere will you move cards: "
            ));
            if pick == 0 && count != 1 {
                println!("Too many cards");
                continue;
            }
            if pick >= 0 && pick as usize <= columns {
                break pick as usize;
            }
            println!("Invalid choice");
        };

        if from == 0 {
            move_from_talon(&mut table, to);
        } else {
            move_between_piles(&mut table, from - 1, to, count);
        }
    }

    clear();
    println!("{table}");
    println!("You've won! Nice job!");
}

/// Turns the next stock card onto the talon, recycling the talon into the
/// stock when the stock runs dry.
fn flip_to_talon<R: Rng + ?Sized>(table: &mut Table, rng: &mut R) {
    if table.stock.is_empty() {
        table.redeal(rng);
    }
    if let Ok(card) = table.stock.draw() {
        table.talon.add(card);
    }
}

/// Moves the talon's top card to a foundation (`to == 0`) or a column.
/// Illegal placements do nothing; the main loop re-prompts.
fn move_from_talon(table: &mut Table, to: usize) {
    if to == 0 {
        let target = table.talon.top().and_then(|card| {
            table
                .foundations
                .iter()
                .position(|foundation| foundation.can_place(card))
        });
        if let Some(index) = target {
            if let Ok(card) = table.talon.draw() {
                table.foundations[index].place(card);
            }
        }
    } else {
        let fits = table
            .talon
            .top()
            .is_some_and(|card| table.tableau[to - 1].can_place(card));
        if fits {
            if let Ok(card) = table.talon.draw() {
                table.tableau.column_mut(to - 1).add(card);
            }
        }
    }
}

/// Moves the top `count` cards of column `from` to a foundation (`to == 0`)
/// or onto another column. Illegal placements do nothing.
fn move_between_piles(table: &mut Table, from: usize, to: usize, count: usize) {
    let start = table.tableau[from].len() - count;

    if to == 0 {
        let target = table.tableau[from].get(start).and_then(|card| {
            table
                .foundations
                .iter()
                .position(|foundation| foundation.can_place(card))
        });
        if let Some(index) = target {
            if let Ok(mut run) = table.tableau.column_mut(from).draw(1) {
                if let Ok(card) = run.draw() {
                    table.foundations[index].place(card);
                }
            }
        }
    } else {
        let fits = table.tableau[from]
            .get(start)
            .is_some_and(|card| table.tableau[to - 1].can_place(card));
        if fits {
            if let Ok(run) = table.tableau.column_mut(from).draw(count) {
                table.tableau.column_mut(to - 1).place(run);
            }
        }
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

fn clear() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}
