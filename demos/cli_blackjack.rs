//! CLI blackjack example.
//!
//! Set `RUST_LOG=cardtable=trace` to watch the deck at work.

#![allow(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardtable::{
    Card, ColorMap, Deck, DeckOptions, DirtyRegion, Hand, Layout, PileLayout, Placement, Renderer,
    SurfaceId, Theme, dealer_draws, settle,
};
use tracing_subscriber::EnvFilter;

const TABLE: SurfaceId = SurfaceId(0);

/// Keeps one text cell per drawn card, keyed by row and column.
#[derive(Default)]
struct TextTable {
    cells: BTreeMap<(i32, i32), String>,
}

impl TextTable {
    fn print(&self) {
        let mut row = None;
        for (&(y, _), cell) in &self.cells {
            if row != Some(y) {
                if row.is_some() {
                    println!();
                }
                print!("  ");
                row = Some(y);
            }
            print!("{cell} ");
        }
        println!();
    }
}

impl Renderer for TextTable {
    fn render(
        &mut self,
        card: &Card,
        placement: Placement,
        layout: &Layout,
        theme: &Theme,
    ) -> DirtyRegion {
        let text = if placement.hidden {
            "[??]".to_string()
        } else {
            let code = if theme.suit_color(card.suit()) == theme.red {
                "31"
            } else {
                "0"
            };
            format!(
                "[\u{1b}[{code}m{}{}\u{1b}[0m]",
                card.rank().label(),
                card.suit().symbol()
            )
        };
        self.cells.insert((placement.y, placement.x), text);
        layout.body(placement.x, placement.y)
    }

    fn erase(&mut self, placement: Placement, layout: &Layout, _theme: &Theme) -> DirtyRegion {
        self.cells.remove(&(placement.y, placement.x));
        layout.erase_area(placement.x, placement.y)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let palette: ColorMap = [
        ("BLACK", 0x0000),
        ("BLUE", 0x0015),
        ("GREEN", 0x0540),
        ("RED", 0xA800),
        ("WHITE", 0xFFFF),
    ]
    .into_iter()
    .collect();

    let mut deck = match Deck::new(DeckOptions::default().with_card_width(64), &palette, seed) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Cannot build deck: {err}");
            return;
        }
    };

    let width = deck.layout().width();
    let height = deck.layout().height();
    let mut dealer = Hand::new(
        true,
        TABLE,
        PileLayout::default()
            .with_offset(width)
            .with_top_card_hidden(true),
    );
    let mut player = Hand::new(
        false,
        TABLE,
        PileLayout::default()
            .with_start(0, height * 3)
            .with_offset(width),
    );
    let mut table = TextTable::default();

    loop {
        match prompt_line("[p]lay or [q]uit: ").as_str() {
            "p" | "play" | "" => {}
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Unknown choice.");
                continue;
            }
        }

        deck.clear_table(&mut table);
        dealer.clear();
        player.clear();
        deck.shuffle();

        if let Err(err) = play_hand(&mut deck, &mut dealer, &mut player, &mut table) {
            println!("Round aborted: {err}");
        }
    }
}

fn play_hand(
    deck: &mut Deck,
    dealer: &mut Hand,
    player: &mut Hand,
    table: &mut TextTable,
) -> Result<(), Box<dyn std::error::Error>> {
    // Player, dealer, player, dealer hole card.
    for (to_dealer, top) in [(false, false), (true, false), (false, false), (true, true)] {
        let card = deck.draw_one()?;
        let hand = if to_dealer { &mut *dealer } else { &mut *player };
        hand.place(deck, table, card, top)?;
    }

    loop {
        print_table(deck, dealer, player, table);
        match prompt_line("[h]it or [s]tand: ").as_str() {
            "h" | "hit" => {
                let card = deck.draw_one()?;
                player.place(deck, table, card, false)?;
                if player.is_bust(deck) {
                    break;
                }
            }
            "s" | "stand" => break,
            "q" | "quit" => std::process::exit(0),
            _ => println!("Unknown action."),
        }
    }

    dealer.reveal(deck, table)?;
    if !player.is_bust(deck) {
        while dealer_draws(dealer.score(deck)) {
            let card = deck.draw_one()?;
            dealer.place(deck, table, card, false)?;
        }
    }

    print_table(deck, dealer, player, table);
    let outcome = settle(player.score(deck), dealer.score(deck));
    println!("{}\n", outcome.message());
    Ok(())
}

fn print_table(deck: &Deck, dealer: &Hand, player: &Hand, table: &TextTable) {
    println!("\nDeck: {} cards remaining", deck.remaining());
    table.print();
    println!(
        "Dealer shows {} | You have {}",
        dealer.visible_score(deck),
        player.score(deck)
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // End of input quits.
    if matches!(io::stdin().read_line(&mut input), Ok(0) | Err(_)) {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}
