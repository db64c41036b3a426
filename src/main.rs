mod category;
mod combinatorics;
mod deck;
mod enumerate;
mod error;
mod pattern;
mod probability;
mod prompt;
mod report;

use anyhow::Context;
use clap::Parser;

use deck::DeckParameters;
use probability::Overlap;

/// Exact hand-category probabilities for a generalized deck.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of ranks.
    #[arg(long, default_value_t = 13)]
    rank: u32,

    /// Number of suits.
    #[arg(long, default_value_t = 4)]
    suit: u32,

    /// Identical copies of every (rank, suit) card.
    #[arg(long, default_value_t = 1)]
    duplicate: u32,

    /// Cards drawn into a hand.
    #[arg(long, default_value_t = 5)]
    hand: u32,

    /// Ask for each parameter on stdin, offering the flag values as defaults.
    #[arg(short, long)]
    interactive: bool,

    /// How overlapping categories are removed.
    #[arg(long, value_enum, default_value_t = Overlap::Exclusive)]
    overlap: Overlap,

    /// Refuse empty decks and hands larger than the deck.
    #[arg(long)]
    strict: bool,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Also deal every hand and compare (small decks only).
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let flags = DeckParameters::new(args.rank, args.suit, args.duplicate, args.hand);
    let deck = if args.interactive {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        prompt::ask_deck(&mut input, &mut output, flags)?
    } else {
        flags
    };
    if args.strict {
        deck.validate().context("invalid deck")?;
    }
    log::info!("{:?} with {:?} overlap", deck, args.overlap);

    let results = probability::distribution(&deck, args.overlap);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", report::render(deck.deck_size(), &results));
    }

    if args.verify {
        let tally = enumerate::enumerate(&deck, enumerate::DEFAULT_LIMIT)
            .context("brute-force verification")?;
        println!("{}", report::render_comparison(&results, &tally.distribution()));
    }
    Ok(())
}
