use anyhow::Context;
use clap::{Parser, Subcommand};
use poker_ranking::cards::Rank;
use poker_ranking::deck::Deck;
use poker_ranking::hand::{Hand, HAND_SIZE};
use poker_ranking::ranking::showdown;
use std::io::{self, IsTerminal};

#[derive(Parser)]
#[command(author, version = poker_ranking::VERSION, about = "Rank five-card poker hands", long_about = None)]
struct Cli {
    /// Print cards without ANSI colours
    #[arg(long, global = true)]
    plain: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank hands of five cards each, e.g. "A♣ K♣ Q♥ J♦ 10♣" or "As-Kd-Qh-Jc-Ts"
    Rank {
        #[arg(required = true)]
        hands: Vec<String>,
    },
    /// Deal five cards to each player from a shuffled deck and show the showdown
    Deal {
        #[arg(long, default_value_t = 4)]
        players: usize,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Use a short deck, Seven to Ace
        #[arg(long)]
        short: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let plain = cli.plain || !io::stdout().is_terminal();

    let hands: Vec<Hand> = match cli.command {
        Command::Rank { hands } => hands
            .iter()
            .map(|s| s.parse::<Hand>().with_context(|| format!("cannot rank '{s}'")))
            .collect::<anyhow::Result<_>>()?,
        Command::Deal { players, seed, short } => {
            let mut deck = if short {
                Deck::with_ranks(&Rank::ALL[Rank::Seven.index()..])
            } else {
                Deck::standard()
            };
            match seed {
                Some(seed) => deck.shuffle_seeded(seed),
                None => deck.shuffle_with(&mut rand::rng()),
            }
            deck.deal(HAND_SIZE, players)?
        }
    };

    for (place, (seat, ranking)) in showdown(&hands).into_iter().enumerate() {
        let hand = &hands[seat];
        // escape codes would break column widths, so cards go last
        let cards = if plain { format!("{hand:#}") } else { hand.to_string() };
        println!("{:>2}. seat {:<2} {:<16} {}", place + 1, seat + 1, ranking.category(), cards);
    }
    Ok(())
}
