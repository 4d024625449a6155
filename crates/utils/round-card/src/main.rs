//! # Round Card Utility
//!
//! Resolves expired prediction rounds into the card the UI would draw and
//! prints the result as JSON. Useful for checking what users saw for a round.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package round-card --bin round_card -- rounds.json
//! cargo run --package round-card --bin round_card -- - --now 1704067600 < round.json
//! ```
//!
//! The input is one card input or an array of them:
//!
//! ```json
//! {
//!   "round": {
//!     "epoch": 1024,
//!     "lock_price": "150000000",
//!     "close_price": "155000000",
//!     "ai_price": "1510000000000000000",
//!     "oracle_called": true,
//!     "close_timestamp": 1704067500
//!   },
//!   "ledger": { "position": "bull", "amount": "2000000", "claimed": false },
//!   "formatted_bull_multiplier": "1.90x",
//!   "formatted_bear_multiplier": "2.10x"
//! }
//! ```
//!
//! `--now` pins the clock used for failed round detection.

use std::io::{self, Read};

use anyhow::{bail, Context};
use lib_core::config::init_config;
use lib_core::predictions::{Clock, ExpiredRoundCard, ExpiredRoundInput, FixedClock, SystemClock};
use serde::Deserialize;
use shared::dto::round::Ledger;

/// A card input, optionally with the user's ledger instead of the flags.
#[derive(Debug, Deserialize)]
struct CardRequest {
    #[serde(flatten)]
    input: ExpiredRoundInput,
    #[serde(default)]
    ledger: Option<Ledger>,
}

impl CardRequest {
    fn into_input(self) -> ExpiredRoundInput {
        match &self.ledger {
            Some(ledger) => self.input.with_ledger(ledger),
            None => self.input,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Requests {
    Many(Vec<CardRequest>),
    One(Box<CardRequest>),
}

struct Args {
    path: String,
    now: Option<i64>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut path = None;
    let mut now = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--now" => {
                let value = args.next().context("--now needs a unix timestamp")?;
                now = Some(value.parse().with_context(|| format!("invalid --now value {value:?}"))?);
            }
            _ if path.is_none() => path = Some(arg),
            _ => bail!("unexpected argument {arg:?}"),
        }
    }

    let path = path.context("usage: round_card <input.json|-> [--now <unix-seconds>]")?;
    Ok(Args { path, now })
}

fn read_input(path: &str) -> anyhow::Result<String> {
    let mut raw = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut raw).context("failed to read stdin")?;
    } else {
        raw = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    }
    Ok(raw)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = init_config()?;
    lib_core::logging::init(config)?;

    let args = parse_args(std::env::args().skip(1))?;
    let clock: Box<dyn Clock> = match args.now {
        Some(secs) => Box::new(FixedClock(lib_utils::from_unix_seconds(secs)?)),
        None => Box::new(SystemClock),
    };

    let raw = read_input(&args.path)?;
    let requests: Requests = serde_json::from_str(&raw).map_err(lib_core::AppError::from)?;
    let requests = match requests {
        Requests::Many(list) => list,
        Requests::One(one) => vec![*one],
    };

    tracing::info!(count = requests.len(), path = %args.path, "Resolving round cards");

    let cards: Vec<ExpiredRoundCard> = requests
        .into_iter()
        .map(|request| ExpiredRoundCard::build(&request.into_input(), config.buffer_seconds, clock.as_ref()))
        .collect();

    println!("{}", serde_json::to_string_pretty(&cards)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["rounds.json", "--now", "1704067600"]).unwrap();
        assert_eq!(parsed.path, "rounds.json");
        assert_eq!(parsed.now, Some(1_704_067_600));

        let parsed = args(&["--now", "5", "-"]).unwrap();
        assert_eq!(parsed.path, "-");
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["a.json", "--now"]).is_err());
        assert!(args(&["a.json", "--now", "soon"]).is_err());
    }

    #[test]
    fn test_request_with_ledger() {
        let raw = r#"[{
            "round": {"epoch": 2, "lock_price": "150000000", "close_price": "155000000", "oracle_called": true},
            "ledger": {"position": "bear", "amount": "7", "claimed": true},
            "formatted_bull_multiplier": "1.9x",
            "formatted_bear_multiplier": "2.1x"
        }]"#;

        let Requests::Many(list) = serde_json::from_str::<Requests>(raw).unwrap() else {
            panic!("expected a list");
        };
        let input = list.into_iter().next().unwrap().into_input();

        assert_eq!(input.bet_amount, Some(7));
        assert!(input.entry.has_entered_down);
        assert!(input.claim.has_claimed_down);
    }

    #[test]
    fn test_single_request() {
        let raw = r#"{
            "round": {"epoch": 2},
            "formatted_bull_multiplier": "1.9x",
            "formatted_bear_multiplier": "2.1x"
        }"#;

        assert!(matches!(serde_json::from_str::<Requests>(raw).unwrap(), Requests::One(_)));
    }
}
