//! `avl-insert` — insert integer keys and print the resulting tree.
//!
//! Usage:
//!   avl-insert [KEY...]
//!
//! Keys come from the arguments, or whitespace-separated from stdin when
//! there are none. Set `RUST_LOG=debug` to see each rebalance.

use delta_avl::AvlTree;
use std::io::{self, Read};

fn parse_keys(tokens: &[String]) -> Result<Vec<i64>, String> {
    tokens
        .iter()
        .map(|t| t.parse::<i64>().map_err(|_| format!("Please enter a valid integer: {t}")))
        .collect()
}

fn main() {
    env_logger::init();

    let mut tokens: Vec<String> = std::env::args().skip(1).collect();
    if tokens.is_empty() {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        tokens = buf.split_whitespace().map(str::to_string).collect();
    }

    let keys = match parse_keys(&tokens) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut tree = AvlTree::with_capacity(keys.len());
    for key in keys {
        tree.insert(key);
        log::info!("inserted {key}, height {}", tree.height());
    }

    println!("{tree}");
    println!("{}", tree.to_debug_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_integers() {
        let tokens = vec!["1".to_string(), "x".to_string()];
        assert_eq!(
            parse_keys(&tokens),
            Err("Please enter a valid integer: x".to_string())
        );
    }

    #[test]
    fn parses_negative_keys() {
        let tokens = vec!["-3".to_string(), "7".to_string()];
        assert_eq!(parse_keys(&tokens), Ok(vec![-3, 7]));
    }
}
