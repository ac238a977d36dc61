//! Stock jokes for the `joke` command.

use rand::Rng;

const JOKES: &[&str] = &[
    "Why was the math book sad? It had too many problems!",
    "Parallel lines have so much in common. It's a shame they'll never meet.",
    "Why don't skeletons fight each other? They don't have the guts!",
    "What do you call fake spaghetti? An impasta!",
    "Why cant you hear a pterodactyl go to the bathroom? Because the p is silent!",
];

/// One of the stock jokes, chosen uniformly.
pub fn random_joke() -> &'static str {
    JOKES[rand::thread_rng().gen_range(0..JOKES.len())]
}
