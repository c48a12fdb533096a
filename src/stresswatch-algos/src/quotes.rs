use rand::{Rng, seq::IndexedRandom};

pub const QUOTES: &[&str] = &[
    "🌿 Relax… one breath at a time.",
    "💪 You are stronger than your stress.",
    "✨ Just breathe, everything will be okay.",
];

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or_default()
}
