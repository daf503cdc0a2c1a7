//! Style selection — deterministic opener/closer choice plus the per-tone
//! instruction block embedded in every prompt.

use serde::{Deserialize, Serialize};

/// Decorative openers. Selection hashes the query so the same question gets
/// the same opener on every run and in every process.
pub const OPENERS: &[&str] = &[
    "Comic fact-check time! 🕵️‍♂️✨",
    "Myth-busting cape on! 🦸‍♀️",
    "Let’s unpack this like a snack pack 🍿",
    "Science squad, assemble! 🧪",
];

/// Decorative closers. Indexed by a hash of the reversed query so the closer
/// varies independently of the opener. The display formatter strips whichever
/// of these the model echoes back, scanning in this order.
pub const CLOSERS: &[&str] = &[
    "Case closed. 🧠🔒",
    "Bookmark this for your next debate. 🔖",
    "Tell a friend and save a cow. 🐄💚",
    "Screenshottable truth unlocked. 📸✅",
];

/// Instruction used for any tone name outside the preset map.
pub const DEFAULT_STYLE_INSTRUCTION: &str = "Playful, clear, short.";

/// Named style preset. Affects only the instruction text sent to the model,
/// never control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Comic,
    Snarky,
    Warm,
}

impl Tone {
    /// Parses a tone name. Unrecognized names yield `None`; callers fall
    /// back to [`DEFAULT_STYLE_INSTRUCTION`].
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "comic" => Some(Tone::Comic),
            "snarky" => Some(Tone::Snarky),
            "warm" => Some(Tone::Warm),
            _ => None,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Comic => {
                "Playful, Gen Z, punchy sentences, 3–5 lines max. Use a couple of emojis. \
                 Be factual but encourage plant-based and animal-friendly choices."
            }
            Tone::Snarky => {
                "Witty, lightly sarcastic, 3–5 lines. Highlight animal welfare and ethical \
                 considerations, encouraging plant alternatives."
            }
            Tone::Warm => {
                "Empathetic, encouraging, friendly. 3–5 lines. Promote plant-based diets \
                 and animal-conscious choices warmly."
            }
        }
    }
}

/// Shape of the requested reply: flowing prose or a fixed bullet list.
/// Selects between the two rule blocks in [`crate::reply::prompts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFormat {
    #[default]
    Prose,
    Bullets,
}

/// Opener, closer, and tone instruction chosen for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSelection {
    pub opener: &'static str,
    pub closer: &'static str,
    pub style_instruction: &'static str,
}

/// Picks the opener from the query text and the closer from the reversed
/// query text. Pure: same `(query, tone)` always yields the same selection.
pub fn select_style(query: &str, tone: &str) -> StyleSelection {
    let reversed: String = query.chars().rev().collect();
    StyleSelection {
        opener: OPENERS[(fnv1a(query.as_bytes()) % OPENERS.len() as u64) as usize],
        closer: CLOSERS[(fnv1a(reversed.as_bytes()) % CLOSERS.len() as u64) as usize],
        style_instruction: Tone::parse(tone).map_or(DEFAULT_STYLE_INSTRUCTION, Tone::instruction),
    }
}

/// FNV-1a over raw bytes. The std hasher is randomized per process, which
/// would make opener/closer selection unstable across runs.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET_BASIS, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_vectors() {
        // Published FNV-1a 64-bit test vectors.
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_select_style_is_deterministic() {
        let first = select_style("cow milk is the only source of calcium", "comic");
        let second = select_style("cow milk is the only source of calcium", "comic");
        assert_eq!(first, second);
    }

    #[test]
    fn test_selection_comes_from_fixed_lists() {
        let style = select_style("do fish feel pain", "warm");
        assert!(OPENERS.contains(&style.opener));
        assert!(CLOSERS.contains(&style.closer));
    }

    #[test]
    fn test_unknown_tone_gets_default_instruction() {
        for tone in ["sardonic", "COMICAL", "", "  "] {
            let style = select_style("any query", tone);
            assert_eq!(style.style_instruction, DEFAULT_STYLE_INSTRUCTION);
        }
    }

    #[test]
    fn test_known_tones_parse_case_insensitively() {
        assert_eq!(Tone::parse("Comic"), Some(Tone::Comic));
        assert_eq!(Tone::parse(" SNARKY "), Some(Tone::Snarky));
        assert_eq!(Tone::parse("warm"), Some(Tone::Warm));
    }

    #[test]
    fn test_each_tone_has_a_distinct_instruction() {
        let comic = Tone::Comic.instruction();
        let snarky = Tone::Snarky.instruction();
        let warm = Tone::Warm.instruction();
        assert_ne!(comic, snarky);
        assert_ne!(snarky, warm);
        assert_ne!(comic, warm);
    }

    #[test]
    fn test_tone_only_affects_instruction_not_bookends() {
        let comic = select_style("is honey vegan", "comic");
        let warm = select_style("is honey vegan", "warm");
        assert_eq!(comic.opener, warm.opener);
        assert_eq!(comic.closer, warm.closer);
        assert_ne!(comic.style_instruction, warm.style_instruction);
    }

    #[test]
    fn test_reply_format_defaults_to_prose() {
        assert_eq!(ReplyFormat::default(), ReplyFormat::Prose);
        let parsed: ReplyFormat = serde_json::from_str("\"bullets\"").unwrap();
        assert_eq!(parsed, ReplyFormat::Bullets);
    }
}
