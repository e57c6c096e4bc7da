//! Bracket pairing built on [`PairMap`](crate::PairMap).
//!
//! Pairs every Unicode opening bracket with its closing counterpart, plus
//! `<` and `>`, which Unicode does not class as brackets but which pair up
//! in practice. Characters outside the tables pass through unchanged, so a
//! caller can compare the result against the input to detect non-brackets.

use std::sync::OnceLock;

use crate::pair_map::PairMap;

/// Opening brackets; the closer at the same position in [`CLOSERS`] is the
/// counterpart. U+2329/U+232A are written as escapes to keep them apart
/// from the visually identical CJK angle brackets U+3008/U+3009.
const OPENERS: &[char] = &[
    '(', '<', '[', '{', '༺', '༼', '᚛', '⁅', '⁽', '₍', '⌈', '⌊', '\u{2329}', '❨', '❪', '❬', '❮',
    '❰', '❲', '❴', '⟅', '⟦', '⟨', '⟪', '⟬', '⟮', '⦃', '⦅', '⦇', '⦉', '⦋', '⦍', '⦏', '⦑', '⦓',
    '⦕', '⦗', '⧘', '⧚', '⧼', '⸢', '⸤', '⸦', '⸨', '\u{3008}', '《', '「', '『', '【', '〔', '〖',
    '〘', '〚', '〝', '﴿', '︗', '︵', '︷', '︹', '︻', '︽', '︿', '﹁', '﹃', '﹇', '﹙', '﹛',
    '﹝', '（', '［', '｛', '｟', '｢',
];

const CLOSERS: &[char] = &[
    ')', '>', ']', '}', '༻', '༽', '᚜', '⁆', '⁾', '₎', '⌉', '⌋', '\u{232A}', '❩', '❫', '❭', '❯',
    '❱', '❳', '❵', '⟆', '⟧', '⟩', '⟫', '⟭', '⟯', '⦄', '⦆', '⦈', '⦊', '⦌', '⦎', '⦐', '⦒', '⦔',
    '⦖', '⦘', '⧙', '⧛', '⧽', '⸣', '⸥', '⸧', '⸩', '\u{3009}', '》', '」', '』', '】', '〕', '〗',
    '〙', '〛', '〞', '﴾', '︘', '︶', '︸', '︺', '︼', '︾', '﹀', '﹂', '﹄', '﹈', '﹚', '﹜',
    '﹞', '）', '］', '｝', '｠', '｣',
];

fn open_to_close() -> &'static PairMap {
    static MAP: OnceLock<PairMap> = OnceLock::new();
    MAP.get_or_init(|| {
        PairMap::new(
            OPENERS
                .iter()
                .zip(CLOSERS.iter())
                .map(|(&o, &c)| (o as u32, c as u32)),
        )
        .expect("bracket openers are unique")
    })
}

fn close_to_open() -> &'static PairMap {
    static MAP: OnceLock<PairMap> = OnceLock::new();
    MAP.get_or_init(|| {
        PairMap::new(
            CLOSERS
                .iter()
                .zip(OPENERS.iter())
                .map(|(&c, &o)| (c as u32, o as u32)),
        )
        .expect("bracket closers are unique")
    })
}

/// The counterpart of a bracket character, or `c` unchanged when `c` is not
/// a recognized bracket.
pub fn match_bracket(c: char) -> char {
    let cp = c as u32;
    open_to_close()
        .get(cp)
        .or_else(|| close_to_open().get(cp))
        .and_then(char::from_u32)
        .unwrap_or(c)
}

/// Reverse a string while swapping brackets, so nesting still reads
/// correctly in the reversed text.
pub fn reverse_with_brackets(s: &str) -> String {
    s.chars().rev().map(match_bracket).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_pairs() {
        assert_eq!(match_bracket('('), ')');
        assert_eq!(match_bracket(')'), '(');
        assert_eq!(match_bracket('<'), '>');
        assert_eq!(match_bracket('>'), '<');
        assert_eq!(match_bracket('['), ']');
        assert_eq!(match_bracket('{'), '}');
    }

    #[test]
    fn test_non_bracket_passes_through() {
        assert_eq!(match_bracket('a'), 'a');
        assert_eq!(match_bracket('-'), '-');
        assert_eq!(match_bracket('個'), '個');
    }

    #[test]
    fn test_every_pair_round_trips() {
        assert_eq!(OPENERS.len(), CLOSERS.len());
        for (&o, &c) in OPENERS.iter().zip(CLOSERS.iter()) {
            assert_eq!(match_bracket(o), c, "opener {:?} should close as {:?}", o, c);
            assert_eq!(match_bracket(c), o, "closer {:?} should open as {:?}", c, o);
        }
    }

    #[test]
    fn test_cjk_and_deprecated_angles_stay_distinct() {
        assert_eq!(match_bracket('\u{2329}'), '\u{232A}');
        assert_eq!(match_bracket('\u{3008}'), '\u{3009}');
    }

    #[test]
    fn test_reverse_with_brackets() {
        assert_eq!(reverse_with_brackets("(ab)"), "(ba)");
        assert_eq!(reverse_with_brackets("f(x[1])"), "([1]x)f");
        assert_eq!(reverse_with_brackets("plain"), "nialp");
        assert_eq!(reverse_with_brackets(""), "");
    }
}
