//! The cost of aligning two sentences: the unit-cost edit distance between
//! their units.
use crate::prelude::*;

/// A character code point or an interned token id.
pub type Unit = u32;

/// The minimal number of single unit insertions, deletions, and substitutions
/// to turn `a` into `b`. Units are compared using `eq(unit_of_a, unit_of_b)`.
///
/// Uses a single rolling row over the shorter input: `O(|a| |b|)` time and
/// `O(min(|a|, |b|))` memory.
pub fn edit_distance_by<T>(a: &[T], b: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> Cost {
    let (long, short, swapped) = if a.len() >= b.len() {
        (a, b, false)
    } else {
        (b, a, true)
    };
    if short.is_empty() {
        return long.len() as Cost;
    }

    // row[y] = dp[x][y]: distance between long[..x] and short[..y].
    let mut row: Vec<Cost> = (0..=short.len() as Cost).collect();
    for (x, ul) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = x as Cost + 1;
        for (y, us) in short.iter().enumerate() {
            let same = if swapped { eq(us, ul) } else { eq(ul, us) };
            let up = row[y + 1];
            row[y + 1] = min(min(up, row[y]) + 1, diag + (!same) as Cost);
            diag = up;
        }
    }
    row[short.len()]
}

pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> Cost {
    edit_distance_by(a, b, |x, y| x == y)
}

/// The edit distance between two sentences, counted in units of `mode`.
pub fn distance(mode: UnitMode, a: &Sentence, b: &Sentence) -> Cost {
    match mode {
        UnitMode::Character => {
            let a = a.tokens().iter().flat_map(|t| t.chars()).collect_vec();
            let b = b.tokens().iter().flat_map(|t| t.chars()).collect_vec();
            edit_distance(&a, &b)
        }
        UnitMode::Token => edit_distance(a.tokens(), b.tokens()),
    }
}

/// Maps the sentences of both documents to dense `Unit` sequences once per
/// alignment, so that comparing sentences is comparing integers.
///
/// Tokens are interned in a table shared by both documents.
#[derive(Debug, Clone)]
pub struct UnitMap {
    mode: UnitMode,
    tokens: HashMap<Token, Unit>,
}

impl UnitMap {
    pub fn new(mode: UnitMode) -> Self {
        Self {
            mode,
            tokens: HashMap::default(),
        }
    }

    pub fn units(&mut self, sentence: &Sentence) -> Vec<Unit> {
        match self.mode {
            UnitMode::Character => sentence
                .tokens()
                .iter()
                .flat_map(|t| t.chars())
                .map(|c| c as Unit)
                .collect(),
            UnitMode::Token => {
                let tokens = &mut self.tokens;
                sentence
                    .tokens()
                    .iter()
                    .map(|t| {
                        let next = tokens.len() as Unit;
                        *tokens.entry(t.clone()).or_insert(next)
                    })
                    .collect()
            }
        }
    }

    pub fn document_units(&mut self, doc: &Document) -> Vec<Vec<Unit>> {
        doc.iter().map(|s| self.units(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn s(text: &str) -> Sentence {
        Sentence::from_text(text)
    }

    #[test]
    fn basic() {
        assert_eq!(edit_distance(b"", b""), 0);
        assert_eq!(edit_distance(b"", b"abc"), 3);
        assert_eq!(edit_distance(b"abc", b""), 3);
        assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
        assert_eq!(edit_distance(b"sunday", b"saturday"), 3);
        assert_eq!(edit_distance(b"flaw", b"lawn"), 2);
        assert_eq!(edit_distance(b"abc", b"abc"), 0);
    }

    #[test]
    fn characters_ignore_spaces() {
        let mode = UnitMode::Character;
        assert_eq!(distance(mode, &s("this is test"), &s("this is test")), 0);
        assert_eq!(distance(mode, &s("hello world"), &s("hello")), 5);
        assert_eq!(distance(mode, &s("apple"), &s("banana")), 5);
        assert_eq!(distance(mode, &s("this is"), &s("this that")), 4);
        // "thecat" vs "the cat": only the space differs.
        assert_eq!(distance(mode, &s("thecat"), &s("the cat")), 0);
    }

    #[test]
    fn tokens_are_atomic() {
        let mode = UnitMode::Token;
        assert_eq!(distance(mode, &s("hello world"), &s("hello")), 1);
        assert_eq!(distance(mode, &s("this is"), &s("this that")), 1);
        assert_eq!(distance(mode, &s("the cat sat"), &s("the dog sat")), 1);
        assert_eq!(distance(mode, &s("a b c"), &s("c b a")), 2);
    }

    #[test]
    fn custom_equality() {
        let a = ["The", "Cat"];
        let b = ["the", "cat", "sat"];
        assert_eq!(edit_distance(&a, &b), 3);
        assert_eq!(edit_distance_by(&a, &b, |x, y| x.eq_ignore_ascii_case(y)), 1);
        // The closure always receives the unit of `a` first, also when `a` is shorter.
        assert_eq!(edit_distance_by(&b, &a, |x, y| x.eq_ignore_ascii_case(y)), 1);
        assert_eq!(edit_distance_by(&[1, 2], &[10, 20, 30], |x, y| x * 10 == *y), 1);
    }

    #[test]
    fn symmetric_and_matches_triple_accel() {
        let rng = &mut ChaCha8Rng::seed_from_u64(2718);
        for _ in 0..500 {
            let n = rng.gen_range(0..30);
            let m = rng.gen_range(0..30);
            let a: Vec<u8> = (0..n).map(|_| b"abcd"[rng.gen_range(0..4)]).collect();
            let b: Vec<u8> = (0..m).map(|_| b"abcd"[rng.gen_range(0..4)]).collect();
            let d = edit_distance(&a, &b);
            assert_eq!(d, edit_distance(&b, &a));
            assert_eq!(d, triple_accel::levenshtein_exp(&a, &b));
        }
    }

    #[test]
    fn unit_map() {
        let mut map = UnitMap::new(UnitMode::Token);
        let a = map.units(&s("the cat sat"));
        let b = map.units(&s("sat the mat"));
        assert_eq!(a, [0, 1, 2]);
        assert_eq!(b, [2, 0, 3]);

        let mut map = UnitMap::new(UnitMode::Character);
        assert_eq!(map.units(&s("ab c")), ['a' as Unit, 'b' as Unit, 'c' as Unit]);
    }
}
