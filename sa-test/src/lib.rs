//! Helpers to test sentence aligners against an exhaustive reference.
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sa_types::*;

const WORDS: &[&str] = &[
    "the", "a", "cat", "dog", "sat", "ran", "on", "mat", "big", "red", "bird", "sky", "is", "was",
    "blue", "green", "house", "tree", "apple", "river", "book", "pen", "first", "second", "third",
    "sentence", "here", "different", "new", "one",
];

/// Hardcoded document pairs, as plain sentences.
pub fn test_documents() -> Vec<(Vec<&'static str>, Vec<&'static str>)> {
    vec![
        // identical
        (
            vec!["this is sentence one", "this is sentence two", "this is three"],
            vec!["this is sentence one", "this is sentence two", "this is three"],
        ),
        // slightly modified
        (
            vec!["this is first sentence", "second sentence here", "third one"],
            vec!["this is first sentence", "second sentence changed", "third one"],
        ),
        // completely different
        (
            vec!["cat dog bird", "house car tree", "apple banana"],
            vec!["red blue green", "mountain river sea", "book pen paper"],
        ),
        // partial overlap
        (
            vec!["first sentence", "second here", "third different", "fourth unique"],
            vec!["first sentence", "second here", "totally new", "another one"],
        ),
        // reordered
        (
            vec!["aaaa aaaa", "bb"],
            vec!["bb", "aaaa aaaa"],
        ),
        // unequal lengths
        (
            vec!["one", "two three", "four five six", "seven"],
            vec!["two three four"],
        ),
    ]
}

fn chars(s: &Sentence) -> Vec<char> {
    s.tokens().iter().flat_map(|t| t.chars()).collect()
}

/// Full-table Levenshtein distance.
fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> Cost {
    let mut dp = vec![vec![0 as Cost; b.len() + 1]; a.len() + 1];
    for i in 0..=a.len() {
        dp[i][0] = i as Cost;
    }
    for j in 0..=b.len() {
        dp[0][j] = j as Cost;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let sub = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + sub);
        }
    }
    dp[a.len()][b.len()]
}

/// Edit distance between two sentences, counting characters (spaces not
/// included) or whole tokens.
pub fn reference_distance(mode: UnitMode, a: &Sentence, b: &Sentence) -> Cost {
    match mode {
        UnitMode::Character => levenshtein(&chars(a), &chars(b)),
        UnitMode::Token => levenshtein(a.tokens(), b.tokens()),
    }
}

/// `r[i][j]`: the optimal cost of aligning `a[i..]` with `b[j..]`, by
/// exhaustive dynamic programming over the whole grid.
pub fn remaining_costs(a: &Document, b: &Document, mode: UnitMode) -> Vec<Vec<Cost>> {
    let (m, n) = (a.len(), b.len());
    let mut r = vec![vec![0 as Cost; n + 1]; m + 1];
    for i in (0..=m).rev() {
        for j in (0..=n).rev() {
            if i == m && j == n {
                continue;
            }
            let mut best = Cost::MAX;
            if i < m && j < n {
                best = best.min(reference_distance(mode, &a[i], &b[j]) + r[i + 1][j + 1]);
            }
            if i < m {
                best = best.min(a[i].size(mode) + r[i + 1][j]);
            }
            if j < n {
                best = best.min(b[j].size(mode) + r[i][j + 1]);
            }
            r[i][j] = best;
        }
    }
    r
}

pub fn reference_cost(a: &Document, b: &Document, mode: UnitMode) -> Cost {
    remaining_costs(a, b, mode)[0][0]
}

fn random_sentence(rng: &mut impl Rng) -> Sentence {
    let len = rng.gen_range(1..=6);
    Sentence::new(
        (0..len)
            .map(|_| WORDS.choose(rng).unwrap().to_string())
            .collect(),
    )
}

/// Change, insert, or delete one word.
fn mutate(rng: &mut impl Rng, s: &Sentence) -> Sentence {
    let mut tokens = s.tokens().to_vec();
    let word = WORDS.choose(rng).unwrap().to_string();
    let pos = rng.gen_range(0..tokens.len());
    match rng.gen_range(0..3) {
        0 => tokens[pos] = word,
        1 => tokens.insert(pos, word),
        _ if tokens.len() > 1 => {
            tokens.remove(pos);
        }
        _ => tokens.push(word),
    }
    Sentence::new(tokens)
}

/// A random document `a` with `1..=max_sentences` sentences, and a document `b`
/// derived from it by keeping, editing, dropping, replacing, and inserting
/// sentences, so that the pair contains both copies and unrelated text.
pub fn random_document_pair(rng: &mut impl Rng, max_sentences: usize) -> (Document, Document) {
    let m = rng.gen_range(1..=max_sentences);
    let a = (0..m).map(|_| random_sentence(rng)).collect_vec();
    let mut b = vec![];
    for s in &a {
        match rng.gen_range(0..10) {
            0..=2 => b.push(s.clone()),
            3..=5 => b.push(mutate(rng, s)),
            6 => {}
            7 | 8 => b.push(random_sentence(rng)),
            _ => {
                b.push(random_sentence(rng));
                b.push(s.clone());
            }
        }
    }
    b.truncate(max_sentences);
    if b.is_empty() {
        b.push(random_sentence(rng));
    }
    (Document::new(a), Document::new(b))
}

/// Seeded random document pairs, tagged with their seed and size bound.
pub fn gen_documents(
    count: u64,
    max_sentences: usize,
) -> impl Iterator<Item = ((Document, Document), (u64, usize))> {
    (0..count).map(move |seed| {
        let rng = &mut ChaCha8Rng::seed_from_u64(seed);
        let n = rng.gen_range(1..=max_sentences);
        (random_document_pair(rng, n), (seed, n))
    })
}

/// Check that `result` describes a valid alignment of `a` and `b`:
/// - the path is contiguous from `(0, 0)` to `(m, n)` and strictly increases `i+j`,
/// - every step has the cost of its operation, and the steps sum to the total,
/// - there is one candidate per align step, in path order, with a similarity in `[0, 1]`.
pub fn verify_result(result: &AlignmentResult, a: &Document, b: &Document, mode: UnitMode) {
    let path = &result.alignment_path;
    assert!(!path.is_empty(), "Empty path for non-empty documents");
    assert_eq!(path.first().unwrap().from, Pos(0, 0));
    assert_eq!(path.last().unwrap().to, Pos::target(a, b));
    for (x, y) in path.iter().tuple_windows() {
        assert_eq!(x.to, y.from, "Path is not contiguous: {x:?} {y:?}");
    }
    for step in path {
        assert!(step.to.fr() > step.from.fr());
        assert_eq!(step.to, step.from + step.op.delta());
        let expected = match step.op {
            Operation::Align => reference_distance(
                mode,
                &a[step.from.0 as usize],
                &b[step.from.1 as usize],
            ),
            Operation::Delete => a[step.from.0 as usize].size(mode),
            Operation::Insert => b[step.from.1 as usize].size(mode),
        };
        assert_eq!(step.cost, expected, "Wrong cost for {step:?}");
    }
    assert_eq!(path.iter().map(|s| s.cost).sum::<Cost>(), result.total_cost);

    let aligned = path
        .iter()
        .filter(|s| s.op == Operation::Align)
        .collect_vec();
    assert_eq!(aligned.len(), result.plagiarism_candidates.len());
    for (step, c) in aligned.iter().zip(&result.plagiarism_candidates) {
        assert_eq!((Some(c.index_a), Some(c.index_b)), (step.index_a(), step.index_b()));
        assert_eq!(c.cost, step.cost);
        assert!((0.0..=1.0).contains(&c.similarity), "{c:?}");
    }
}

pub fn test_aligner_on_input(
    a: &Document,
    b: &Document,
    mode: UnitMode,
    aligner: &mut impl FnMut(&Document, &Document) -> Result<AlignmentResult, AlignError>,
    params: &str,
) {
    let result = aligner(a, b).unwrap_or_else(|e| panic!("{params}\nAlignment failed: {e}"));
    let cost = reference_cost(a, b, mode);
    assert_eq!(
        cost,
        result.total_cost,
        "\n{params}\nmode {mode:?}\na {:?}\nb {:?}",
        a.iter().map(|s| s.text()).collect_vec(),
        b.iter().map(|s| s.text()).collect_vec(),
    );
    verify_result(&result, a, b, mode);
}

/// Test the given aligner on the hardcoded documents and on random pairs of
/// up to `max_sentences` sentences each.
///
/// - The cost reported by the aligner must match the exhaustive reference.
/// - The returned path and candidates must be valid.
pub fn test_aligner_up_to(
    mode: UnitMode,
    mut aligner: impl FnMut(&Document, &Document) -> Result<AlignmentResult, AlignError>,
    max_sentences: usize,
) {
    for (a, b) in test_documents() {
        let (a, b) = (Document::from_texts(a), Document::from_texts(b));
        test_aligner_on_input(&a, &b, mode, &mut aligner, "hardcoded test_documents");
    }
    for ((a, b), (seed, n)) in gen_documents(200, max_sentences) {
        test_aligner_on_input(
            &a,
            &b,
            mode,
            &mut aligner,
            &format!("seed {seed:>5} n {n:>3}"),
        );
    }
}

pub fn test_aligner(
    mode: UnitMode,
    aligner: impl FnMut(&Document, &Document) -> Result<AlignmentResult, AlignError>,
) {
    test_aligner_up_to(mode, aligner, 12);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference() {
        let a = Document::from_texts(["the cat sat"]);
        let b = Document::from_texts(["the cat sat"]);
        assert_eq!(reference_cost(&a, &b, UnitMode::Character), 0);

        let a = Document::from_texts(["aaaa aaaa", "bb"]);
        let b = Document::from_texts(["bb", "aaaa aaaa"]);
        assert_eq!(reference_cost(&a, &b, UnitMode::Character), 4);
        assert_eq!(reference_cost(&a, &b, UnitMode::Token), 2);
    }

    #[test]
    fn random_pairs_are_valid() {
        for ((a, b), (_, n)) in gen_documents(50, 6) {
            assert!(a.validate(DocId::A).is_ok());
            assert!(b.validate(DocId::B).is_ok());
            assert!(a.len() <= n && b.len() <= n);
        }
    }
}
