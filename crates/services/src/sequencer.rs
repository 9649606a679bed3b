use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::QuestionSet;

/// Reorder a question set with a Fisher–Yates shuffle.
///
/// The random source is an explicit parameter so callers control seeding:
/// the binary passes a freshly seeded `rand::rng()`, tests pass a seeded
/// `StdRng`. The pairs themselves are untouched; only their order changes.
#[must_use]
pub fn shuffle_questions<R: Rng + ?Sized>(mut set: QuestionSet, rng: &mut R) -> QuestionSet {
    set.as_mut_slice().shuffle(rng);
    debug!("shuffled {} questions", set.len());
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionPair;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set_of(n: usize) -> QuestionSet {
        QuestionSet::new(
            (0..n)
                .map(|i| QuestionPair::new(format!("q{i}"), format!("a{i}")))
                .collect(),
        )
    }

    fn prompts(set: &QuestionSet) -> Vec<String> {
        set.iter().map(|p| p.prompt().to_owned()).collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = set_of(20);
        let mut rng = StdRng::seed_from_u64(7);

        let shuffled = shuffle_questions(original.clone(), &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut before = prompts(&original);
        let mut after = prompts(&shuffled);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let original = set_of(10);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let first = shuffle_questions(original.clone(), &mut a);
        let second = shuffle_questions(original, &mut b);

        assert_eq!(prompts(&first), prompts(&second));
    }

    #[test]
    fn singleton_and_empty_sets_are_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);

        let one = shuffle_questions(set_of(1), &mut rng);
        assert_eq!(prompts(&one), vec!["q0"]);

        let none = shuffle_questions(set_of(0), &mut rng);
        assert!(none.is_empty());
    }
}
