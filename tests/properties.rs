use pyre::{
    config::Config,
    db::implication::{Implication, ImplicationDB},
    structures::{phoneme::Phoneme, signed_feature::SignedFeature},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const FEATURES: [&str; 5] = ["voice", "nasal", "labial", "coronal", "sonorant"];
const TRIALS: usize = 500;

/// A phoneme over a small pool of features, so comparable pairs are common.
fn random_phoneme(rng: &mut StdRng) -> Phoneme {
    let mut phoneme = Phoneme::default();
    for feature in FEATURES {
        if rng.gen_bool(0.4) {
            phoneme.insert(SignedFeature::new(feature, rng.gen_bool(0.5)));
        }
    }
    phoneme
}

/// `phoneme` with some features of the pool it does not mention added.
fn random_extension(phoneme: &Phoneme, rng: &mut StdRng) -> Phoneme {
    let mut extension = phoneme.clone();
    for feature in FEATURES {
        if phoneme.sign_of(feature).is_none() && rng.gen_bool(0.5) {
            extension.insert(SignedFeature::new(feature, rng.gen_bool(0.5)));
        }
    }
    extension
}

fn check_minimal(implications: &[Implication]) {
    for (i, a) in implications.iter().enumerate() {
        assert!(!a.antecedent.contradicts(&a.consequent), "{a}");
        for (j, b) in implications.iter().enumerate() {
            if i != j {
                assert!(!a.dominates(b), "{a} dominates {b}");
                assert_ne!(a.antecedent, b.antecedent);
            }
        }
    }
}

mod order {

    use super::*;

    #[test]
    fn reflexive() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            assert!(p.is_subset_of(&p));
        }
    }

    #[test]
    fn antisymmetric() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            let q = random_phoneme(&mut rng);
            if p.is_subset_of(&q) && q.is_subset_of(&p) {
                assert_eq!(p, q);
            }
        }
    }

    #[test]
    fn transitive() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            let q = random_extension(&p, &mut rng);
            let r = random_extension(&q, &mut rng);
            assert!(p.is_subset_of(&q));
            assert!(q.is_subset_of(&r));
            assert!(p.is_subset_of(&r));
        }
    }

    #[test]
    fn empty_is_least() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            assert!(Phoneme::default().is_subset_of(&p));
            assert!(!Phoneme::default().contradicts(&p));
        }
    }
}

mod merging {

    use super::*;

    #[test]
    fn contradiction_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            let q = random_phoneme(&mut rng);
            assert_eq!(p.contradicts(&q), q.contradicts(&p));
        }
    }

    #[test]
    fn skipping_merge() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            let q = random_phoneme(&mut rng);

            let mut merged = p.clone();
            let result = merged.merge(&q);

            assert_eq!(result.is_err(), p.contradicts(&q));
            assert!(p.is_subset_of(&merged));
            if !p.contradicts(&q) {
                assert!(q.is_subset_of(&merged));
            }
        }
    }

    #[test]
    fn strict_merge() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..TRIALS {
            let p = random_phoneme(&mut rng);
            let q = random_phoneme(&mut rng);

            let mut merged = p.clone();
            match merged.try_merge(&q) {
                Ok(()) => assert!(p.is_subset_of(&merged) && q.is_subset_of(&merged)),
                Err(_) => assert_eq!(merged, p),
            }
        }
    }
}

mod implications {

    use super::*;

    #[test]
    fn minimal_after_insertions() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mut db = ImplicationDB::new(&Config::default());
            for _ in 0..40 {
                let antecedent = random_phoneme(&mut rng);
                let consequent = random_phoneme(&mut rng);
                let contradictory = antecedent.contradicts(&consequent);

                let result = db.insert(antecedent, consequent);
                assert_eq!(result.is_err(), contradictory);

                let stored = db.iter().cloned().collect::<Vec<_>>();
                check_minimal(&stored);
            }
        }
    }

    #[test]
    fn reassertion_is_redundant() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut db = ImplicationDB::new(&Config::default());

        for _ in 0..TRIALS {
            let _ = db.insert(random_phoneme(&mut rng), random_phoneme(&mut rng));
        }

        let stored = db.iter().cloned().collect::<Vec<_>>();
        for implication in &stored {
            let _ = db.insert(
                implication.antecedent.clone(),
                implication.consequent.clone(),
            );
        }
        assert_eq!(db.iter().cloned().collect::<Vec<_>>(), stored);
    }
}
