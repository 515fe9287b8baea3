use passgen::pass::charset::{DIGITS, LETTERS, SYMBOLS};
use passgen::{Error, Pool, Rules, pass};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn expected_pool(letters: bool, digits: bool, symbols: bool) -> String {
    let mut pool = String::new();
    if letters {
        pool.push_str(LETTERS);
    }
    if digits {
        pool.push_str(DIGITS);
    }
    if symbols {
        pool.push_str(SYMBOLS);
    }
    pool
}

#[test]
fn every_valid_request_yields_exact_length_from_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for mask in 1u8..8 {
        let (letters, digits, symbols) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        let allowed = expected_pool(letters, digits, symbols);

        for length in [1, 2, 7, 8, 13, 64, 257] {
            let password =
                pass::generate_with_rules(&mut rng, length, letters, digits, symbols).unwrap();
            assert_eq!(password.len(), length);
            assert!(
                password.chars().all(|c| allowed.contains(c)),
                "{password:?} escaped pool {allowed:?}"
            );
        }
    }
}

#[test]
fn nothing_selected_fails_for_any_length() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for length in [1, 8, 12, 1000] {
        let err = pass::generate_with_rules(&mut rng, length, false, false, false).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}

#[test]
fn zero_length_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let err = pass::generate_with_rules(&mut rng, 0, true, true, true).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(err.to_string(), "invalid argument: length must be greater than 0");

    let err = pass::generate_with_rules(&mut rng, 5, false, false, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: at least one character set must be selected"
    );
}

#[test]
fn simple_and_secure_shapes() {
    let mut rng = passgen::rand::csprng();
    let secure_pool = expected_pool(true, true, true);
    assert_eq!(secure_pool.len(), 87);

    for _ in 0..500 {
        let simple = pass::generate_simple(&mut rng);
        assert_eq!(simple.len(), 8);
        assert!(simple.chars().all(|c| LETTERS.contains(c)));

        let secure = pass::generate_secure(&mut rng);
        assert_eq!(secure.len(), 12);
        assert!(secure.chars().all(|c| secure_pool.contains(c)));
    }
}

#[test]
fn replayed_source_replays_passwords() {
    let rules = Rules::new(32, true, true, true);
    let first: Vec<String> = {
        let mut rng = passgen::rand::seeded(99);
        (0..4)
            .map(|_| rules.generate(&mut rng).unwrap().into_string())
            .collect()
    };
    let second: Vec<String> = {
        let mut rng = passgen::rand::seeded(99);
        (0..4)
            .map(|_| rules.generate(&mut rng).unwrap().into_string())
            .collect()
    };
    assert_eq!(first, second);
    assert_ne!(first[0], first[1]);
}

/// Chi-square goodness of fit per position against a uniform pool.
#[test]
fn draws_are_roughly_uniform_at_every_position() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xd1ce);
    let pool = Pool::secure();
    let length = 4;
    let trials = 87 * 200;

    let mut counts = vec![vec![0u32; pool.len()]; length];
    for _ in 0..trials {
        let password = pass::draw_from_pool(&mut rng, pool, length);
        for (position, c) in password.chars().enumerate() {
            let index = pool.chars().iter().position(|&p| p == c).unwrap();
            counts[position][index] += 1;
        }
    }

    let expected = trials as f64 / pool.len() as f64;
    for (position, row) in counts.iter().enumerate() {
        let chi2: f64 = row
            .iter()
            .map(|&n| {
                let d = n as f64 - expected;
                d * d / expected
            })
            .sum();
        // 86 degrees of freedom: mean 86, p = 1e-6 cutoff sits near 160.
        assert!(chi2 < 160.0, "position {position}: chi2 = {chi2:.1}");
        assert!(row.iter().all(|&n| n > 0), "position {position} missed a char");
    }
}

#[test]
fn larger_subsets_dominate_mixed_pools() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let password = pass::generate_with_rules(&mut rng, 20_000, true, true, false).unwrap();
    let digits = password.chars().filter(|c| c.is_ascii_digit()).count();
    let share = digits as f64 / 20_000.0;
    // 10 of 62 characters are digits.
    assert!((share - 10.0 / 62.0).abs() < 0.02, "digit share {share}");
}
