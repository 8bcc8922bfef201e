//! Swipe decoder integration tests.

use card_picker::gesture::{DEAD_PAIR, MAX_DECODED, decode, decode_pair};
use card_picker::{Suit, Swipe};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use Swipe::{Down, Left, Right, Up};

#[test]
fn pair_table_is_literal() {
    let expected = [
        ((Up, Up), 12),
        ((Up, Left), 11),
        ((Up, Down), 13),
        ((Up, Right), 1),
        ((Left, Up), 10),
        ((Left, Left), 9),
        ((Left, Down), 8),
        ((Left, Right), 0),
        ((Down, Up), 0),
        ((Down, Left), 7),
        ((Down, Down), 6),
        ((Down, Right), 5),
        ((Right, Up), 2),
        ((Right, Left), 0),
        ((Right, Down), 4),
        ((Right, Right), 3),
    ];

    for ((first, second), value) in expected {
        assert_eq!(decode_pair(first, second), value, "{first:?} {second:?}");
        assert_eq!(decode(&[first, second]), Some(u64::from(value)));
    }
}

#[test]
fn single_swipes_decode_to_seeds() {
    assert_eq!(decode(&[]), None);
    assert_eq!(decode(&[Up]), Some(1));
    assert_eq!(decode(&[Right]), Some(2));
    assert_eq!(decode(&[Down]), Some(3));
    assert_eq!(decode(&[Left]), Some(4));
}

#[test]
fn longer_sequences_prepend_the_tail() {
    // head (up, right) = 1, tail (right) = 2
    assert_eq!(decode(&[Up, Right, Right]), Some(21));
    // head (right, right) = 3, tail (up, right) = 1
    assert_eq!(decode(&[Right, Right, Up, Right]), Some(13));
    // tail pairs of 10 or more keep both digits
    assert_eq!(decode(&[Right, Right, Up, Up]), Some(123));
    // dead head pair contributes a zero digit
    assert_eq!(decode(&[Left, Right, Up]), Some(10));
    // dead tail pair leaves a leading zero
    assert_eq!(decode(&[Right, Right, Down, Up]), Some(3));
}

#[test]
fn non_terminal_pairs_of_ten_or_more_count_as_zero() {
    assert_eq!(decode(&[Up, Up, Right]), Some(20));
    assert_eq!(decode(&[Up, Down, Up, Up]), Some(120));
    assert_eq!(decode(&[Left, Up, Up, Right, Left]), Some(410));
}

fn repeated(pair: [Swipe; 2], pairs: usize) -> Vec<Swipe> {
    std::iter::repeat_n(pair, pairs).flatten().collect()
}

#[test]
fn numbers_past_the_signed_range_have_no_mapping() {
    assert_eq!(MAX_DECODED, 9_223_372_036_854_775_807);

    // (up, right) = 1, (left, left) = 9
    assert_eq!(
        decode(&repeated([Up, Right], 19)),
        Some(1_111_111_111_111_111_111)
    );
    assert_eq!(
        decode(&repeated([Left, Left], 18)),
        Some(999_999_999_999_999_999)
    );

    // Both fit in a u64 but not in an i64.
    assert_eq!(decode(&repeated([Left, Left], 19)), None);
    assert_eq!(decode(&repeated([Up, Right], 20)), None);
    assert_eq!(decode(&repeated([Up, Right], 21)), None);
}

#[test]
fn random_sequences_decode_digit_by_digit() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..500 {
        let len = rng.random_range(3..12);
        let swipes: Vec<Swipe> = (0..len)
            .map(|_| Swipe::ALL[rng.random_range(0..Swipe::ALL.len())])
            .collect();

        let head = match decode_pair(swipes[0], swipes[1]) {
            value if value >= 10 => 0,
            value => u64::from(value),
        };
        let tail = decode(&swipes[2..]).unwrap();
        assert_eq!(decode(&swipes), Some(tail * 10 + head));
    }
}

#[test]
fn suits_follow_seed_order() {
    assert_eq!(Suit::from_swipe(Up), Suit::Spades);
    assert_eq!(Suit::from_swipe(Right), Suit::Hearts);
    assert_eq!(Suit::from_swipe(Down), Suit::Clubs);
    assert_eq!(Suit::from_swipe(Left), Suit::Diamonds);
}

#[test]
fn drags_are_classified_by_dominant_axis() {
    assert_eq!(Swipe::from_translation(40.0, 3.0), Right);
    assert_eq!(Swipe::from_translation(-40.0, 3.0), Left);
    assert_eq!(Swipe::from_translation(3.0, 40.0), Down);
    assert_eq!(Swipe::from_translation(3.0, -40.0), Up);
}

#[test]
fn dead_pair_is_zero() {
    assert_eq!(DEAD_PAIR, 0);
    assert_eq!(decode_pair(Left, Right), DEAD_PAIR);
}
