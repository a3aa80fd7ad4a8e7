//! Day 7: Camel Cards

use crate::utils::{parse_field, parse_lines, solve_failed};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

const HAND_SIZE: usize = 5;
const JOKER: u8 = b'J';

/// Card order for plain rules, strongest first.
const STANDARD_ORDER: &[u8; 13] = b"AKQJT98765432";
/// Card order when `J` is a joker, strongest first.
const JOKER_ORDER: &[u8; 13] = b"AKQT98765432J";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [u8; HAND_SIZE],
    bid: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify from card counts sorted in descending order.
    fn from_sorted_counts(counts: &[usize]) -> Self {
        match counts {
            [5, ..] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2, ..] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rules {
    Standard,
    Jokers,
}

/// Sort key: type first, then per-card strength left to right.
type HandKey = (HandType, [u8; HAND_SIZE]);

impl Rules {
    fn order(self) -> &'static [u8; 13] {
        match self {
            Rules::Standard => STANDARD_ORDER,
            Rules::Jokers => JOKER_ORDER,
        }
    }

    /// Higher is stronger.
    fn strength(self, card: u8) -> u8 {
        let order = self.order();
        order
            .iter()
            .position(|&c| c == card)
            .map_or(0, |idx| (order.len() - idx) as u8)
    }

    fn hand_type(self, cards: &[u8; HAND_SIZE]) -> HandType {
        let jokers = match self {
            Rules::Standard => 0,
            Rules::Jokers => cards.iter().filter(|&&c| c == JOKER).count(),
        };

        let mut counts = cards
            .iter()
            .filter(|&&c| self == Rules::Standard || c != JOKER)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect_vec();

        // Jokers always do best by joining the largest group
        match counts.first_mut() {
            Some(largest) => *largest += jokers,
            None => counts.push(jokers),
        }

        HandType::from_sorted_counts(&counts)
    }

    fn key(self, hand: &Hand) -> HandKey {
        (
            self.hand_type(&hand.cards),
            hand.cards.map(|card| self.strength(card)),
        )
    }

    /// Sum of rank * bid, weakest hand ranked 1.
    ///
    /// The sort is stable, so identical hands keep their input order.
    fn total_winnings(self, hands: &[Hand]) -> anyhow::Result<u64> {
        hands
            .iter()
            .map(|hand| (self.key(hand), hand.bid))
            .sorted_by_key(|(key, _)| *key)
            .zip(1u64..)
            .try_fold(0u64, |total, ((_, bid), rank)| {
                rank.checked_mul(bid)
                    .and_then(|winnings| total.checked_add(winnings))
                    .ok_or_else(|| anyhow!("total winnings overflow at rank {rank}"))
            })
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected \"<cards> <bid>\""))?;

    let cards: [u8; HAND_SIZE] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand {cards:?} must have {HAND_SIZE} cards"))?;
    if let Some(&bad) = cards.iter().find(|&&c| !STANDARD_ORDER.contains(&c)) {
        bail!("unknown card {:?}", bad as char);
    }

    Ok(Hand {
        cards,
        bid: parse_field(bid, "bid")?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, parse_hand)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Rules::Standard
            .total_winnings(shared)
            .map(|total| total.to_string())
            .map_err(solve_failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Rules::Jokers
            .total_winnings(shared)
            .map(|total| total.to_string())
            .map_err(solve_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    fn solve(input: &str, part: u8) -> String {
        let mut hands = Solver::parse(input).expect("input should parse");
        <Solver as aoc_solver::Solver>::solve_part(&mut hands, part).unwrap()
    }

    fn cards(text: &str) -> [u8; HAND_SIZE] {
        text.as_bytes().try_into().unwrap()
    }

    /// Substitute each joker with every other card in the hand and keep the
    /// strongest plain type.
    fn brute_force_joker_type(cards: [u8; HAND_SIZE]) -> HandType {
        let mut best = Rules::Standard.hand_type(&cards);
        for (i, &card) in cards.iter().enumerate() {
            if card != JOKER {
                continue;
            }
            for &other in cards.iter().filter(|&&c| c != JOKER) {
                let mut replaced = cards;
                replaced[i] = other;
                best = best.max(brute_force_joker_type(replaced));
            }
        }
        best
    }

    #[test]
    fn test_example_part_1() {
        assert_eq!(solve(EXAMPLE, 1), "6440");
    }

    #[test]
    fn test_example_part_2() {
        assert_eq!(solve(EXAMPLE, 2), "5905");
    }

    #[test]
    fn test_hand_types() {
        let standard = |text| Rules::Standard.hand_type(&cards(text));
        assert_eq!(standard("AAAAA"), HandType::FiveOfAKind);
        assert_eq!(standard("AA8AA"), HandType::FourOfAKind);
        assert_eq!(standard("23332"), HandType::FullHouse);
        assert_eq!(standard("TTT98"), HandType::ThreeOfAKind);
        assert_eq!(standard("23432"), HandType::TwoPair);
        assert_eq!(standard("A23A4"), HandType::OnePair);
        assert_eq!(standard("23456"), HandType::HighCard);
    }

    #[test]
    fn test_joker_hand_types() {
        let jokers = |text| Rules::Jokers.hand_type(&cards(text));
        assert_eq!(jokers("QJJQ2"), HandType::FourOfAKind);
        assert_eq!(jokers("T55J5"), HandType::FourOfAKind);
        assert_eq!(jokers("KTJJT"), HandType::FourOfAKind);
        assert_eq!(jokers("JJJJJ"), HandType::FiveOfAKind);
        assert_eq!(jokers("2345J"), HandType::OnePair);
        assert_eq!(jokers("2233J"), HandType::FullHouse);
        assert_eq!(jokers("32T3K"), HandType::OnePair);
    }

    #[test]
    fn test_joker_is_weakest_card() {
        // Both four of a kind with jokers; J loses the first-card tie-break to Q
        let joker_hand = Hand {
            cards: cards("JKKK2"),
            bid: 1,
        };
        let queen_hand = Hand {
            cards: cards("QQQQ2"),
            bid: 1,
        };
        assert!(Rules::Jokers.key(&joker_hand) < Rules::Jokers.key(&queen_hand));
        assert!(Rules::Standard.key(&joker_hand) < Rules::Standard.key(&queen_hand));

        assert!(Rules::Jokers.strength(b'J') < Rules::Jokers.strength(b'2'));
        assert!(Rules::Standard.strength(b'J') > Rules::Standard.strength(b'T'));
    }

    #[test]
    fn test_identical_hands_rank_in_input_order() {
        assert_eq!(solve("AAAAA 1\nAAAAA 10\n", 1), (1 + 2 * 10).to_string());
        assert_eq!(solve("AAAAA 10\nAAAAA 1\n", 1), (10 + 2).to_string());
    }

    #[test]
    fn test_winnings_overflow_is_an_error() {
        let mut hands = Solver::parse("AAAAA 18446744073709551615\nKKKKK 18446744073709551615\n")
            .expect("input should parse");
        let err = <Solver as aoc_solver::Solver>::solve_part(&mut hands, 1).unwrap_err();
        assert!(matches!(err, SolveError::SolveFailed(_)), "{err}");
        assert!(err.to_string().contains("overflow"), "{err}");

        // A single maximal bid at rank 1 still fits
        assert_eq!(solve("AAAAA 18446744073709551615\n", 2), u64::MAX.to_string());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(solve("", 1), "0");
        assert_eq!(solve("\n", 2), "0");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("32T3K").is_err());
        assert!(Solver::parse("32T3 765").is_err());
        assert!(Solver::parse("32T3KK 765").is_err());
        assert!(Solver::parse("32T1K 765").is_err());
        assert!(Solver::parse("32T3K abc").is_err());

        let err = Solver::parse("32T3K 765\nKK677 -1").unwrap_err();
        assert!(err.to_string().contains("(line 2)"), "{err}");
    }

    proptest! {
        #[test]
        fn prop_joker_grouping_matches_substitution(
            picks in prop::array::uniform5(0usize..13)
        ) {
            let hand = picks.map(|i| STANDARD_ORDER[i]);
            prop_assert_eq!(Rules::Jokers.hand_type(&hand), brute_force_joker_type(hand));
        }
    }
}
