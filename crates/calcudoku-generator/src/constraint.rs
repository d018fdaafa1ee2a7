//! Cage constraint selection.

use calcudoku_core::Operation;
use rand::{Rng, seq::IndexedRandom as _};

/// Picks a consistent operation and target for a cage holding `values`.
///
/// A single value always gets [`Operation::Const`] with that value as the
/// target. Larger cages draw uniformly from the applicable operations: the
/// sum always applies, and the product applies when it fits the target
/// width; a two-value cage additionally offers the difference when the
/// values differ, and the quotient when it is exact and greater than one.
/// Subtraction and division are never offered beyond two values, and a
/// quotient of one is never used as a division target.
///
/// The returned target is always consistent with the chosen operation, so a
/// cage built from the pair is satisfied by the values it was drawn from.
///
/// # Panics
///
/// Panics if `values` is empty; carving never produces an empty cage.
pub(crate) fn choose_constraint(values: &[u8], rng: &mut impl Rng) -> (Operation, u32) {
    if let &[value] = values {
        return (Operation::Const, u32::from(value));
    }
    let mut candidates = vec![Operation::Add];
    if Operation::Multiply.target_for(values).is_some() {
        candidates.push(Operation::Multiply);
    }
    if let &[a, b] = values {
        if a != b {
            candidates.push(Operation::Subtract);
        }
        let (hi, lo) = (a.max(b), a.min(b));
        if lo != 0 && hi % lo == 0 && hi / lo > 1 {
            candidates.push(Operation::Divide);
        }
    }
    let op = *candidates.choose(rng).expect("at least one candidate operation");
    let target = op.target_for(values).expect("chosen operation applies to the values");
    (op, target)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    /// Draws constraints for `values` across many RNG streams.
    fn draws(values: &[u8], count: u64) -> Vec<(Operation, u32)> {
        (0..count)
            .map(|seed| choose_constraint(values, &mut Pcg64::seed_from_u64(seed)))
            .collect()
    }

    #[test]
    fn test_single_value_is_const() {
        for value in 1..=9 {
            let (op, target) = choose_constraint(&[value], &mut Pcg64::seed_from_u64(0));
            assert_eq!(op, Operation::Const);
            assert_eq!(target, u32::from(value));
        }
    }

    #[test]
    fn test_pair_with_exact_quotient_offers_all_four() {
        // {6, 2}: sum 8, product 12, difference 4, quotient 3.
        let drawn = draws(&[6, 2], 200);
        for &(op, target) in &drawn {
            let expected = match op {
                Operation::Add => 8,
                Operation::Multiply => 12,
                Operation::Subtract => 4,
                Operation::Divide => 3,
                Operation::Const => panic!("const chosen for a pair"),
            };
            assert_eq!(target, expected);
        }
        // 200 draws from four uniform candidates miss one only with
        // probability (3/4)^200.
        for op in [Operation::Add, Operation::Multiply, Operation::Subtract, Operation::Divide] {
            assert!(drawn.iter().any(|&(drawn_op, _)| drawn_op == op), "{op:?} never drawn");
        }
    }

    #[test]
    fn test_equal_pair_never_subtracts_or_divides() {
        // {3, 3} would give difference 0 and quotient 1.
        for (op, target) in draws(&[3, 3], 64) {
            match op {
                Operation::Add => assert_eq!(target, 6),
                Operation::Multiply => assert_eq!(target, 9),
                _ => panic!("{op:?} chosen for an equal pair"),
            }
        }
    }

    #[test]
    fn test_inexact_quotient_never_divides() {
        // {4, 3}: subtraction applies, division does not.
        for (op, _) in draws(&[4, 3], 64) {
            assert_ne!(op, Operation::Divide);
        }
    }

    #[test]
    fn test_oversized_products_fall_back_to_sums() {
        // The product of these five values does not fit a u32 target, so
        // only the sum is offered.
        let values = [200, 200, 199, 199, 198];
        for (op, target) in draws(&values, 64) {
            assert_eq!(op, Operation::Add);
            assert_eq!(target, 996);
        }
    }

    #[test]
    fn test_larger_cages_only_add_or_multiply() {
        let drawn = draws(&[2, 4, 1], 64);
        for &(op, target) in &drawn {
            match op {
                Operation::Add => assert_eq!(target, 7),
                Operation::Multiply => assert_eq!(target, 8),
                _ => panic!("{op:?} chosen for a three-cell cage"),
            }
        }
        assert!(drawn.iter().any(|&(op, _)| op == Operation::Add));
        assert!(drawn.iter().any(|&(op, _)| op == Operation::Multiply));
    }

    #[test]
    fn test_target_always_consistent_with_values() {
        let value_sets: [&[u8]; 5] = [&[5], &[2, 6], &[4, 4], &[1, 3, 2], &[4, 1, 2, 3]];
        for values in value_sets {
            for (op, target) in draws(values, 32) {
                assert_eq!(op.target_for(values), Some(target));
            }
        }
    }
}
