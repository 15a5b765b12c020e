use coinchange::dynamic::ChangeTable;
use coinchange::{canonical, dynamic, greedy, Change, Denominations, Error};
use proptest::prelude::*;

// Random coin systems that always contain a unit coin.
fn unit_coin_systems() -> impl Strategy<Value = Denominations> {
    prop::collection::btree_set(2i64..60, 0..5).prop_map(|coins| {
        Denominations::new(std::iter::once(1).chain(coins)).expect("distinct positive coins")
    })
}

// Random coin systems that may lack a unit coin.
fn any_coin_systems() -> impl Strategy<Value = Denominations> {
    prop::collection::btree_set(1i64..40, 1..5)
        .prop_map(|coins| Denominations::new(coins).expect("distinct positive coins"))
}

// Breadth-first search over sums, one coin per level, independent of the table.
fn brute_force_min(amount: usize, coins: &[usize]) -> Option<usize> {
    let mut seen = vec![false; amount + 1];
    let mut frontier = vec![0_usize];
    seen[0] = true;

    for used in 0..=amount {
        if frontier.contains(&amount) {
            return Some(used);
        }
        let mut next = Vec::new();
        for &sum in &frontier {
            for &coin in coins {
                let reached = sum + coin;
                if reached <= amount && !seen[reached] {
                    seen[reached] = true;
                    next.push(reached);
                }
            }
        }
        if next.is_empty() {
            return None;
        }
        frontier = next;
    }
    None
}

proptest! {
    #[test]
    fn both_solvers_sum_to_amount_with_unit_coin(
        coins in unit_coin_systems(),
        amount in 0usize..400
    ) {
        let fast = greedy::make_change(amount, &coins).expect("unit coin makes any amount");
        let exact = dynamic::make_change(amount, &coins).expect("unit coin makes any amount");

        prop_assert_eq!(fast.total(), amount);
        prop_assert_eq!(exact.total(), amount);
    }

    #[test]
    fn dynamic_never_uses_more_coins_than_greedy(
        coins in any_coin_systems(),
        amount in 0usize..400
    ) {
        if let Ok(fast) = greedy::make_change(amount, &coins) {
            let exact = dynamic::make_change(amount, &coins)
                .expect("greedy success implies a combination exists");
            prop_assert!(exact.coin_count() <= fast.coin_count());
        }
    }

    #[test]
    fn dynamic_matches_brute_force(
        coins in any_coin_systems(),
        amount in 0usize..30
    ) {
        let expected = brute_force_min(amount, coins.as_slice());
        match dynamic::make_change(amount, &coins) {
            Ok(change) => {
                prop_assert_eq!(change.total(), amount);
                prop_assert_eq!(Some(change.coin_count()), expected);
            }
            Err(err) => {
                prop_assert_eq!(expected, None);
                prop_assert_eq!(err, Error::Unreachable { amount, remainder: amount });
            }
        }
        let table = ChangeTable::build(amount, &coins).expect("small table");
        prop_assert_eq!(table.min_count(amount), expected);
    }

    #[test]
    fn greedy_is_optimal_on_canonical_systems(
        coins in unit_coin_systems(),
        amount in 0usize..200
    ) {
        prop_assume!(canonical::is_canonical(&coins).expect("small coins"));
        let fast = greedy::make_change(amount, &coins).expect("unit coin makes any amount");
        let exact = dynamic::make_change(amount, &coins).expect("unit coin makes any amount");
        prop_assert_eq!(fast.coin_count(), exact.coin_count());
    }

    #[test]
    fn results_only_hold_positive_counts(
        coins in any_coin_systems(),
        amount in 0usize..200
    ) {
        for change in [greedy::make_change(amount, &coins), dynamic::make_change(amount, &coins)]
            .into_iter()
            .flatten()
        {
            prop_assert!(change.iter().all(|(coin, count)| count >= 1 && coins.as_slice().contains(&coin)));
        }
    }
}

#[test]
fn zero_amount_is_empty_for_both() {
    let coins = Denominations::default();
    assert_eq!(greedy::make_change(0, &coins), Ok(Change::new()));
    assert_eq!(dynamic::make_change(0, &coins), Ok(Change::new()));
}

#[test]
fn default_set_agrees_on_113() {
    let coins = Denominations::default();
    let expected: Change = [(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();

    assert_eq!(greedy::make_change(113, &coins), Ok(expected.clone()));
    assert_eq!(dynamic::make_change(113, &coins), Ok(expected));
}

#[test]
fn unreachable_seven_from_five_and_four() {
    let coins = Denominations::new([5, 4]).unwrap();
    assert!(matches!(
        greedy::make_change(7, &coins),
        Err(Error::GreedyStuck { amount: 7, .. })
    ));
    assert!(matches!(
        dynamic::make_change(7, &coins),
        Err(Error::Unreachable { amount: 7, .. })
    ));
}

#[test]
fn greedy_stuck_is_not_reported_as_unreachable() {
    let coins = Denominations::new([5, 4]).unwrap();
    assert_eq!(
        greedy::make_change(8, &coins),
        Err(Error::GreedyStuck { amount: 8, remainder: 3 })
    );
    assert_eq!(dynamic::make_change(8, &coins).unwrap().to_string(), "{4: 2}");
}

#[test]
fn oversized_amounts_fail_without_panicking() {
    let coins = Denominations::default();
    assert_eq!(
        dynamic::make_change(usize::MAX, &coins),
        Err(Error::TooLarge { amount: usize::MAX })
    );
    assert_eq!(greedy::make_change(usize::MAX, &coins).unwrap().total(), usize::MAX);
}

#[test]
fn solvers_agree_on_default_set_up_to_500() {
    let coins = Denominations::default();
    for amount in 0..=500 {
        let fast = greedy::make_change(amount, &coins).unwrap();
        let exact = dynamic::make_change(amount, &coins).unwrap();
        assert_eq!(fast.coin_count(), exact.coin_count(), "amount {amount}");
    }
}
