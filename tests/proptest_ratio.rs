//! Property-based tests for the exact arithmetic layer and for whole
//! resolution runs over randomly generated contested claim tables.

use proptest::prelude::*;

use talit::prelude::*;

fn unit_ratio() -> impl Strategy<Value = Ratio> {
    (1i64..=240)
        .prop_flat_map(|den| (0i64..=den, Just(den)))
        .prop_map(|(num, den)| Ratio::new(num, den).unwrap())
}

/// Claim tables where every claim is at least `1/n`: the regime in which
/// no concession round can outrun the remainder, so resolution always
/// completes.
fn contested_claims() -> impl Strategy<Value = Vec<Ratio>> {
    (2usize..=6)
        .prop_flat_map(|n| {
            proptest::collection::vec(
                (1i64..=12).prop_flat_map(move |den| {
                    let lo = (den + n as i64 - 1) / n as i64;
                    (lo..=den, Just(den))
                }),
                n,
            )
        })
        .prop_map(|terms| {
            terms
                .into_iter()
                .map(|(num, den)| Ratio::new(num, den).unwrap())
                .collect()
        })
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn ratio_is_always_canonical(a in unit_ratio()) {
        prop_assert!(a.denominator() > 0);
        prop_assert!(a.numerator() >= 0);
        prop_assert!(a.numerator() <= a.denominator());
        prop_assert_eq!(gcd(a.numerator(), a.denominator()), 1);
    }

    #[test]
    fn reduction_is_idempotent(a in unit_ratio()) {
        let again = Ratio::new(a.numerator(), a.denominator()).unwrap();
        prop_assert_eq!(again, a);
    }

    #[test]
    fn add_commutes(a in unit_ratio(), b in unit_ratio()) {
        prop_assert_eq!(a.add(b), b.add(a));
    }

    #[test]
    fn mul_commutes(a in unit_ratio(), b in unit_ratio()) {
        prop_assert_eq!(a.mul(b), b.mul(a));
    }

    #[test]
    fn add_then_sub_round_trips(a in unit_ratio(), b in unit_ratio()) {
        if let Ok(sum) = a.add(b) {
            prop_assert_eq!(sum.sub(b), Ok(a));
            prop_assert_eq!(sum.sub(a), Ok(b));
        }
    }

    #[test]
    fn sub_then_add_round_trips(a in unit_ratio(), b in unit_ratio()) {
        if let Ok(diff) = a.sub(b) {
            prop_assert_eq!(diff.add(b), Ok(a));
        }
    }

    #[test]
    fn int_split_round_trips(a in unit_ratio(), k in 1u64..32) {
        let share = a.div_int(k).unwrap();
        prop_assert_eq!(share.mul_int(k), Ok(a));
    }

    #[test]
    fn ordering_agrees_with_subtraction(a in unit_ratio(), b in unit_ratio()) {
        // a <= b exactly when b - a stays in the unit interval.
        prop_assert_eq!(a <= b, b.sub(a).is_ok());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn contested_tables_conserve_the_estate(claims in contested_claims()) {
        let awards = settle(&claims).unwrap();
        let witness =
            ConservationWitness::verify(awards.iter().map(|a| a.collects), Ratio::ZERO);
        prop_assert!(witness.is_valid());
    }

    #[test]
    fn no_award_exceeds_its_claim(claims in contested_claims()) {
        for award in settle(&claims).unwrap() {
            prop_assert!(award.collects <= award.claim);
        }
    }

    #[test]
    fn rounds_are_bounded(claims in contested_claims()) {
        // One round per distinct positive concession value, plus at most
        // one final equal split.
        let mut dispute = Dispute::new(&claims).unwrap();
        let rounds = resolve(&mut dispute).unwrap();
        prop_assert!(rounds <= claims.len() + 1);
        prop_assert!(dispute.is_resolved());
    }

    #[test]
    fn remainder_shrinks_every_round(claims in contested_claims()) {
        let mut dispute = Dispute::new(&claims).unwrap();
        let mut prev = dispute.remainder();
        while !dispute.is_resolved() {
            if dispute.partials() == 0 {
                dispute.split_remainder_equally().unwrap();
            } else {
                dispute.distribute_lowest_concession().unwrap();
            }
            prop_assert!(dispute.remainder() < prev);
            prev = dispute.remainder();
        }
    }

    #[test]
    fn settlement_is_deterministic(claims in contested_claims()) {
        prop_assert_eq!(settle(&claims).unwrap(), settle(&claims).unwrap());
    }
}
