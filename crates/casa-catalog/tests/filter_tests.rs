use casa_catalog::{filter, CatalogStats, FilterCriteria};
use casa_domain::{Category, Material};
use proptest::prelude::*;

fn arb_material() -> impl Strategy<Value = Material> {
    let category = prop_oneof![
        Just(Category::Floor),
        Just(Category::Tile),
        Just(Category::Paint),
        Just(Category::Lighting),
    ];
    (
        "[a-z]{3,10}",
        "[a-z]{3,8}",
        category,
        0.0f64..2000.0,
        proptest::collection::vec(
            prop_oneof![Just("modern"), Just("nordic"), Just("luxury")],
            0..3,
        ),
    )
        .prop_map(|(name, brand, category, price, styles)| {
            Material::new(name, brand, category, price).with_styles(styles)
        })
}

proptest! {
    #[test]
    fn prop_empty_criteria_is_identity(
        materials in proptest::collection::vec(arb_material(), 0..12)
    ) {
        prop_assert_eq!(filter(&materials, &FilterCriteria::new()), materials);
    }

    #[test]
    fn prop_filter_is_idempotent(
        materials in proptest::collection::vec(arb_material(), 0..12),
        min in 0.0f64..2000.0,
        max in 0.0f64..2000.0,
    ) {
        // min may exceed max; the engine accepts that and matches nothing,
        // which is still a fixed point.
        let criteria = FilterCriteria::new()
            .with_price_range(min, max)
            .with_styles(["modern"]);
        let once = filter(&materials, &criteria);
        let twice = filter(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_price_bounds_are_inclusive(a in 0.0f64..1000.0, b in 0.0f64..1000.0) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let materials = vec![
            Material::new("edge low", "brand", Category::Floor, min),
            Material::new("edge high", "brand", Category::Floor, max),
        ];
        let criteria = FilterCriteria::new().with_price_range(min, max);
        prop_assert_eq!(filter(&materials, &criteria).len(), 2);
    }

    #[test]
    fn prop_result_is_an_ordered_subsequence(
        materials in proptest::collection::vec(arb_material(), 0..12),
        query in "[a-z]{0,2}",
    ) {
        let matched = filter(&materials, &FilterCriteria::new().with_query(query));

        // Every match comes from the input and keeps its relative order.
        let mut cursor = 0usize;
        for m in &matched {
            let pos = materials[cursor..].iter().position(|x| x.id == m.id);
            prop_assert!(pos.is_some());
            cursor += pos.unwrap() + 1;
        }

        // Stats are derived from the same subset, so they always agree.
        let stats = CatalogStats::of(&matched);
        prop_assert_eq!(stats.count, matched.len());
        let total: f64 = matched.iter().map(|m| m.price).sum();
        prop_assert!((stats.estimated_total - total).abs() < f64::EPSILON);
    }
}
