//! Search Property Tests
//!
//! Properties checked over random catalogs, item collections and requests:
//! - Unconstrained search returns every item with exact counts
//! - Size counts and color counts both sum to the result size
//! - Every catalog value is counted exactly once, in catalog order
//! - Narrowing the requested sizes never grows the result
//! - Repeated searches are identical
//! - Results match a linear scan over the items

use std::collections::HashMap;

use aerofacet::catalog::{Catalog, FacetValue, FacetValueId, Item};
use aerofacet::query::{FacetCount, SearchEngine, SearchRequest, SearchResult};
use proptest::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone)]
struct Scenario {
    size_count: usize,
    color_count: usize,
    /// (size index, color index) per item
    items: Vec<(usize, usize)>,
    /// which sizes / colors the request names
    size_mask: Vec<bool>,
    color_mask: Vec<bool>,
}

struct World {
    catalog: Catalog,
    items: Vec<Item>,
}

impl Scenario {
    fn world(&self) -> World {
        let sizes: Vec<FacetValue> = (0..self.size_count)
            .map(|i| FacetValue::named(format!("size_{i}")))
            .collect();
        let colors: Vec<FacetValue> = (0..self.color_count)
            .map(|i| FacetValue::named(format!("color_{i}")))
            .collect();

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(n, &(s, c))| Item::new(format!("item_{n}"), &sizes[s], &colors[c]))
            .collect();

        World {
            catalog: Catalog::new(sizes, colors).unwrap(),
            items,
        }
    }

    fn request(&self, catalog: &Catalog) -> SearchRequest {
        SearchRequest::new()
            .with_sizes(masked(catalog.sizes().ids(), &self.size_mask))
            .with_colors(masked(catalog.colors().ids(), &self.color_mask))
    }
}

fn masked(ids: impl Iterator<Item = FacetValueId>, mask: &[bool]) -> Vec<FacetValueId> {
    ids.zip(mask.iter())
        .filter(|(_, keep)| **keep)
        .map(|(id, _)| id)
        .collect()
}

fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (1..5usize, 1..5usize).prop_flat_map(|(size_count, color_count)| {
        (
            prop::collection::vec((0..size_count, 0..color_count), 0..60),
            prop::collection::vec(any::<bool>(), size_count),
            prop::collection::vec(any::<bool>(), color_count),
        )
            .prop_map(move |(items, size_mask, color_mask)| Scenario {
                size_count,
                color_count,
                items,
                size_mask,
                color_mask,
            })
    })
}

// =============================================================================
// Linear-scan reference
// =============================================================================

/// Nested walk over the effective sets with a full scan per pair.
fn scan<'a>(catalog: &Catalog, items: &'a [Item], request: &SearchRequest) -> Vec<&'a Item> {
    let sizes: Vec<FacetValueId> = if request.sizes().is_empty() {
        catalog.sizes().ids().collect()
    } else {
        request.sizes().to_vec()
    };
    let colors: Vec<FacetValueId> = if request.colors().is_empty() {
        catalog.colors().ids().collect()
    } else {
        request.colors().to_vec()
    };

    let mut out = Vec::new();
    for s in &sizes {
        for c in &colors {
            out.extend(items.iter().filter(|i| i.size.id == *s && i.color.id == *c));
        }
    }
    out
}

fn tally(result: &[&Item], by: impl Fn(&Item) -> FacetValueId) -> HashMap<FacetValueId, usize> {
    let mut map = HashMap::new();
    for item in result {
        *map.entry(by(*item)).or_insert(0) += 1;
    }
    map
}

fn sum(counts: &[FacetCount<'_>]) -> usize {
    counts.iter().map(|fc| fc.count).sum()
}

fn names(result: &SearchResult<'_>) -> Vec<String> {
    result.iter().map(|i| i.name.clone()).collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn unconstrained_search_is_complete(scenario in arb_scenario()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);

        let result = engine.search(&SearchRequest::new());

        let mut got = names(&result);
        let mut want: Vec<String> = world.items.iter().map(|i| i.name.clone()).collect();
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);

        for fc in &result.size_counts {
            let carrying = world.items.iter().filter(|i| i.size.id == fc.value.id).count();
            prop_assert_eq!(fc.count, carrying);
        }
        for fc in &result.color_counts {
            let carrying = world.items.iter().filter(|i| i.color.id == fc.value.id).count();
            prop_assert_eq!(fc.count, carrying);
        }
    }

    #[test]
    fn counts_partition_the_result(scenario in arb_scenario()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);

        let unconstrained = engine.search(&SearchRequest::new());
        prop_assert_eq!(sum(&unconstrained.size_counts), world.items.len());
        prop_assert_eq!(sum(&unconstrained.color_counts), world.items.len());

        let filtered = engine.search(&scenario.request(&world.catalog));
        prop_assert_eq!(sum(&filtered.size_counts), filtered.total());
        prop_assert_eq!(sum(&filtered.color_counts), filtered.total());
    }

    #[test]
    fn every_catalog_value_counted_once(scenario in arb_scenario()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);

        let result = engine.search(&scenario.request(&world.catalog));

        let size_ids: Vec<_> = result.size_counts.iter().map(|fc| fc.value.id).collect();
        let color_ids: Vec<_> = result.color_counts.iter().map(|fc| fc.value.id).collect();
        prop_assert_eq!(size_ids, world.catalog.sizes().ids().collect::<Vec<_>>());
        prop_assert_eq!(color_ids, world.catalog.colors().ids().collect::<Vec<_>>());
    }

    #[test]
    fn narrowing_sizes_never_grows_result(scenario in arb_scenario(), drop_at in any::<prop::sample::Index>()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);

        let wide = scenario.request(&world.catalog);
        prop_assume!(wide.sizes().len() >= 2);

        let skip = drop_at.index(wide.sizes().len());
        let narrow_sizes: Vec<_> = wide
            .sizes()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, id)| *id)
            .collect();
        let narrow = SearchRequest::new()
            .with_sizes(narrow_sizes)
            .with_colors(wide.colors().iter().copied());

        prop_assert!(engine.search(&narrow).total() <= engine.search(&wide).total());
    }

    #[test]
    fn repeated_search_is_identical(scenario in arb_scenario()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);
        let request = scenario.request(&world.catalog);

        let first = engine.search(&request);
        let second = engine.search(&request);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn matches_linear_scan(scenario in arb_scenario()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);
        let request = scenario.request(&world.catalog);

        let result = engine.search(&request);
        let expected = scan(&world.catalog, &world.items, &request);

        // Same items in the same bucket-by-bucket order
        let got: Vec<*const Item> = result.iter().map(|i| i as *const Item).collect();
        let want: Vec<*const Item> = expected.iter().map(|i| *i as *const Item).collect();
        prop_assert_eq!(got, want);

        let by_size = tally(&expected, |i| i.size.id);
        let by_color = tally(&expected, |i| i.color.id);
        for fc in &result.size_counts {
            prop_assert_eq!(fc.count, by_size.get(&fc.value.id).copied().unwrap_or(0));
        }
        for fc in &result.color_counts {
            prop_assert_eq!(fc.count, by_color.get(&fc.value.id).copied().unwrap_or(0));
        }
    }

    #[test]
    fn no_item_returned_twice(scenario in arb_scenario()) {
        let world = scenario.world();
        let engine = SearchEngine::new(&world.catalog, &world.items);

        let result = engine.search(&scenario.request(&world.catalog));

        let mut seen: Vec<*const Item> = result.iter().map(|i| i as *const Item).collect();
        let before = seen.len();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), before);
    }
}
