//! Shared fixtures for integration tests
#![allow(dead_code)]

use aerofacet::catalog::{Catalog, FacetValue, FacetValueId, Item};
use aerofacet::query::{FacetCount, SearchResult};

/// Sizes Small, Medium, Large; colors Red, Blue.
pub fn shirt_catalog() -> Catalog {
    Catalog::new(
        vec![
            FacetValue::named("Small"),
            FacetValue::named("Medium"),
            FacetValue::named("Large"),
        ],
        vec![FacetValue::named("Red"), FacetValue::named("Blue")],
    )
    .unwrap()
}

pub fn size(catalog: &Catalog, name: &str) -> FacetValueId {
    catalog
        .sizes()
        .values()
        .iter()
        .find(|v| v.name == name)
        .map(|v| v.id)
        .unwrap()
}

pub fn color(catalog: &Catalog, name: &str) -> FacetValueId {
    catalog
        .colors()
        .values()
        .iter()
        .find(|v| v.name == name)
        .map(|v| v.id)
        .unwrap()
}

/// Build items from (size name, color name, item name) triples
pub fn items(catalog: &Catalog, specs: &[(&str, &str, &str)]) -> Vec<Item> {
    specs
        .iter()
        .map(|(s, c, name)| {
            let s = catalog.sizes().get(size(catalog, s)).unwrap();
            let c = catalog.colors().get(color(catalog, c)).unwrap();
            Item::new(*name, s, c)
        })
        .collect()
}

pub fn names(result: &SearchResult<'_>) -> Vec<String> {
    result.iter().map(|i| i.name.clone()).collect()
}

pub fn counts(counts: &[FacetCount<'_>]) -> Vec<(String, usize)> {
    counts
        .iter()
        .map(|fc| (fc.value.name.clone(), fc.count))
        .collect()
}

pub fn expected(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
}
