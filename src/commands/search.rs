use crate::catalog::Catalog;
use crate::models::{
    Product, Retailer, RetailerPrice, RetailerPricing, SearchHit, SearchMode, Suggestion,
};
use std::cmp::Ordering;

/// Applied after ranking; ranking always considers every match.
pub const RESULT_LIMIT: usize = 20;
pub const SUGGESTION_LIMIT: usize = 8;
pub const MIN_SUGGESTION_LEN: usize = 2;

fn annotate(catalog: &Catalog, product: &Product) -> SearchHit {
    let pricing = catalog
        .pricing_for(&product.id)
        .cloned()
        .unwrap_or_else(|| RetailerPricing {
            walmart: unpriced(),
            costco: unpriced(),
            target: unpriced(),
            kroger: unpriced(),
        });

    let mut min_price: Option<f64> = None;
    let mut best_retailer: Option<Retailer> = None;
    for &retailer in &Retailer::ALL {
        if let Some(price) = pricing.get(retailer).price {
            // Strict < keeps the first retailer on ties
            if min_price.map_or(true, |m| price < m) {
                min_price = Some(price);
                best_retailer = Some(retailer);
            }
        }
    }

    SearchHit {
        product: product.clone(),
        pricing,
        min_price,
        best_retailer,
    }
}

fn unpriced() -> RetailerPrice {
    RetailerPrice {
        price: None,
        is_substitute: false,
        substitute_note: None,
    }
}

/// Missing prices sort last.
fn cmp_min_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filter the catalog by a free-text query and rank the matches.
///
/// `Cheapest` orders by the lowest available price; `Brand` puts
/// brand-matching products first, then name matches within each group, then
/// price. Both rely on stable sorting, so catalog order is the final
/// tie-break. A blank query returns nothing, not the whole catalog.
pub fn search_catalog(catalog: &Catalog, query: &str, mode: SearchMode) -> Vec<SearchHit> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = catalog
        .products()
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&q)
                || p.brand.to_lowercase().contains(&q)
                || p.category.label().to_lowercase().contains(&q)
        })
        .map(|p| annotate(catalog, p))
        .collect();

    match mode {
        SearchMode::Cheapest => {
            hits.sort_by(|a, b| cmp_min_price(a.min_price, b.min_price));
        }
        SearchMode::Brand => {
            hits.sort_by(|a, b| {
                let ka = (
                    !a.product.brand.to_lowercase().contains(&q),
                    !a.product.name.to_lowercase().contains(&q),
                );
                let kb = (
                    !b.product.brand.to_lowercase().contains(&q),
                    !b.product.name.to_lowercase().contains(&q),
                );
                ka.cmp(&kb)
                    .then_with(|| cmp_min_price(a.min_price, b.min_price))
            });
        }
    }

    hits.truncate(RESULT_LIMIT);
    hits
}

/// Lightweight autocomplete: raw name/brand matches, no price ranking.
/// Stays empty until the query is long enough to be meaningful.
pub fn suggest(catalog: &Catalog, query: &str) -> Vec<Suggestion> {
    let q = query.trim().to_lowercase();
    if q.chars().count() < MIN_SUGGESTION_LEN {
        return Vec::new();
    }

    catalog
        .products()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&q) || p.brand.to_lowercase().contains(&q))
        .take(SUGGESTION_LIMIT)
        .map(|p| Suggestion {
            text: format!("{} - {}", p.name, p.brand),
            product: p.clone(),
        })
        .collect()
}
