use crate::catalog::{product_id, round2, Catalog};
use crate::commands::items;
use crate::db::Database;
use crate::models::{
    BasketItem, Category, Comparison, ItemRef, Product, ResolvedItem, Retailer, RetailerPricing,
    RetailerTotal,
};
use std::collections::HashMap;

/// Synthetic stand-in for an item the catalog doesn't know. Zero base price,
/// so it contributes nothing to totals and nothing to completeness.
fn custom_product(name: &str) -> Product {
    Product {
        id: product_id(name, "custom"),
        name: name.to_string(),
        brand: "Custom".to_string(),
        category: Category::Pantry,
        size: String::new(),
        base_price: 0.0,
        is_private_label: false,
    }
}

/// Resolve basket rows against the catalog. Stale catalog references and
/// custom entries both fall back to a synthetic product, so every row is
/// comparable.
pub fn resolve_items(catalog: &Catalog, items: &[BasketItem]) -> Vec<ResolvedItem> {
    items
        .iter()
        .map(|item| {
            let product = match &item.product {
                ItemRef::Catalog { product_id } => match catalog.product_by_id(product_id) {
                    Some(p) => p.clone(),
                    None => custom_product(product_id),
                },
                ItemRef::Custom { name } => custom_product(name),
            };
            ResolvedItem {
                product,
                quantity: item.quantity,
            }
        })
        .collect()
}

/// Aggregate a basket into per-retailer totals, rank them and derive the
/// savings against the best option. Pure: no caching, no side effects.
///
/// Missing-price policy: an absent retailer price falls back to the
/// product's base price and counts as a substitute for that retailer; a
/// product with no pricing entry at all falls back to base price at every
/// retailer and counts against none of them.
///
/// An empty basket yields `None` rather than a zero-total comparison.
pub fn compare_basket(
    items: &[ResolvedItem],
    pricing: &HashMap<String, RetailerPricing>,
) -> Option<Comparison> {
    if items.is_empty() {
        return None;
    }

    let mut totals: Vec<RetailerTotal> = Retailer::ALL
        .iter()
        .map(|&retailer| {
            let mut total = 0.0;
            let mut available_count = 0;
            let mut substitute_count = 0;

            for item in items {
                let quantity = item.quantity as f64;
                match pricing.get(&item.product.id) {
                    Some(entry) => match entry.get(retailer).price {
                        Some(price) => {
                            total += price * quantity;
                            available_count += 1;
                        }
                        None => {
                            // Base price as the substitute estimate
                            total += item.product.base_price * quantity;
                            substitute_count += 1;
                        }
                    },
                    // Baseline-only item: same estimate at every retailer
                    None => total += item.product.base_price * quantity,
                }
            }

            RetailerTotal {
                retailer,
                // Round once after aggregation, not per item
                total: round2(total),
                available_count,
                substitute_count,
                complete: substitute_count == 0,
            }
        })
        .collect();

    // Stable sort: equal totals keep the fixed retailer order
    totals.sort_by(|a, b| a.total.total_cmp(&b.total));

    let best_retailer = totals[0].retailer;
    let savings = round2(totals[totals.len() - 1].total - totals[0].total);

    Some(Comparison {
        retailers: totals,
        best_retailer,
        savings,
    })
}

/// Compare one list's basket. Takes a snapshot of the items up front so the
/// computation sees a consistent view.
pub fn compare_list(
    db: &Database,
    catalog: &Catalog,
    list_id: i64,
) -> Result<Option<Comparison>, String> {
    let items = items::get_list_items(db, list_id)?;
    let resolved = resolve_items(catalog, &items);
    Ok(compare_basket(&resolved, catalog.pricing()))
}
