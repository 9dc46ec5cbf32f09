//! Tests for the comparison engine, pricing generation, search ranking and
//! the list/basket store. Store tests run against an in-memory SQLite
//! database.

#[cfg(test)]
mod tests {
    use crate::catalog::{generate_retailer_pricing, product_id, seeded_random, seeded_variance, Catalog};
    use crate::commands::{compare, items, lists, search};
    use crate::db::Database;
    use crate::models::*;
    use std::collections::HashMap;

    fn test_db() -> Database {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        db.initialize().expect("Failed to initialize database");
        db
    }

    fn product(id: &str, name: &str, brand: &str, base_price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            category: Category::Pantry,
            size: "1 lb".to_string(),
            base_price,
            is_private_label: false,
        }
    }

    fn resolved(product: &Product, quantity: i64) -> ResolvedItem {
        ResolvedItem {
            product: product.clone(),
            quantity,
        }
    }

    /// Pricing entry per retailer; `None` means absent (substitute policy).
    fn priced(
        walmart: Option<f64>,
        costco: Option<f64>,
        target: Option<f64>,
        kroger: Option<f64>,
    ) -> RetailerPricing {
        fn entry(price: Option<f64>) -> RetailerPrice {
            match price {
                Some(p) => RetailerPrice::available(p),
                None => RetailerPrice::substitute("Similar item available"),
            }
        }
        RetailerPricing {
            walmart: entry(walmart),
            costco: entry(costco),
            target: entry(target),
            kroger: entry(kroger),
        }
    }

    fn create_plain_list(db: &Database, catalog: &Catalog, name: &str) -> List {
        lists::create_list(
            db,
            catalog,
            CreateList {
                name: name.to_string(),
                color: "#3B82F6".to_string(),
                image_url: None,
                initial_items: Vec::new(),
            },
        )
        .unwrap()
    }

    // ===== PRICING GENERATION TESTS =====

    #[test]
    fn seeded_random_stays_in_unit_interval() {
        for seed in -500..500 {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {} gave {}", seed, r);
        }
    }

    #[test]
    fn seeded_variance_stays_in_band() {
        for seed in 0..2000 {
            let v = seeded_variance(seed);
            assert!(v >= -0.08 && v < 0.08, "seed {} gave {}", seed, v);
        }
    }

    #[test]
    fn pricing_is_deterministic() {
        let a = generate_retailer_pricing(4.99, 17_000);
        let b = generate_retailer_pricing(4.99, 17_000);
        assert_eq!(a, b);
    }

    #[test]
    fn pricing_is_stable_across_catalog_instances() {
        let first = Catalog::demo();
        let second = Catalog::demo();
        let id = product_id("Bananas", "Dole");
        assert_eq!(first.pricing_for(&id), second.pricing_for(&id));
    }

    #[test]
    fn pricing_rounds_to_two_decimals() {
        let catalog = Catalog::demo();
        for product in catalog.products() {
            let pricing = catalog.pricing_for(&product.id).unwrap();
            for retailer in Retailer::ALL {
                if let Some(price) = pricing.get(retailer).price {
                    let cents = price * 100.0;
                    assert!(
                        (cents - cents.round()).abs() < 1e-9,
                        "{} at {} is not a 2-decimal price: {}",
                        product.id,
                        retailer.id(),
                        price
                    );
                }
            }
        }
    }

    #[test]
    fn pricing_clamps_to_minimum_price() {
        let pricing = generate_retailer_pricing(0.001, 0);
        for retailer in Retailer::ALL {
            if let Some(price) = pricing.get(retailer).price {
                assert!(price >= 0.01);
            }
        }
    }

    #[test]
    fn absent_entries_carry_substitute_notes() {
        // Scan enough seeds that every retailer's unavailable branch fires
        let mut saw_substitute = false;
        for seed in (0..500).map(|i| i * 1000) {
            let pricing = generate_retailer_pricing(3.00, seed);
            for retailer in Retailer::ALL {
                let entry = pricing.get(retailer);
                if entry.price.is_none() {
                    saw_substitute = true;
                    assert!(entry.is_substitute);
                    assert!(entry.substitute_note.is_some());
                } else {
                    assert!(!entry.is_substitute);
                }
            }
        }
        assert!(saw_substitute);
    }

    #[test]
    fn product_ids_are_name_brand_slugs() {
        assert_eq!(product_id("Organic Bananas", "Dole"), "organic-bananas-dole");
        assert_eq!(
            product_id("2% Reduced Fat Milk", "Great Value"),
            "2%-reduced-fat-milk-great-value"
        );
    }

    // ===== COMPARISON ENGINE TESTS =====

    #[test]
    fn empty_basket_yields_no_comparison() {
        let pricing: HashMap<String, RetailerPricing> = HashMap::new();
        assert!(compare::compare_basket(&[], &pricing).is_none());
    }

    #[test]
    fn substitute_fallback_uses_base_price() {
        let milk = product("milk-brand", "Milk", "Brand", 4.00);
        let mut pricing = HashMap::new();
        pricing.insert(milk.id.clone(), priced(Some(3.80), None, None, None));

        let result = compare::compare_basket(&[resolved(&milk, 2)], &pricing).unwrap();

        assert_eq!(result.best_retailer, Retailer::Walmart);
        assert_eq!(result.retailers[0].retailer, Retailer::Walmart);
        assert_eq!(result.retailers[0].total, 7.60);
        assert_eq!(result.retailers[0].available_count, 1);
        assert_eq!(result.retailers[0].substitute_count, 0);
        assert!(result.retailers[0].complete);

        for rt in &result.retailers[1..] {
            assert_eq!(rt.total, 8.00);
            assert_eq!(rt.available_count, 0);
            assert_eq!(rt.substitute_count, 1);
            assert!(!rt.complete);
        }

        assert_eq!(result.savings, 0.40);
    }

    #[test]
    fn equal_totals_keep_fixed_retailer_order() {
        let item = product("p", "Thing", "Brand", 2.00);
        let mut pricing = HashMap::new();
        pricing.insert(
            item.id.clone(),
            priced(Some(1.50), Some(1.50), Some(1.50), Some(1.50)),
        );

        let result = compare::compare_basket(&[resolved(&item, 3)], &pricing).unwrap();

        let order: Vec<Retailer> = result.retailers.iter().map(|r| r.retailer).collect();
        assert_eq!(order, Retailer::ALL.to_vec());
        assert_eq!(result.savings, 0.0);
    }

    #[test]
    fn unmatched_item_never_counts_against_completeness() {
        let known = product("known", "Known", "Brand", 3.00);
        let custom = product("custom-unicorn-dust", "Unicorn Dust", "Custom", 2.00);
        let mut pricing = HashMap::new();
        pricing.insert(
            known.id.clone(),
            priced(Some(2.50), Some(2.50), Some(2.50), Some(2.50)),
        );
        // No pricing entry at all for the custom item

        let result =
            compare::compare_basket(&[resolved(&known, 1), resolved(&custom, 2)], &pricing)
                .unwrap();

        for rt in &result.retailers {
            // Baseline fallback: 2.50 + 2.00 * 2 everywhere
            assert_eq!(rt.total, 6.50);
            assert_eq!(rt.available_count, 1);
            assert_eq!(rt.substitute_count, 0);
            assert!(rt.complete);
        }
        assert_eq!(result.savings, 0.0);
    }

    #[test]
    fn totals_round_once_after_aggregation() {
        let item = product("p", "Thing", "Brand", 1.00);
        let mut pricing = HashMap::new();
        pricing.insert(
            item.id.clone(),
            priced(Some(0.10), Some(0.10), Some(0.10), Some(0.10)),
        );

        let result = compare::compare_basket(&[resolved(&item, 3)], &pricing).unwrap();
        for rt in &result.retailers {
            assert_eq!(rt.total, 0.30);
        }
    }

    #[test]
    fn ranking_is_ascending_and_savings_span_the_ranked_set() {
        let a = product("a", "A", "Brand", 5.00);
        let b = product("b", "B", "Brand", 3.00);
        let mut pricing = HashMap::new();
        pricing.insert(a.id.clone(), priced(Some(4.00), Some(6.00), None, Some(5.00)));
        pricing.insert(b.id.clone(), priced(Some(2.00), Some(2.50), Some(3.50), None));

        let result =
            compare::compare_basket(&[resolved(&a, 1), resolved(&b, 2)], &pricing).unwrap();

        for pair in result.retailers.windows(2) {
            assert!(pair[0].total <= pair[1].total);
        }
        let first = &result.retailers[0];
        let last = &result.retailers[result.retailers.len() - 1];
        assert_eq!(
            result.savings,
            ((last.total - first.total) * 100.0).round() / 100.0
        );
        assert!(result.savings >= 0.0);
        assert_eq!(result.best_retailer, first.retailer);
        for rt in &result.retailers {
            assert_eq!(rt.complete, rt.substitute_count == 0);
        }
    }

    #[test]
    fn compare_list_resolves_catalog_and_custom_items() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");

        let bananas = catalog.product_by_id("bananas-dole").unwrap().clone();
        items::add_item_to_list(&db, list.id, &bananas, 2).unwrap();
        items::add_custom_item(&db, list.id, "Unicorn Dust", 1).unwrap();

        let result = compare::compare_list(&db, &catalog, list.id).unwrap().unwrap();
        assert_eq!(result.retailers.len(), 4);
        for rt in &result.retailers {
            // Only the catalog item participates in availability counting
            assert_eq!(rt.available_count + rt.substitute_count, 1);
            assert!(rt.total >= 0.0);
        }
    }

    #[test]
    fn compare_list_of_empty_basket_is_none() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Empty");

        assert!(compare::compare_list(&db, &catalog, list.id).unwrap().is_none());
    }

    #[test]
    fn comparison_serializes_for_the_ui() {
        let milk = product("milk", "Milk", "Brand", 4.00);
        let mut pricing = HashMap::new();
        pricing.insert(milk.id.clone(), priced(Some(3.80), None, None, None));
        let result = compare::compare_basket(&[resolved(&milk, 2)], &pricing).unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["best_retailer"], "walmart");
        assert_eq!(value["retailers"][0]["total"], 7.6);
        assert_eq!(value["savings"], 0.4);
    }

    // ===== SEARCH TESTS =====

    #[test]
    fn blank_query_returns_nothing() {
        let catalog = Catalog::demo();
        assert!(search::search_catalog(&catalog, "", SearchMode::Cheapest).is_empty());
        assert!(search::search_catalog(&catalog, "   ", SearchMode::Cheapest).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_name_brand_category() {
        let catalog = Catalog::demo();

        let by_name = search::search_catalog(&catalog, "MILK", SearchMode::Cheapest);
        assert!(!by_name.is_empty());
        assert!(by_name.iter().all(|h| h.product.name.to_lowercase().contains("milk")));

        let by_brand = search::search_catalog(&catalog, "barilla", SearchMode::Cheapest);
        assert!(by_brand.iter().any(|h| h.product.brand == "Barilla"));

        let by_category = search::search_catalog(&catalog, "bakery", SearchMode::Cheapest);
        assert!(!by_category.is_empty());
        assert!(by_category.iter().all(|h| h.product.category == Category::Bakery));
    }

    #[test]
    fn cheapest_mode_sorts_by_min_price_with_unpriced_last() {
        let p1 = product("p1", "Widget One", "Acme", 3.00);
        let p2 = product("p2", "Widget Two", "Acme", 1.00);
        let p3 = product("p3", "Widget Three", "Acme", 2.00);
        let mut pricing = HashMap::new();
        pricing.insert("p1".to_string(), priced(Some(3.10), Some(2.90), None, None));
        pricing.insert("p2".to_string(), priced(None, None, None, None));
        pricing.insert("p3".to_string(), priced(None, Some(1.80), Some(2.10), None));
        let catalog = Catalog {
            products: vec![p1, p2, p3],
            pricing,
        };

        let hits = search::search_catalog(&catalog, "widget", SearchMode::Cheapest);
        let ids: Vec<&str> = hits.iter().map(|h| h.product.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
        assert_eq!(hits[0].min_price, Some(1.80));
        assert_eq!(hits[0].best_retailer, Some(Retailer::Costco));
        assert_eq!(hits[2].min_price, None);
        assert_eq!(hits[2].best_retailer, None);
    }

    #[test]
    fn min_price_ties_pick_the_first_retailer() {
        let p = product("p", "Widget", "Acme", 3.00);
        let mut pricing = HashMap::new();
        pricing.insert("p".to_string(), priced(Some(2.00), Some(2.00), Some(2.00), Some(2.00)));
        let catalog = Catalog {
            products: vec![p],
            pricing,
        };

        let hits = search::search_catalog(&catalog, "widget", SearchMode::Cheapest);
        assert_eq!(hits[0].best_retailer, Some(Retailer::Walmart));
    }

    #[test]
    fn brand_mode_ranks_brand_then_name_then_price() {
        let p1 = product("p1", "Oat Clusters", "Acme", 3.00);
        let p2 = product("p2", "Granola", "Oatly", 2.00);
        let p3 = product("p3", "Oatmeal Cookies", "Oatly", 4.00);
        let mut pricing = HashMap::new();
        pricing.insert("p1".to_string(), priced(Some(3.00), None, None, None));
        pricing.insert("p2".to_string(), priced(Some(2.00), None, None, None));
        pricing.insert("p3".to_string(), priced(Some(4.00), None, None, None));
        let catalog = Catalog {
            products: vec![p1, p2, p3],
            pricing,
        };

        let hits = search::search_catalog(&catalog, "oat", SearchMode::Brand);
        let ids: Vec<&str> = hits.iter().map(|h| h.product.id.as_str()).collect();
        // Brand matches first; within them, name matches before the rest
        assert_eq!(ids, vec!["p3", "p2", "p1"]);
    }

    #[test]
    fn results_are_capped_after_ranking() {
        let catalog = Catalog::demo();
        // Broad query matching far more than the cap
        let hits = search::search_catalog(&catalog, "a", SearchMode::Cheapest);
        assert_eq!(hits.len(), search::RESULT_LIMIT);
        for pair in hits.windows(2) {
            match (pair[0].min_price, pair[1].min_price) {
                (Some(x), Some(y)) => assert!(x <= y),
                (None, Some(_)) => panic!("unpriced hit ranked before a priced one"),
                _ => {}
            }
        }
    }

    #[test]
    fn suggestions_need_two_characters_and_stay_small() {
        let catalog = Catalog::demo();
        assert!(search::suggest(&catalog, "m").is_empty());

        let suggestions = search::suggest(&catalog, "mi");
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= search::SUGGESTION_LIMIT);
        for s in &suggestions {
            assert!(s.text.contains(" - "));
        }
    }

    // ===== LIST MANAGER TESTS =====

    #[test]
    fn create_list_rejects_blank_names() {
        let db = test_db();
        let catalog = Catalog::demo();
        let result = lists::create_list(
            &db,
            &catalog,
            CreateList {
                name: "   ".to_string(),
                color: "#fff".to_string(),
                image_url: None,
                initial_items: Vec::new(),
            },
        );
        assert!(result.is_err());
        assert!(lists::get_lists(&db).unwrap().is_empty());
    }

    #[test]
    fn create_list_becomes_active() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly Essentials");

        let active = lists::get_active_list(&db).unwrap().unwrap();
        assert_eq!(active.id, list.id);
        assert_eq!(active.name, "Weekly Essentials");
    }

    #[test]
    fn extracted_items_match_catalog_or_fall_back_to_custom() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = lists::create_list(
            &db,
            &catalog,
            CreateList {
                name: "Scanned".to_string(),
                color: "#fff".to_string(),
                image_url: None,
                initial_items: vec![
                    ExtractedItem {
                        name: "Bananas".to_string(),
                        quantity: 2,
                    },
                    ExtractedItem {
                        name: "Unicorn Dust".to_string(),
                        quantity: 0, // clamped up to 1
                    },
                ],
            },
        )
        .unwrap();

        let items = items::get_list_items(&db, list.id).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].product,
            ItemRef::Catalog {
                product_id: "bananas-dole".to_string()
            }
        );
        assert_eq!(items[0].quantity, 2);
        assert_eq!(
            items[1].product,
            ItemRef::Custom {
                name: "Unicorn Dust".to_string()
            }
        );
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn update_list_merges_partial_fields() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");

        let updated = lists::update_list(
            &db,
            UpdateList {
                id: list.id,
                name: None,
                color: Some("#FF0000".to_string()),
                image_url: None,
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(updated.name, "Weekly");
        assert_eq!(updated.color, "#FF0000");
        assert_eq!(updated.created_at, list.created_at);
    }

    #[test]
    fn update_of_unknown_list_is_a_noop() {
        let db = test_db();
        let result = lists::update_list(
            &db,
            UpdateList {
                id: 9999,
                name: Some("Ghost".to_string()),
                color: None,
                image_url: None,
            },
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn delete_list_cascades_to_items_and_collaborators() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");

        let bananas = catalog.product_by_id("bananas-dole").unwrap().clone();
        items::add_item_to_list(&db, list.id, &bananas, 1).unwrap();
        lists::add_collaborator(&db, list.id, "a@example.com", Role::Editor).unwrap();

        lists::delete_list(&db, list.id).unwrap();

        assert!(lists::get_list(&db, list.id).unwrap().is_none());
        assert!(items::get_list_items(&db, list.id).unwrap().is_empty());
        assert!(lists::get_list_collaborators(&db, list.id).unwrap().is_empty());
    }

    #[test]
    fn deleting_the_active_list_reselects_in_creation_order() {
        let db = test_db();
        let catalog = Catalog::demo();
        let first = create_plain_list(&db, &catalog, "First");
        let second = create_plain_list(&db, &catalog, "Second");

        // Creation made `second` active
        assert_eq!(lists::get_active_list(&db).unwrap().unwrap().id, second.id);

        lists::delete_list(&db, second.id).unwrap();
        assert_eq!(lists::get_active_list(&db).unwrap().unwrap().id, first.id);

        lists::delete_list(&db, first.id).unwrap();
        assert!(lists::get_active_list(&db).unwrap().is_none());
    }

    #[test]
    fn deleting_an_inactive_list_keeps_the_active_one() {
        let db = test_db();
        let catalog = Catalog::demo();
        let first = create_plain_list(&db, &catalog, "First");
        let second = create_plain_list(&db, &catalog, "Second");

        lists::delete_list(&db, first.id).unwrap();
        assert_eq!(lists::get_active_list(&db).unwrap().unwrap().id, second.id);
    }

    // ===== BASKET ITEM TESTS =====

    #[test]
    fn adding_the_same_product_merges_quantities() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");
        let spaghetti = catalog.product_by_id("spaghetti-barilla").unwrap().clone();

        items::add_item_to_list(&db, list.id, &spaghetti, 2).unwrap();
        items::add_item_to_list(&db, list.id, &spaghetti, 3).unwrap();

        let rows = items::get_list_items(&db, list.id).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 5);
    }

    #[test]
    fn quantity_floor_removes_the_item() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");
        let spaghetti = catalog.product_by_id("spaghetti-barilla").unwrap().clone();

        let item = items::add_item_to_list(&db, list.id, &spaghetti, 2).unwrap();
        assert!(items::update_item_quantity(&db, item.id, 0).unwrap().is_none());
        assert!(items::get_list_items(&db, list.id).unwrap().is_empty());

        let item = items::add_item_to_list(&db, list.id, &spaghetti, 2).unwrap();
        assert!(items::update_item_quantity(&db, item.id, -5).unwrap().is_none());
        assert!(items::get_list_items(&db, list.id).unwrap().is_empty());
    }

    #[test]
    fn positive_quantity_updates_stick() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");
        let spaghetti = catalog.product_by_id("spaghetti-barilla").unwrap().clone();

        let item = items::add_item_to_list(&db, list.id, &spaghetti, 1).unwrap();
        let updated = items::update_item_quantity(&db, item.id, 7).unwrap().unwrap();
        assert_eq!(updated.quantity, 7);
    }

    #[test]
    fn quantity_update_of_unknown_item_is_a_noop() {
        let db = test_db();
        assert!(items::update_item_quantity(&db, 4242, 3).unwrap().is_none());
    }

    #[test]
    fn remove_item_deletes_the_row() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");
        let spaghetti = catalog.product_by_id("spaghetti-barilla").unwrap().clone();

        let item = items::add_item_to_list(&db, list.id, &spaghetti, 1).unwrap();
        items::remove_item_from_list(&db, item.id).unwrap();
        assert!(items::get_list_items(&db, list.id).unwrap().is_empty());
    }

    #[test]
    fn items_group_by_category_with_customs_in_pantry() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");
        let bananas = catalog.product_by_id("bananas-dole").unwrap().clone();

        items::add_item_to_list(&db, list.id, &bananas, 1).unwrap();
        items::add_custom_item(&db, list.id, "Unicorn Dust", 1).unwrap();

        let grouped = items::get_items_by_category(&db, &catalog, list.id).unwrap();
        assert_eq!(grouped.len(), Category::ALL.len());

        let produce = grouped.iter().find(|(c, _)| *c == Category::Produce).unwrap();
        assert_eq!(produce.1.len(), 1);
        let pantry = grouped.iter().find(|(c, _)| *c == Category::Pantry).unwrap();
        assert_eq!(pantry.1.len(), 1);
    }

    // ===== COLLABORATOR TESTS =====

    #[test]
    fn collaborator_email_must_not_be_blank() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");

        assert!(lists::add_collaborator(&db, list.id, "   ", Role::Viewer).is_err());
        assert!(lists::get_list_collaborators(&db, list.id).unwrap().is_empty());
    }

    #[test]
    fn collaborators_allow_duplicates_and_keep_roles() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");

        lists::add_collaborator(&db, list.id, "a@example.com", Role::Viewer).unwrap();
        lists::add_collaborator(&db, list.id, "a@example.com", Role::Editor).unwrap();

        let all = lists::get_list_collaborators(&db, list.id).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].role, Role::Viewer);
        assert_eq!(all[1].role, Role::Editor);
    }

    #[test]
    fn remove_collaborator_deletes_the_row() {
        let db = test_db();
        let catalog = Catalog::demo();
        let list = create_plain_list(&db, &catalog, "Weekly");

        let c = lists::add_collaborator(&db, list.id, "a@example.com", Role::Viewer).unwrap();
        lists::remove_collaborator(&db, c.id).unwrap();
        assert!(lists::get_list_collaborators(&db, list.id).unwrap().is_empty());
    }

    // ===== STORE TESTS =====

    #[test]
    fn file_backed_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grocery.db");
        let catalog = Catalog::demo();

        {
            let db = Database::open(&path).unwrap();
            db.initialize().unwrap();
            create_plain_list(&db, &catalog, "Weekly");
        }

        let db = Database::open(&path).unwrap();
        db.initialize().unwrap();
        let all = lists::get_lists(&db).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Weekly");
    }
}
