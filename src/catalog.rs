use crate::models::{Category, Product, Retailer, RetailerPrice, RetailerPricing};
use std::collections::HashMap;

/// Deterministic stand-in for a random source: a pure function of the seed,
/// so pricing is stable across runs and process restarts.
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10000.0;
    x - x.floor()
}

/// Symmetric price jitter in the [-0.08, 0.08) band.
pub fn seeded_variance(seed: i64) -> f64 {
    seeded_random(seed) * 0.16 - 0.08
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

struct RetailerParams {
    /// Systematic markup/discount against the base price.
    bias: f64,
    unavailable_rate: f64,
    substitute_note: &'static str,
    /// Seed offset, so each retailer draws independent values.
    probe: i64,
}

fn params(retailer: Retailer) -> RetailerParams {
    match retailer {
        Retailer::Walmart => RetailerParams {
            bias: 0.95,
            unavailable_rate: 0.05,
            substitute_note: "Similar item available",
            probe: 1,
        },
        Retailer::Costco => RetailerParams {
            bias: 0.88,
            unavailable_rate: 0.08,
            substitute_note: "Bulk alternative available",
            probe: 2,
        },
        Retailer::Target => RetailerParams {
            bias: 1.03,
            unavailable_rate: 0.05,
            substitute_note: "Store brand available",
            probe: 3,
        },
        Retailer::Kroger => RetailerParams {
            bias: 0.98,
            unavailable_rate: 0.03,
            substitute_note: "Kroger brand available",
            probe: 4,
        },
    }
}

fn quote(base_price: f64, seed: i64, retailer: Retailer) -> RetailerPrice {
    let p = params(retailer);
    if seeded_random(seed + p.probe) < p.unavailable_rate {
        return RetailerPrice::substitute(p.substitute_note);
    }
    let price = round2(base_price * (p.bias + seeded_variance(seed + p.probe * 10)));
    RetailerPrice::available(price.max(0.01))
}

/// Generate per-retailer pricing for one product. Pure: the same
/// `(base_price, seed)` pair always yields the same result.
pub fn generate_retailer_pricing(base_price: f64, seed: i64) -> RetailerPricing {
    RetailerPricing {
        walmart: quote(base_price, seed, Retailer::Walmart),
        costco: quote(base_price, seed, Retailer::Costco),
        target: quote(base_price, seed, Retailer::Target),
        kroger: quote(base_price, seed, Retailer::Kroger),
    }
}

fn slug(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

pub fn product_id(name: &str, brand: &str) -> String {
    format!("{}-{}", slug(name), slug(brand))
}

/// The static product catalog with pre-generated retailer pricing.
pub struct Catalog {
    pub(crate) products: Vec<Product>,
    pub(crate) pricing: HashMap<String, RetailerPricing>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let mut pricing = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            let seed = index as i64 * 1000;
            pricing.insert(
                product.id.clone(),
                generate_retailer_pricing(product.base_price, seed),
            );
        }
        Catalog { products, pricing }
    }

    pub fn demo() -> Self {
        let products = DEMO_PRODUCTS
            .iter()
            .map(|&(name, brand, category, size, base_price, is_private_label)| Product {
                id: product_id(name, brand),
                name: name.to_string(),
                brand: brand.to_string(),
                category,
                size: size.to_string(),
                base_price,
                is_private_label,
            })
            .collect();
        Catalog::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn pricing_for(&self, product_id: &str) -> Option<&RetailerPricing> {
        self.pricing.get(product_id)
    }

    pub fn pricing(&self) -> &HashMap<String, RetailerPricing> {
        &self.pricing
    }

    /// Loose match for extracted free-text item names: either string may
    /// contain the other, case-insensitively. First catalog hit wins.
    pub fn fuzzy_match(&self, name: &str) -> Option<&Product> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.products.iter().find(|p| {
            let product_name = p.name.to_lowercase();
            product_name.contains(&needle) || needle.contains(&product_name)
        })
    }
}

use crate::models::Category as C;

/// Demo catalog (fake data, realistic shape). Order matters: the index
/// seeds the pricing generator.
const DEMO_PRODUCTS: &[(&str, &str, Category, &str, f64, bool)] = &[
    // Produce
    ("Bananas", "Dole", C::Produce, "1 lb", 0.59, false),
    ("Organic Bananas", "Dole", C::Produce, "1 lb", 0.79, false),
    ("Gala Apples", "Stemilt", C::Produce, "3 lb bag", 4.99, false),
    ("Honeycrisp Apples", "Stemilt", C::Produce, "2 lb", 5.99, false),
    ("Navel Oranges", "Sunkist", C::Produce, "4 lb bag", 5.49, false),
    ("Strawberries", "Driscoll's", C::Produce, "1 lb", 3.99, false),
    ("Blueberries", "Driscoll's", C::Produce, "6 oz", 4.49, false),
    ("Avocados", "Hass", C::Produce, "4 count", 4.99, false),
    ("Baby Spinach", "Earthbound Farm", C::Produce, "5 oz", 3.49, false),
    ("Romaine Hearts", "Fresh Express", C::Produce, "3 count", 3.49, false),
    ("Baby Carrots", "Bolthouse", C::Produce, "1 lb", 1.99, false),
    ("Russet Potatoes", "Idaho", C::Produce, "5 lb bag", 3.99, false),
    ("Yellow Onions", "Fresh", C::Produce, "3 lb bag", 2.99, false),
    ("Broccoli Crowns", "Fresh", C::Produce, "1 lb", 2.49, false),
    ("Roma Tomatoes", "Fresh", C::Produce, "1 lb", 1.99, false),
    ("English Cucumber", "Fresh", C::Produce, "1 count", 1.49, false),
    ("Lemons", "Sunkist", C::Produce, "2 lb bag", 3.49, false),
    // Dairy
    ("2% Reduced Fat Milk", "Horizon Organic", C::Dairy, "1 gallon", 6.49, false),
    ("Whole Milk", "Horizon Organic", C::Dairy, "1 gallon", 6.49, false),
    ("2% Reduced Fat Milk", "Great Value", C::Dairy, "1 gallon", 3.48, true),
    ("Whole Milk", "Kirkland Signature", C::Dairy, "1 gallon", 3.29, true),
    ("Almond Milk Unsweetened", "Almond Breeze", C::Dairy, "64 oz", 3.99, false),
    ("Oat Milk Original", "Oatly", C::Dairy, "64 oz", 5.49, false),
    ("Large Eggs", "Eggland's Best", C::Dairy, "12 count", 4.99, false),
    ("Large Eggs", "Great Value", C::Dairy, "12 count", 3.29, true),
    ("Butter Salted", "Land O'Lakes", C::Dairy, "1 lb", 5.49, false),
    ("Pure Irish Butter", "Kerrygold", C::Dairy, "8 oz", 4.99, false),
    ("Greek Yogurt Plain", "Chobani", C::Dairy, "32 oz", 5.99, false),
    ("Shredded Sharp Cheddar", "Tillamook", C::Dairy, "8 oz", 4.49, false),
    ("Shredded Mozzarella", "Galbani", C::Dairy, "8 oz", 3.99, false),
    ("Cream Cheese Original", "Philadelphia", C::Dairy, "8 oz", 3.99, false),
    ("Sour Cream", "Daisy", C::Dairy, "16 oz", 2.99, false),
    ("Heavy Whipping Cream", "Organic Valley", C::Dairy, "16 oz", 5.99, false),
    ("Parmesan Wedge", "BelGioioso", C::Dairy, "8 oz", 7.99, false),
    ("American Cheese Singles", "Kraft", C::Dairy, "16 slices", 4.29, false),
    // Meat & Seafood
    ("Ground Beef 80/20", "Fresh", C::MeatSeafood, "1 lb", 5.99, false),
    ("Boneless Skinless Chicken Breast", "Perdue", C::MeatSeafood, "1.5 lb", 8.99, false),
    ("Boneless Chicken Thighs", "Perdue", C::MeatSeafood, "1.25 lb", 6.99, false),
    ("Chicken Wings", "Tyson", C::MeatSeafood, "2.5 lb", 12.99, false),
    ("Hardwood Smoked Bacon", "Oscar Mayer", C::MeatSeafood, "16 oz", 7.99, false),
    ("Italian Sausage Links", "Johnsonville", C::MeatSeafood, "19 oz", 5.99, false),
    ("Beef Franks", "Hebrew National", C::MeatSeafood, "12 oz", 5.99, false),
    ("Black Forest Ham", "Boar's Head", C::MeatSeafood, "8 oz", 8.99, false),
    ("Oven Roasted Turkey", "Boar's Head", C::MeatSeafood, "8 oz", 9.49, false),
    ("Ribeye Steak", "USDA Choice", C::MeatSeafood, "12 oz", 14.99, false),
    ("Atlantic Salmon Fillet", "Fresh", C::MeatSeafood, "1 lb", 12.99, false),
    ("Raw Shrimp 21-25 count", "Fresh", C::MeatSeafood, "1 lb", 11.99, false),
    ("Ground Turkey 93% Lean", "Jennie-O", C::MeatSeafood, "1 lb", 5.99, false),
    // Pantry
    ("Jasmine White Rice", "Dynasty", C::Pantry, "5 lb", 7.99, false),
    ("Spaghetti", "Barilla", C::Pantry, "16 oz", 1.99, false),
    ("Penne Rigate", "Barilla", C::Pantry, "16 oz", 1.99, false),
    ("Mac & Cheese Original", "Kraft", C::Pantry, "7.25 oz", 1.49, false),
    ("Marinara Sauce", "Rao's Homemade", C::Pantry, "24 oz", 8.99, false),
    ("Traditional Marinara", "Prego", C::Pantry, "24 oz", 3.49, false),
    ("Diced Tomatoes", "Hunt's", C::Pantry, "14.5 oz", 1.29, false),
    ("Chicken Broth", "Swanson", C::Pantry, "32 oz", 2.99, false),
    ("Extra Virgin Olive Oil", "Bertolli", C::Pantry, "25.5 oz", 9.99, false),
    ("All-Purpose Flour", "Gold Medal", C::Pantry, "5 lb", 4.29, false),
    ("Granulated White Sugar", "Domino", C::Pantry, "4 lb", 3.99, false),
    ("Raw & Unfiltered Honey", "Nature Nate's", C::Pantry, "16 oz", 8.99, false),
    ("Creamy Peanut Butter", "Jif", C::Pantry, "16 oz", 3.99, false),
    ("Concord Grape Jelly", "Welch's", C::Pantry, "18 oz", 3.49, false),
    ("Black Beans", "Goya", C::Pantry, "15.5 oz", 1.29, false),
    ("Chunk Light Tuna in Water", "StarKist", C::Pantry, "5 oz", 1.49, false),
    ("Cheerios Original", "General Mills", C::Pantry, "18 oz", 5.49, false),
    ("Old Fashioned Oats", "Quaker", C::Pantry, "42 oz", 5.99, false),
    ("Pure Maple Syrup", "Kirkland Signature", C::Pantry, "33.8 oz", 14.99, true),
    ("Real Mayonnaise", "Hellmann's", C::Pantry, "30 oz", 5.99, false),
    ("Tomato Ketchup", "Heinz", C::Pantry, "32 oz", 4.49, false),
    ("Soy Sauce", "Kikkoman", C::Pantry, "15 oz", 3.49, false),
    // Frozen
    ("Rising Crust Pepperoni Pizza", "DiGiorno", C::Frozen, "27.5 oz", 8.99, false),
    ("Party Pizza Pepperoni", "Totino's", C::Frozen, "10.2 oz", 2.49, false),
    ("Half Baked Ice Cream", "Ben & Jerry's", C::Frozen, "16 oz", 5.99, false),
    ("Vanilla Bean Ice Cream", "Tillamook", C::Frozen, "48 oz", 6.99, false),
    ("Steamfresh Mixed Vegetables", "Birds Eye", C::Frozen, "10 oz", 2.49, false),
    ("Mixed Berries", "Dole", C::Frozen, "12 oz", 4.49, false),
    ("Golden Fries", "Ore-Ida", C::Frozen, "32 oz", 4.99, false),
    ("Chicken Nuggets", "Tyson", C::Frozen, "32 oz", 9.99, false),
    ("Fish Sticks", "Gorton's", C::Frozen, "19 oz", 7.99, false),
    ("Homestyle Waffles", "Eggo", C::Frozen, "10 count", 3.99, false),
    ("Chicken Pot Pie", "Marie Callender's", C::Frozen, "15 oz", 4.49, false),
    ("Lasagna with Meat Sauce", "Stouffer's", C::Frozen, "19 oz", 5.99, false),
    // Beverages
    ("Coca-Cola", "Coca-Cola", C::Beverages, "12 pack 12 oz cans", 7.99, false),
    ("Pepsi", "Pepsi", C::Beverages, "12 pack 12 oz cans", 7.99, false),
    ("Sparkling Water Lime", "LaCroix", C::Beverages, "8 pack 12 oz cans", 4.99, false),
    ("Purified Drinking Water", "Kirkland Signature", C::Beverages, "40 pack 16.9 oz", 4.49, true),
    ("Orange Juice No Pulp", "Tropicana", C::Beverages, "52 oz", 4.99, false),
    ("100% Apple Juice", "Mott's", C::Beverages, "64 oz", 3.49, false),
    ("Sweet Tea", "Gold Peak", C::Beverages, "59 oz", 3.49, false),
    ("Classic Roast Ground Coffee", "Folgers", C::Beverages, "30.5 oz", 9.99, false),
    ("Pike Place Roast Ground", "Starbucks", C::Beverages, "12 oz", 9.99, false),
    ("Red Bull Energy Drink", "Red Bull", C::Beverages, "4 pack 8.4 oz", 9.99, false),
    ("Gatorade Fruit Punch", "Gatorade", C::Beverages, "8 pack 20 oz", 8.99, false),
    ("Hot Cocoa Mix", "Swiss Miss", C::Beverages, "8 count", 2.99, false),
    // Snacks
    ("Classic Potato Chips", "Lay's", C::Snacks, "10 oz", 4.49, false),
    ("Nacho Cheese Doritos", "Doritos", C::Snacks, "9.25 oz", 4.99, false),
    ("Scoops Tortilla Chips", "Tostitos", C::Snacks, "10 oz", 4.49, false),
    ("Mini Pretzels", "Snyder's of Hanover", C::Snacks, "16 oz", 3.99, false),
    ("Goldfish Cheddar", "Pepperidge Farm", C::Snacks, "6.6 oz", 2.99, false),
    ("Original Oreo", "Oreo", C::Snacks, "14.3 oz", 4.99, false),
    ("Crunchy Oats & Honey", "Nature Valley", C::Snacks, "12 count", 4.49, false),
    ("Whole Natural Almonds", "Blue Diamond", C::Snacks, "16 oz", 8.99, false),
    ("Original Beef Jerky", "Jack Link's", C::Snacks, "2.85 oz", 6.99, false),
    ("Classic Hummus", "Sabra", C::Snacks, "10 oz", 4.99, false),
    // Bakery
    ("Classic White Bread", "Wonder", C::Bakery, "20 oz", 2.99, false),
    ("100% Whole Wheat Bread", "Nature's Own", C::Bakery, "20 oz", 3.99, false),
    ("Plain Bagels", "Thomas'", C::Bakery, "6 count", 4.49, false),
    ("Butter Hamburger Buns", "Nature's Own", C::Bakery, "8 count", 3.99, false),
    ("Flour Tortillas Soft Taco", "Mission", C::Bakery, "10 count", 3.49, false),
    ("Butter Croissants", "Bakery Fresh", C::Bakery, "4 count", 4.99, false),
    ("Blueberry Muffins", "Otis Spunkmeyer", C::Bakery, "4 count", 5.99, false),
    ("Cinnamon Rolls with Icing", "Pillsbury", C::Bakery, "8 count", 4.49, false),
    // Household
    ("Select-A-Size Paper Towels", "Bounty", C::Household, "8 rolls", 19.99, false),
    ("Ultra Soft Toilet Paper", "Charmin", C::Household, "12 mega rolls", 21.99, false),
    ("Strong Trash Bags 13 gal", "Hefty", C::Household, "80 count", 12.99, false),
    ("Ultra Dishwashing Liquid", "Dawn", C::Household, "19.4 oz", 3.99, false),
    ("Liquid Laundry Detergent", "Tide", C::Household, "92 oz", 14.99, false),
    ("Disinfecting Wipes", "Clorox", C::Household, "75 count", 5.99, false),
    ("Aluminum Foil", "Reynolds Wrap", C::Household, "75 sq ft", 5.99, false),
    ("Gallon Storage Bags", "Ziploc", C::Household, "38 count", 7.99, false),
    // Personal Care
    ("Total Whitening Toothpaste", "Colgate", C::PersonalCare, "4.8 oz", 4.99, false),
    ("Classic Clean Shampoo", "Head & Shoulders", C::PersonalCare, "23.7 oz", 8.99, false),
    ("Deep Moisture Body Wash", "Dove", C::PersonalCare, "22 oz", 7.99, false),
    ("Liquid Hand Soap Fresh Breeze", "Softsoap", C::PersonalCare, "7.5 oz", 2.49, false),
    ("Daily Moisturizing Lotion", "Aveeno", C::PersonalCare, "18 oz", 11.99, false),
    ("Flexible Fabric Bandages", "Band-Aid", C::PersonalCare, "100 count", 8.99, false),
];
