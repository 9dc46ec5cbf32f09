use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Dairy,
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    Bakery,
    Household,
    #[serde(rename = "Personal Care")]
    PersonalCare,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Produce,
        Category::Dairy,
        Category::MeatSeafood,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::Snacks,
        Category::Bakery,
        Category::Household,
        Category::PersonalCare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::MeatSeafood => "Meat & Seafood",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Bakery => "Bakery",
            Category::Household => "Household",
            Category::PersonalCare => "Personal Care",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Walmart,
    Costco,
    Target,
    Kroger,
}

impl Retailer {
    /// Fixed enumeration order; ranking ties are broken by this order.
    pub const ALL: [Retailer; 4] = [
        Retailer::Walmart,
        Retailer::Costco,
        Retailer::Target,
        Retailer::Kroger,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Retailer::Walmart => "walmart",
            Retailer::Costco => "costco",
            Retailer::Target => "target",
            Retailer::Kroger => "kroger",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Retailer::Walmart => "Walmart",
            Retailer::Costco => "Costco",
            Retailer::Target => "Target",
            Retailer::Kroger => "Kroger",
        }
    }

    /// Brand color swatch for the UI layer.
    pub fn color(self) -> &'static str {
        match self {
            Retailer::Walmart => "#0071CE",
            Retailer::Costco => "#E31837",
            Retailer::Target => "#CC0000",
            Retailer::Kroger => "#0066B2",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub size: String,
    pub base_price: f64,
    #[serde(default)]
    pub is_private_label: bool,
}

/// One retailer's quote for a product. `price: None` means the retailer does
/// not carry the item and a substitute estimate applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerPrice {
    pub price: Option<f64>,
    #[serde(default)]
    pub is_substitute: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_note: Option<String>,
}

impl RetailerPrice {
    pub fn available(price: f64) -> Self {
        RetailerPrice {
            price: Some(price),
            is_substitute: false,
            substitute_note: None,
        }
    }

    pub fn substitute(note: &str) -> Self {
        RetailerPrice {
            price: None,
            is_substitute: true,
            substitute_note: Some(note.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerPricing {
    pub walmart: RetailerPrice,
    pub costco: RetailerPrice,
    pub target: RetailerPrice,
    pub kroger: RetailerPrice,
}

impl RetailerPricing {
    pub fn get(&self, retailer: Retailer) -> &RetailerPrice {
        match retailer {
            Retailer::Walmart => &self.walmart,
            Retailer::Costco => &self.costco,
            Retailer::Target => &self.target,
            Retailer::Kroger => &self.kroger,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Free-text line produced by the (external) image/receipt extraction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateList {
    pub name: String,
    pub color: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub initial_items: Vec<ExtractedItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateList {
    pub id: i64,
    pub name: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

/// What a basket row points at: a catalog product, or a free-text custom
/// entry that never matched the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemRef {
    Catalog { product_id: String },
    Custom { name: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: i64,
    pub list_id: i64,
    pub product: ItemRef,
    pub quantity: i64,
    pub added_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Editor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
        }
    }

    pub fn from_db(s: &str) -> Role {
        match s {
            "editor" => Role::Editor,
            _ => Role::Viewer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    pub list_id: i64,
    pub email: String,
    pub role: Role,
    pub added_at: String,
}

/// A basket row resolved against the catalog, ready for comparison. Custom
/// entries resolve to a synthetic zero-price product.
#[derive(Debug, Clone)]
pub struct ResolvedItem {
    pub product: Product,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerTotal {
    pub retailer: Retailer,
    pub total: f64,
    pub available_count: usize,
    pub substitute_count: usize,
    pub complete: bool,
}

/// Result of comparing one basket across all retailers. `retailers` is
/// ranked ascending by total; recomputed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub retailers: Vec<RetailerTotal>,
    pub best_retailer: Retailer,
    pub savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Cheapest,
    Brand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub product: Product,
    pub pricing: RetailerPricing,
    pub min_price: Option<f64>,
    pub best_retailer: Option<Retailer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub product: Product,
}
