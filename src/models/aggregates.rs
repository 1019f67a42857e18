use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LocationRevenue / LocationSales — geo-joined by-location rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSales {
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub sales: u64,
}

// ---------------------------------------------------------------------------
// MonthlyRevenue / MonthlySales — (year, month) bucket rows
// ---------------------------------------------------------------------------

/// One (year, month) bucket. `month` is the English month name, ready for
/// chart axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub year: i32,
    pub month: String,
    pub sales: u64,
}

// ---------------------------------------------------------------------------
// CategoryRevenue / CategorySales — by-category rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub sales: u64,
}

// ---------------------------------------------------------------------------
// SellerSummary — by-seller row carrying both metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller: String,
    pub revenue: f64,
    pub sales: u64,
}
