//! Shared test fixtures for the labdados SDK integration tests.
//!
//! Provides raw rows in the upstream JSON shape (built via `serde_json::json!`)
//! and a small sample report spanning two states, three sellers, three
//! categories and three months across two years.

use labdados_sdk::models::RawProduct;
use labdados_sdk::SalesReport;

/// One raw record in the upstream JSON shape.
pub fn raw_row(
    category: &str,
    price: f64,
    date: &str,
    location: &str,
    lat: f64,
    lon: f64,
    seller: &str,
) -> RawProduct {
    serde_json::from_value(serde_json::json!({
        "Categoria do Produto": category,
        "Preço": price,
        "Data da Compra": date,
        "Local da compra": location,
        "lat": lat,
        "lon": lon,
        "Vendedor": seller,
    }))
    .unwrap()
}

/// The raw sample batch. Totals: revenue 1500.00 over 5 sales.
///
/// By state: São Paulo 1150.00 / 3 sales, Rio de Janeiro 350.00 / 2 sales.
/// By category: eletronicos 900.00, livros 300.00, moveis 300.00 (revenue
/// tie between livros and moveis). By seller: Ana 150.00 / 2, Beto
/// 1050.00 / 2, Carla 300.00 / 1.
pub fn sample_rows() -> Vec<RawProduct> {
    vec![
        raw_row("livros", 100.0, "15/01/2022", "São Paulo", -23.55, -46.63, "Ana"),
        raw_row("eletronicos", 900.0, "20/01/2022", "São Paulo", -23.55, -46.63, "Beto"),
        raw_row("livros", 50.0, "03/02/2022", "Rio de Janeiro", -22.91, -43.17, "Ana"),
        raw_row("moveis", 300.0, "03/02/2022", "Rio de Janeiro", -22.91, -43.17, "Carla"),
        raw_row("livros", 150.0, "28/12/2021", "São Paulo", -23.55, -46.63, "Beto"),
    ]
}

/// The sample batch, validated into a report.
pub fn sample_report() -> SalesReport {
    SalesReport::from_raw(sample_rows()).unwrap()
}
