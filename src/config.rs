pub const API_BASE: &str = "https://labdados.com";
pub const PRODUCTS_ENDPOINT: &str = "https://labdados.com/produtos";

/// Day/month/year format used by the dataset's `Data da Compra` field.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Inclusive bounds on the seller ranking size accepted by
/// [`SellerQuery`](crate::queries::sellers::SellerQuery) ranking methods.
pub const SELLER_RANKING_MIN: usize = 2;
pub const SELLER_RANKING_MAX: usize = 10;
