/// Remote exchange-rate endpoint. Only fiat-to-fiat pairs go over the wire.
pub struct RateApiConfig {
    /// Scheme + host, no trailing slash
    pub base_url: &'static str,
    /// Path prefix; the source currency code is appended
    pub latest_path: &'static str,
}

pub const RATE_API: RateApiConfig = RateApiConfig {
    base_url: "https://api.exchangerate-api.com",
    latest_path: "/v4/latest/",
};
