/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HS256 signing secret for access tokens.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3114). Env var: `API_PORT`.
    pub api_port: u16,
    /// Stripe secret API key (`sk_...`).
    pub stripe_secret_key: String,
    /// Stripe webhook signing secret (`whsec_...`).
    pub stripe_webhook_secret: String,
    /// Browser redirect after a completed checkout.
    pub checkout_success_url: String,
    /// Browser redirect after an abandoned checkout.
    pub checkout_cancel_url: String,
    /// ISO currency code for checkout line items (default "usd").
    pub checkout_currency: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY"),
            stripe_webhook_secret: std::env::var("STRIPE_WEBHOOK_SECRET")
                .expect("STRIPE_WEBHOOK_SECRET"),
            checkout_success_url: std::env::var("CHECKOUT_SUCCESS_URL")
                .expect("CHECKOUT_SUCCESS_URL"),
            checkout_cancel_url: std::env::var("CHECKOUT_CANCEL_URL").expect("CHECKOUT_CANCEL_URL"),
            checkout_currency: std::env::var("CHECKOUT_CURRENCY")
                .unwrap_or_else(|_| "usd".to_string()),
        }
    }
}
