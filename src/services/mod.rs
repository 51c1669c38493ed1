pub mod billing_client;

pub use billing_client::BillingClient;
