pub mod purchase;

pub use purchase::{BillingRequest, BillingResponse, PurchaseDraft, QrPayload};
