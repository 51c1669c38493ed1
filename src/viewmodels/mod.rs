pub mod purchase_viewmodel;

pub use purchase_viewmodel::PurchaseViewModel;
