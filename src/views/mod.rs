pub mod app;
pub mod purchase_form;
pub mod scanner;

pub use app::render_app;
pub use purchase_form::render_purchase_form;
pub use scanner::render_scanner;
