pub mod contact_form;
pub mod error;
pub mod faq_accordion;
pub mod lazy_image;
pub mod navbar;
pub mod scroll_to_top;
pub mod stat_counter;

// Re-export commonly used types
pub use contact_form::ContactFormView;
pub use error::ErrorView;
pub use faq_accordion::{FaqEntry, FaqList};
pub use lazy_image::LazyImage;
pub use navbar::Navbar;
pub use scroll_to_top::ScrollToTop;
pub use stat_counter::StatCounter;
