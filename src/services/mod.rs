pub mod invoice;
pub mod invoice_item;
pub mod tax_profile;
pub mod user;

pub use invoice::InvoiceService;
pub use invoice_item::InvoiceItemService;
pub use tax_profile::TaxProfileService;
pub use user::UserService;
