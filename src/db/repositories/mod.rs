pub mod invoice;
pub mod invoice_item;
pub mod tax_profile;
pub mod user;

pub use invoice::InvoiceRepository;
pub use invoice_item::InvoiceItemRepository;
pub use tax_profile::TaxProfileRepository;
pub use user::UserRepository;
