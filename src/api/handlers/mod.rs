//! HTTP request handlers for public and admin endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod domains;
pub mod health;
pub mod links;
pub mod redirect;
pub mod settings;

pub use domains::{add_domain_handler, list_domains_handler, remove_domain_handler};
pub use health::health_handler;
pub use links::{
    delete_link_handler, export_links_handler, import_links_handler, upsert_link_handler,
};
pub use redirect::{redirect_handler, root_redirect_handler};
pub use settings::{
    change_password_handler, export_settings_handler, settings_view_handler,
    update_settings_handler,
};
