mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{apply_port_override, dictionaries_dir, resolve_config};
pub use types::{MailProvider, MailSection, SiteConfig};
