use super::loader::{find_site_config, load_site_config};
use super::*;

mod validation;
