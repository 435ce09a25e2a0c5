mod table;
mod types;

#[cfg(test)]
mod tests;

pub use table::{RouteTable, SITE_ROUTES, canonical_path};
pub use types::{
  LocaleSwitch, PathTemplate, RouteEntry, RouteError, RouteMatch, RouteParams, Segment,
  route_params,
};
