pub mod check_handlers;
pub mod facet_handlers;
pub mod list_handlers;
pub mod showcase_handlers;

pub use check_handlers::{handle_check, CheckArgs};
pub use facet_handlers::{handle_facets, FacetArgs};
pub use list_handlers::{handle_list, ListArgs};
pub use showcase_handlers::{handle_showcase, ShowcaseCommand};
