mod detail;
mod placement;
mod sheet;

#[doc(inline)]
pub use detail::RectSpec;
#[doc(inline)]
pub use placement::{PackingResult, Placement};
#[doc(inline)]
pub use sheet::Sheet;
