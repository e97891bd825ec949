pub mod colors;
pub mod date;
pub mod formatting;
pub mod money;
pub mod path;
pub mod table;

pub use formatting::visible_width;
pub use money::format_currency;
