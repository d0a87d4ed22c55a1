pub mod date;
pub mod numeric;
pub mod path;
pub mod table;
