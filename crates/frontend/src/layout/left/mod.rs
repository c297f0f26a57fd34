mod left;
mod navbar;

pub use left::Left;
