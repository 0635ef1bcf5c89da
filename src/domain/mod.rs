pub mod format;
pub mod listing;
pub mod view;

pub use listing::ListingRecord;
