mod certificate;
mod contact;
mod listing;

pub use certificate::*;
pub use contact::*;
pub use listing::*;
