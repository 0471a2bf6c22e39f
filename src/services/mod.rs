pub mod catalog;
pub mod certificates;
pub mod contact;
pub mod markdown;
pub mod seo;
pub mod slug;
