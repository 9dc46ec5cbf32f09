pub mod compare;
pub mod items;
pub mod lists;
pub mod search;
