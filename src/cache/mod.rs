mod entry_lists;
mod rankings;
mod store;

pub use entry_lists::{merge_entry_list, EntryListCache};
pub use rankings::{is_complete, RankingCache};
pub use store::JsonStore;
