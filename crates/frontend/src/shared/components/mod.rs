pub mod empty_state;
pub mod page_error_state;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod skeleton;
pub mod stat_card;
pub mod ui;

pub use empty_state::{EmptyState, StateAction};
pub use page_error_state::PageErrorState;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use skeleton::Skeleton;
pub use stat_card::{StatCard, StatCards};
