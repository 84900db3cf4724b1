pub mod dashboard;
pub mod draw;
pub mod view;

pub use dashboard::{Dashboard, DrawCommit};
pub use draw::{selection_summary, DRAW_SIZE};
pub use view::{
    page_of, tab_counts, Sort, SortDirection, SortField, Tab, TabCounts, ViewPage, ViewQuery,
    PAGE_SIZE,
};
