pub mod delete;
pub mod draw;
pub mod list;
pub mod refresh;
pub mod select;
pub mod show;

// Re-export handler functions for use in routing
pub use delete::delete;
pub use draw::{commit, draw};
pub use list::list;
pub use refresh::refresh;
pub use select::select;
pub use show::show;
