//! UI Components
//!
//! List and detail views plus their building blocks.

mod back_button;
mod filter_bar;
mod todo_row;
mod todo_list;
mod todo_detail;

pub use back_button::BackButton;
pub use filter_bar::FilterBar;
pub use todo_row::TodoRow;
pub use todo_list::TodoList;
pub use todo_detail::TodoDetail;
