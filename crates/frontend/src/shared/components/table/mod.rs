pub mod data_table;
pub mod sortable_header_cell;

pub use data_table::{DataTable, RowActions};
pub use sortable_header_cell::SortableHeaderCell;
