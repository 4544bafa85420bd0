pub mod column;
pub mod data_table;
pub mod sortable_header_cell;

pub use column::{ColumnDescriptor, CellAccessor, CellFormatter};
pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
