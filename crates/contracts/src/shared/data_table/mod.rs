pub mod cell;
pub mod fetch;
pub mod render_state;
pub mod row;
pub mod sort;

pub use cell::*;
pub use fetch::*;
pub use render_state::*;
pub use row::*;
pub use sort::*;
