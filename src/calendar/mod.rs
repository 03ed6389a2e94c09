//! Month arithmetic, the month grid, and the terminal rendering of a picker
mod grid;
pub mod math;
mod widget;
pub use self::grid::{month_grid, GridCell, GRID_CELLS, GRID_ROWS};
pub use self::widget::{PickerPanel, PANEL_WIDTH};
