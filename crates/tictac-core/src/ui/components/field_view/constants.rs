//! Default dimensions of the board widget, in density-independent units

/// Cell edge length the widget asks for when the host does not fix its size
pub const DESIRED_CELL_SIZE_DP: f32 = 50.0;

/// Gap between a cell's edges and the mark drawn inside it
pub const CELL_PADDING_DP: f32 = 7.0;

/// Stroke width of the X and O marks
pub const MARK_STROKE_DP: f32 = 3.0;

/// Stroke width of the grid lines
pub const GRID_STROKE_DP: f32 = 1.5;

/// Pixels per dp on the reference display
pub const DEFAULT_DENSITY: f32 = 1.0;
