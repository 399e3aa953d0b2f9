/// User interface module
///
/// - `grid` - thumbnail grid for the gallery window
/// - `viewer` - full-image viewer window
/// - `style` - stylesheet resolution for both

pub mod grid;
pub mod style;
pub mod viewer;
