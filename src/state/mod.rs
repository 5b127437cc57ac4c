mod expansion;
mod reducer;
mod selection;

pub use expansion::ExpansionState;
pub use reducer::{reduce, TreeEvent, TreeState};
pub use selection::{SelectionMode, SelectionState};
