pub mod board;
pub mod clock;
pub mod pointer;
pub mod scoring;
pub mod selection;

pub use board::{Surface, TileBoard};
pub use clock::{Phase, RoundClock};
pub use pointer::PointerState;
pub use scoring::{Scorer, SubmitOutcome};
pub use selection::Selection;
