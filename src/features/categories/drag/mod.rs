mod clock;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{
    DragEnd, DragOver, DragPhase, DragSession, DropGesture, InsertionPosition, InsertionTarget,
    Rect,
};
