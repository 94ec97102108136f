// Pointer press state shared by the canvas listeners.
#[derive(Default, Debug, Clone)]
pub struct PointerState {
    /// Primary button held; tiles are only picked while this is set.
    pub held: bool,
}

impl PointerState {
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Whether a move at this moment counts as a drag pick.
    pub fn dragging(&self) -> bool {
        self.held
    }

    pub fn release(&mut self) {
        self.held = false;
    }
}
