// Round countdown and its Running/Paused/Over lifecycle.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    /// Terminal until the round is restarted.
    Over,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundClock {
    pub phase: Phase,
    pub time_left: f64,
}

impl RoundClock {
    pub fn new(round_secs: f64) -> Self {
        Self {
            phase: Phase::Running,
            time_left: round_secs.max(0.0),
        }
    }

    /// Advances the countdown. Returns true on the tick that ends the round.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.time_left -= dt.max(0.0);
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            self.phase = Phase::Over;
            return true;
        }
        false
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::Over => {}
        }
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn over(&self) -> bool {
        self.phase == Phase::Over
    }
}
