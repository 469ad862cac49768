use std::time::Duration;

/// Pacing of the simulation loop; gravity advances one cell per tick.
pub const TICK: Duration = Duration::from_millis(120);
