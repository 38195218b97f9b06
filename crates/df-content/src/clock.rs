use df_core::WAR_START_EPOCH;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Wall-clock seconds elapsed since the fixed war start instant,
/// saturating at zero for clocks set before the start.
pub fn seconds_since_start() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs()
        .saturating_sub(WAR_START_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_runs_forward_from_start() {
        let earlier = seconds_since_start();
        let later = seconds_since_start();
        assert!(earlier > 0);
        assert!(later >= earlier);
    }
}
