use crate::types::LoginError;

/// Failed attempts tolerated before the form locks.
pub const MAX_ATTEMPTS: u32 = 3;
/// Length of the lockout window, and the countdown baseline.
pub const LOCKOUT_SECS: u32 = 30;

/// Client-side lockout for the login form.
///
/// The machine performs no I/O and never reads a clock. The page drives
/// `tick` from a 1-second interval that exists only while `blocked` with
/// time remaining, and calls `expire` once the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutState {
    pub failed_count: u32,
    pub blocked: bool,
    pub remaining_secs: u32,
}

impl Default for LockoutState {
    fn default() -> Self {
        Self {
            failed_count: 0,
            blocked: false,
            remaining_secs: LOCKOUT_SECS,
        }
    }
}

impl LockoutState {
    /// While locked, submission is rejected outright and does not count
    /// as an attempt.
    pub fn is_locked(&self) -> bool {
        self.blocked
    }

    /// Count one failed attempt and return the message to surface.
    ///
    /// The attempts-left figure is computed from the count as it stood
    /// before this failure, so it reads one higher than the number of
    /// tries actually left before lockout. Known quirk, kept as is.
    pub fn record_failure(&mut self) -> LoginError {
        let before = self.failed_count;
        self.failed_count += 1;
        if self.failed_count >= MAX_ATTEMPTS {
            self.blocked = true;
            self.remaining_secs = LOCKOUT_SECS;
            LoginError::Blocked
        } else {
            LoginError::AttemptFailed(MAX_ATTEMPTS - 1 - before)
        }
    }

    /// One elapsed second while locked. Floors at zero.
    pub fn tick(&mut self) {
        if self.blocked {
            self.remaining_secs = self.remaining_secs.saturating_sub(1);
        }
    }

    /// Countdown finished: release the lock and restore the baseline.
    pub fn expire(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail_times(state: &mut LockoutState, n: u32) -> Vec<LoginError> {
        (0..n).map(|_| state.record_failure()).collect()
    }

    #[test]
    fn starts_unlocked_at_baseline() {
        let state = LockoutState::default();
        assert!(!state.is_locked());
        assert_eq!(state.failed_count, 0);
        assert_eq!(state.remaining_secs, LOCKOUT_SECS);
    }

    #[test]
    fn two_failures_stay_unlocked() {
        let mut state = LockoutState::default();
        let messages = fail_times(&mut state, 2);
        assert!(!state.is_locked());
        assert_eq!(state.failed_count, 2);
        // Pre-increment arithmetic: one higher than literal tries left.
        assert_eq!(
            messages,
            vec![LoginError::AttemptFailed(2), LoginError::AttemptFailed(1)]
        );
    }

    #[test]
    fn third_failure_locks_with_full_countdown() {
        let mut state = LockoutState::default();
        let messages = fail_times(&mut state, 3);
        assert!(state.is_locked());
        assert_eq!(state.failed_count, 3);
        assert_eq!(state.remaining_secs, LOCKOUT_SECS);
        assert_eq!(messages.last(), Some(&LoginError::Blocked));
    }

    #[test]
    fn failed_count_never_exceeds_three_before_lock() {
        let mut state = LockoutState::default();
        while !state.is_locked() {
            state.record_failure();
            assert!(state.failed_count <= MAX_ATTEMPTS);
        }
        assert_eq!(state.failed_count, MAX_ATTEMPTS);
    }

    #[test]
    fn tick_decrements_by_one_while_locked() {
        let mut state = LockoutState::default();
        fail_times(&mut state, 3);
        for expected in (0..LOCKOUT_SECS).rev() {
            state.tick();
            assert_eq!(state.remaining_secs, expected);
        }
    }

    #[test]
    fn tick_floors_at_zero() {
        let mut state = LockoutState::default();
        fail_times(&mut state, 3);
        for _ in 0..LOCKOUT_SECS + 5 {
            state.tick();
        }
        assert_eq!(state.remaining_secs, 0);
        assert!(state.is_locked());
    }

    #[test]
    fn tick_is_inert_while_unlocked() {
        let mut state = LockoutState::default();
        state.tick();
        assert_eq!(state.remaining_secs, LOCKOUT_SECS);
    }

    #[test]
    fn expire_resets_to_baseline() {
        let mut state = LockoutState::default();
        fail_times(&mut state, 3);
        for _ in 0..LOCKOUT_SECS {
            state.tick();
        }
        state.expire();
        assert_eq!(state, LockoutState::default());
    }

    #[test]
    fn attempts_restart_after_expiry() {
        let mut state = LockoutState::default();
        fail_times(&mut state, 3);
        state.expire();
        assert_eq!(state.record_failure(), LoginError::AttemptFailed(2));
    }
}
