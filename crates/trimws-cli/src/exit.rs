// crates/trimws-cli/src/exit.rs
//
// Exit status = number of blanks trimmed, capped so it never reaches the
// failure status.

/// -1, seen as 255 by Unix shells.
pub const FAILURE: i32 = -1;

#[cfg(windows)]
pub const SUCCESS_MAX: i32 = i32::MAX;
#[cfg(not(windows))]
pub const SUCCESS_MAX: i32 = 254;

pub fn status_for(trimmed: u64) -> i32 {
    i32::try_from(trimmed).map_or(SUCCESS_MAX, |n| n.min(SUCCESS_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pass_through_below_cap() {
        assert_eq!(status_for(0), 0);
        assert_eq!(status_for(17), 17);
    }

    #[test]
    fn large_counts_are_capped() {
        assert_eq!(status_for(u64::MAX), SUCCESS_MAX);
        assert_eq!(status_for(SUCCESS_MAX as u64 + 1), SUCCESS_MAX);
    }

    #[cfg(not(windows))]
    #[test]
    fn cap_stays_clear_of_failure_on_unix() {
        assert_ne!(SUCCESS_MAX, FAILURE & 0xff);
    }
}
