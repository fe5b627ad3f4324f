// crates/trimws-cli/src/report.rs
//
// End-of-run summary lines for stderr.

use trimws_core::Counters;

pub fn summary(counters: &Counters, trim: bool, clean: bool) -> Vec<String> {
    let verb = if trim { "Deleted" } else { "Copied" };
    let mut lines = Vec::with_capacity(2);

    lines.push(match counters.trimmed {
        0 => "No trailing spaces or tabs found.".to_string(),
        1 => format!("{verb} one trailing space or tab."),
        n => format!("{verb} {n} trailing spaces or tabs."),
    });

    if counters.control > 0 {
        let verb = if clean { "Deleted" } else { "Copied" };
        lines.push(format!(
            "{verb} {} control codes that should not appear in plain text files.",
            counters.control
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(trimmed: u64, control: u64) -> Counters {
        Counters { trimmed, control }
    }

    #[test]
    fn nothing_found() {
        assert_eq!(summary(&counters(0, 0), true, false), vec!["No trailing spaces or tabs found."]);
    }

    #[test]
    fn singular_and_plural() {
        assert_eq!(summary(&counters(1, 0), true, false), vec!["Deleted one trailing space or tab."]);
        assert_eq!(summary(&counters(9, 0), false, false), vec!["Copied 9 trailing spaces or tabs."]);
    }

    #[test]
    fn control_codes_follow_clean_flag() {
        let lines = summary(&counters(2, 3), true, true);
        assert_eq!(lines[1], "Deleted 3 control codes that should not appear in plain text files.");
        let lines = summary(&counters(2, 3), true, false);
        assert_eq!(lines[1], "Copied 3 control codes that should not appear in plain text files.");
    }
}
