use std::fmt::Write;

use npt_core::pipeline::batch_npt_use_case::HalfResult;
use npt_core::report::domain::duration_distribution::DurationDistribution;
use npt_core::stoppage::domain::stoppage_interval::StoppageFamily;

/// Plain-text report in minutes, one block per half.
pub fn format_text(results: &[HalfResult]) -> String {
    let mut out = String::new();
    for result in results {
        let r = &result.report;
        let _ = writeln!(out, "===== EVENT-BASED NET PLAYING TIME =====");
        let _ = writeln!(out, "{}", result.key);
        let _ = writeln!(out);
        let _ = writeln!(out, "Half duration (min): {:.2}", minutes(r.half_duration));
        let _ = writeln!(out);
        for family in StoppageFamily::ALL {
            let _ = writeln!(
                out,
                "{family} stoppage (min): {:.2}",
                minutes(r.total_for(*family))
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total stoppage (min): {:.2}", minutes(r.total_stoppage));
        let _ = writeln!(out, "Net playing time (min): {:.2}", minutes(r.net_playing_time));
        for family in StoppageFamily::ALL {
            let _ = writeln!(out);
            let _ = writeln!(out, "{family} distribution (s):");
            out.push_str(&format_distribution(r.distribution_for(*family)));
        }
        let _ = writeln!(out);
    }
    out
}

pub fn format_json(results: &[HalfResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

fn format_distribution(d: &DurationDistribution) -> String {
    let rows = [
        ("mean", d.mean),
        ("std", d.std),
        ("min", d.min),
        ("25%", d.q25),
        ("50%", d.median),
        ("75%", d.q75),
        ("max", d.max),
    ];
    let mut out = format!("  {:<6}{:>10}\n", "count", d.count);
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<6}{value:>10.2}");
    }
    out
}

fn minutes(seconds: f64) -> f64 {
    seconds / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use npt_core::report::domain::half_report::HalfReport;
    use npt_core::shared::event::Half;
    use npt_core::shared::half_events::HalfKey;

    fn result() -> HalfResult {
        HalfResult {
            key: HalfKey {
                match_id: "DFL-MAT-J03WOH".to_string(),
                half: Half::FirstHalf,
                team: "Home".to_string(),
            },
            report: HalfReport {
                half_duration: 2760.0,
                total_restart: 600.0,
                total_goal: 60.0,
                total_var: 0.0,
                total_stoppage: 660.0,
                net_playing_time: 2100.0,
                restart_distribution: DurationDistribution::from_durations(&[200.0, 400.0]),
                goal_distribution: DurationDistribution::from_durations(&[60.0]),
                var_distribution: DurationDistribution::empty(),
            },
        }
    }

    #[test]
    fn test_text_report_in_minutes() {
        let text = format_text(&[result()]);
        assert!(text.contains("DFL-MAT-J03WOH / firstHalf / Home"));
        assert!(text.contains("Half duration (min): 46.00"));
        assert!(text.contains("Restart stoppage (min): 10.00"));
        assert!(text.contains("Goal stoppage (min): 1.00"));
        assert!(text.contains("VAR stoppage (min): 0.00"));
        assert!(text.contains("Total stoppage (min): 11.00"));
        assert!(text.contains("Net playing time (min): 35.00"));
    }

    #[test]
    fn test_text_report_distributions() {
        let text = format_text(&[result()]);
        assert!(text.contains("Restart distribution (s):"));
        assert!(text.contains("  count          2"));
        assert!(text.contains("  mean      300.00"));
        assert!(text.contains("VAR distribution (s):\n  count          0\n  mean         NaN"));
    }

    #[test]
    fn test_json_report() {
        let json = format_json(&[result()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["key"]["matchId"], "DFL-MAT-J03WOH");
        assert_eq!(value[0]["key"]["half"], "firstHalf");
        assert_eq!(value[0]["report"]["netPlayingTime"], 2100.0);
        assert_eq!(value[0]["report"]["varDistribution"]["count"], 0);
        assert!(value[0]["report"]["varDistribution"]["mean"].is_null());
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(format_text(&[]), "");
        assert_eq!(format_json(&[]).unwrap(), "[]");
    }
}
