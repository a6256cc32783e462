//! Color legend generator for colorize runs.
//!
//! Generates a markdown section documenting the colors a run assigned:
//! a reference table mapping numbers to hex colors and the tracks wearing
//! them, plus a listing of the keyword rules that actually matched.

use crate::engine::ColorOrigin;
use crate::services::ColorReport;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Generates a markdown color legend for a finished report.
///
/// # Examples
///
/// ```no_run
/// use trackbow::export::generate_color_legend;
/// # use trackbow::config::Config;
/// # use trackbow::models::TrackList;
/// # use trackbow::services::{ColorizeOptions, ColorizeService};
///
/// # let config = Config::default();
/// # let options = ColorizeOptions::from_config(&config);
/// let report = ColorizeService::run(&TrackList::default(), &config, &options);
/// println!("{}", generate_color_legend(&report));
/// ```
#[must_use]
pub fn generate_color_legend(report: &ColorReport) -> String {
    let mut output = String::new();

    output.push_str("## Color Legend\n\n");

    let color_tracks = collect_color_tracks(report);

    if !color_tracks.is_empty() {
        output.push_str("### Color Reference\n\n");

        for (index, (hex, tracks)) in color_tracks.iter().enumerate() {
            // Format: [N] #RRGGBB - track, track, ...
            let _ = write!(output, "[{}] {} - ", index + 1, hex);
            output.push_str(&tracks.join(", "));
            output.push('\n');
        }

        output.push('\n');
    }

    let rule_hits = collect_rule_hits(report);

    if !rule_hits.is_empty() {
        output.push_str("### Matched Rules\n\n");

        for (keyword, (hex, count)) in &rule_hits {
            let noun = if *count == 1 { "track" } else { "tracks" };
            let _ = writeln!(output, "- **{keyword}** ({hex}) - {count} {noun}");
        }

        output.push('\n');
    }

    output
}

/// Collects unique colors and the tracks wearing them, ordered by hex
/// value for stable output.
fn collect_color_tracks(report: &ColorReport) -> BTreeMap<String, Vec<String>> {
    let mut colors: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for entry in &report.entries {
        colors
            .entry(entry.color.clone())
            .or_default()
            .push(entry.name.clone());
    }

    colors
}

/// Collects the keyword rules that matched, with their color and track
/// count.
fn collect_rule_hits(report: &ColorReport) -> BTreeMap<String, (String, usize)> {
    let mut hits: BTreeMap<String, (String, usize)> = BTreeMap::new();

    for entry in &report.entries {
        if let ColorOrigin::Rule { keyword } = &entry.origin {
            let hit = hits
                .entry(keyword.clone())
                .or_insert_with(|| (entry.color.clone(), 0));
            hit.1 += 1;
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ColorRule, RgbColor, Track, TrackList};
    use crate::services::{ColorizeOptions, ColorizeService};

    fn report_with_rule() -> ColorReport {
        let tracks = TrackList::new(vec![
            Track::new("Drums", 0),
            Track::new("Kick", 1),
            Track::new("Click", 0),
        ]);
        let mut config = Config::default();
        config
            .rules
            .push(ColorRule::new("click", RgbColor::new(90, 90, 90)).unwrap());
        let options = ColorizeOptions::from_config(&config);
        ColorizeService::run(&tracks, &config, &options)
    }

    #[test]
    fn test_legend_lists_colors_with_tracks() {
        let legend = generate_color_legend(&report_with_rule());

        assert!(legend.contains("## Color Legend"));
        assert!(legend.contains("### Color Reference"));
        assert!(legend.contains("Drums"));
        assert!(legend.contains("#5A5A5A - Click"));
    }

    #[test]
    fn test_legend_lists_matched_rules() {
        let legend = generate_color_legend(&report_with_rule());

        assert!(legend.contains("### Matched Rules"));
        assert!(legend.contains("- **click** (#5A5A5A) - 1 track"));
    }

    #[test]
    fn test_legend_empty_report() {
        let config = Config::default();
        let options = ColorizeOptions::from_config(&config);
        let report = ColorizeService::run(&TrackList::default(), &config, &options);

        let legend = generate_color_legend(&report);
        assert!(legend.contains("## Color Legend"));
        assert!(!legend.contains("### Color Reference"));
        assert!(!legend.contains("### Matched Rules"));
    }
}
