use dualbat_engine::*;
use pretty_assertions::assert_eq;

fn reading(id: &str, percentage: f64, charging: bool) -> BatteryReading {
    BatteryReading::new(id, percentage, charging)
}

fn dual_readings() -> Vec<BatteryReading> {
    vec![
        reading("BAT1", 88.0, false),
        reading("BAT0", 12.4, true),
    ]
}

fn is_bare_percent(label: &str) -> bool {
    label
        .strip_suffix('%')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

fn is_named_percent(label: &str) -> bool {
    label
        .rsplit_once(": ")
        .is_some_and(|(name, rest)| !name.is_empty() && is_bare_percent(rest))
}

#[test]
fn empty_readings_give_no_battery_snapshot() {
    for config in [
        DisplayConfig::new(true, true),
        DisplayConfig::new(false, true),
        DisplayConfig::new(true, false),
        DisplayConfig::new(false, false),
    ] {
        let snapshot = recompute(&[], config);
        assert!(!snapshot.has_batteries);
        assert!(snapshot.lines.is_empty());
        assert_eq!(snapshot.summary_label, "No battery");
        assert_eq!(snapshot.summary_icon, SummaryIcon::Missing);
    }
}

#[test]
fn single_battery_scenario() {
    let snapshot = recompute(&[reading("BAT0", 47.0, false)], DisplayConfig::default());

    assert_eq!(
        snapshot,
        PresentationSnapshot {
            lines: vec![BatteryLine {
                id: "BAT0".to_string(),
                percentage: 47,
                charging: false,
                tier: IconTier::new(TierLevel::Level40, false),
                band: SeverityBand::Medium,
                label: "BAT0: 47%".to_string(),
                bar_fill_fraction: 0.47,
            }],
            has_batteries: true,
            summary_icon: SummaryIcon::Tier(IconTier::new(TierLevel::Level40, false)),
            summary_label: "BAT0: 47%".to_string(),
            show_icon: true,
        }
    );
    assert_eq!(snapshot.lines[0].tier.to_string(), "40");
}

#[test]
fn malformed_reading_is_normalized() {
    let snapshot = recompute(&[reading("", 105.0, true)], DisplayConfig::default());
    let line = &snapshot.lines[0];

    assert_eq!(line.percentage, 100);
    assert_eq!(line.id, "Battery 1");
    assert_eq!(line.tier.to_string(), "full-charging");
    assert_eq!(line.bar_fill_fraction, 1.0);
    assert_eq!(snapshot.summary_label, "Battery 1: 100%");
}

#[test]
fn order_is_preserved() {
    let readings = dual_readings();
    let snapshot = recompute(&readings, DisplayConfig::default());

    let ids: Vec<&str> = snapshot.lines.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["BAT1", "BAT0"]);
    for (line, reading) in snapshot.lines.iter().zip(&readings) {
        assert_eq!(line.id, reading.id);
    }
}

#[test]
fn summary_uses_first_line_and_joins_labels() {
    let snapshot = recompute(&dual_readings(), DisplayConfig::default());

    assert_eq!(snapshot.summary_label, "BAT1: 88%/BAT0: 12%");
    assert_eq!(
        snapshot.summary_icon,
        SummaryIcon::Tier(IconTier::new(TierLevel::Level80, false))
    );
    assert!(snapshot.any_charging());
    assert_eq!(snapshot.worst_band(), Some(SeverityBand::Low));
}

#[test]
fn hidden_names_leave_bare_percentages() {
    let snapshot = recompute(&dual_readings(), DisplayConfig::new(false, true));

    assert!(snapshot.lines.iter().all(|l| is_bare_percent(&l.label)));
    assert_eq!(snapshot.summary_label, "88%/12%");
    assert_eq!(snapshot.lines[0].id, "BAT1");
}

#[test]
fn shown_names_prefix_every_label() {
    let mut readings = dual_readings();
    readings.push(reading("", 50.0, false));
    let snapshot = recompute(&readings, DisplayConfig::new(true, true));

    assert!(snapshot.lines.iter().all(|l| is_named_percent(&l.label)));
    assert_eq!(snapshot.lines[2].label, "Battery 3: 50%");
}

#[test]
fn hidden_icons_keep_tiers() {
    let shown = recompute(&dual_readings(), DisplayConfig::new(true, true));
    let hidden = recompute(&dual_readings(), DisplayConfig::new(true, false));

    assert!(!hidden.show_icon);
    assert_eq!(shown.lines, hidden.lines);
    assert_eq!(shown.summary_icon, hidden.summary_icon);
}

#[test]
fn recompute_is_idempotent() {
    let readings = dual_readings();
    let config = DisplayConfig::new(false, true);
    assert_eq!(recompute(&readings, config), recompute(&readings, config));
}

#[test]
fn tier_boundary_at_ninety() {
    let snapshot = recompute(
        &[reading("A", 89.0, false), reading("B", 90.0, false)],
        DisplayConfig::default(),
    );
    assert_eq!(snapshot.lines[0].tier.level, TierLevel::Level80);
    assert_eq!(snapshot.lines[1].tier.level, TierLevel::Full);
}

#[test]
fn band_boundaries() {
    let readings: Vec<_> = [19.0, 20.0, 49.0, 50.0]
        .into_iter()
        .map(|p| reading("BAT0", p, false))
        .collect();
    let bands: Vec<SeverityBand> = recompute(&readings, DisplayConfig::default())
        .lines
        .iter()
        .map(|l| l.band)
        .collect();

    assert_eq!(
        bands,
        vec![
            SeverityBand::Low,
            SeverityBand::Medium,
            SeverityBand::Medium,
            SeverityBand::High
        ]
    );
}

#[test]
fn every_percentage_maps_to_a_defined_tier() {
    for p in 0..=100 {
        for charging in [false, true] {
            let snapshot = recompute(&[reading("BAT0", f64::from(p), charging)], DisplayConfig::default());
            let tier = snapshot.lines[0].tier;
            assert!(IconTier::all().any(|t| t == tier));
            assert_eq!(tier.charging, charging);
            if p >= 90 {
                assert!(tier.level.is_full());
            }
        }
    }
}

#[test]
fn snapshot_serializes_tiers_as_names() {
    let snapshot = recompute(&[reading("BAT0", 95.0, true)], DisplayConfig::default());
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["summary_icon"], "full-charging");
    assert_eq!(json["lines"][0]["tier"], "full-charging");
    assert_eq!(json["lines"][0]["band"], "high");
    assert_eq!(json["has_batteries"], true);

    let empty = serde_json::to_value(recompute(&[], DisplayConfig::default())).unwrap();
    assert_eq!(empty["summary_icon"], "missing");
    assert_eq!(empty["summary_label"], "No battery");
}
