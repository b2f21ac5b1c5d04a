/// SGP4 propagation against real element sets
/// Checks ranges and pass ordering rather than reference values
#[cfg(test)]
mod sgp4_propagator_tests {
    use std::f64::consts::{FRAC_PI_2, TAU};
    use std::io::Cursor;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use galileo_tracker::ephemeris::{GroundStation, TleEphemeris};
    use galileo_tracker::{
        ObserverContext, Propagator, ReportFormat, RunOptions, Sgp4Propagator, TleRecord, Tracker,
        TrackerError,
    };
    use rstest::rstest;

    const GALILEO_FEED: &str = "\
GSAT0101 (PRN E11)
1 37846U 11060A   16174.50000000 -.00000066  00000-0  00000+0 0  9992
2 37846  55.1290 106.9440 0003170 316.2710  43.7240  1.70475347 28780
GSAT0102 (PRN E12)
1 37847U 11060B   16174.50000000 -.00000066  00000-0  00000+0 0  9993
2 37847  55.1280 106.9390 0003260 304.3010 236.1500  1.70475418 28770
";

    fn gsat0101() -> TleRecord {
        TleRecord::new(
            "GSAT0101 (PRN E11)",
            "1 37846U 11060A   16174.50000000 -.00000066  00000-0  00000+0 0  9992",
            "2 37846  55.1290 106.9440 0003170 316.2710  43.7240  1.70475347 28780",
        )
    }

    fn gsat0102() -> TleRecord {
        TleRecord::new(
            "GSAT0102 (PRN E12)",
            "1 37847U 11060B   16174.50000000 -.00000066  00000-0  00000+0 0  9993",
            "2 37847  55.1280 106.9390 0003260 304.3010 236.1500  1.70475418 28770",
        )
    }

    fn iss() -> TleRecord {
        TleRecord::new(
            "ISS (ZARYA)",
            "1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992",
            "2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008",
        )
    }

    fn traun(at: DateTime<Utc>) -> ObserverContext {
        ObserverContext::new(14.221162, 48.223560, 273, at).unwrap()
    }

    fn galileo_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 6, 23, 10, 0, 0).unwrap()
    }

    fn altitude_at(record: &TleRecord, observer: &ObserverContext, at: DateTime<Utc>) -> f64 {
        let ephemeris = TleEphemeris::from_record(record).unwrap();
        ephemeris
            .look_angles(&GroundStation::from(observer), &at)
            .unwrap()
            .altitude
    }

    #[rstest]
    #[case::gsat0101(gsat0101(), galileo_time())]
    #[case::gsat0102(gsat0102(), galileo_time())]
    #[case::iss(iss(), Utc.with_ymd_and_hms(2020, 7, 13, 0, 0, 0).unwrap())]
    fn results_are_in_range_and_ordered(#[case] record: TleRecord, #[case] at: DateTime<Utc>) {
        let observer = traun(at);
        let p = Sgp4Propagator::default().evaluate(&record, &observer).unwrap();

        assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&p.altitude_rad));
        assert!((0.0..TAU).contains(&p.azimuth_rad));
        assert!(at < p.next_rise, "rise {} not after {}", p.next_rise, at);
        assert!(at < p.next_set, "set {} not after {}", p.next_set, at);

        // Whichever pass the set closes, the satellite is up halfway through it
        let pass_start = if p.altitude_rad > 0.0 {
            assert!(p.next_set < p.next_rise);
            at
        } else {
            assert!(p.next_rise < p.next_set);
            p.next_rise
        };
        let midpoint = pass_start + (p.next_set - pass_start) / 2;
        assert!(altitude_at(&record, &observer, midpoint) > 0.0);
        assert!(altitude_at(&record, &observer, p.next_set + Duration::seconds(60)) < 0.0);
    }

    #[test]
    fn visible_satellite_sets_before_it_rises_again() {
        let at = Utc.with_ymd_and_hms(2016, 6, 23, 16, 30, 0).unwrap();
        let observer = traun(at);
        let p = Sgp4Propagator::default().evaluate(&gsat0101(), &observer).unwrap();

        assert!(p.altitude_rad > 0.2);
        assert!(at < p.next_set && p.next_set < p.next_rise);

        // First descending crossing: up all the way from `at` to the set, down just after
        let mut t = at;
        while t < p.next_set - Duration::seconds(60) {
            assert!(altitude_at(&gsat0101(), &observer, t) > 0.0, "down at {t}");
            t += Duration::minutes(5);
        }
        assert!(altitude_at(&gsat0101(), &observer, p.next_set - Duration::seconds(60)) > 0.0);
        assert!(altitude_at(&gsat0101(), &observer, p.next_set + Duration::seconds(60)) < 0.0);

        let expected = Utc.with_ymd_and_hms(2016, 6, 24, 0, 35, 0).unwrap();
        assert!((p.next_set - expected).abs() < Duration::minutes(5), "set at {}", p.next_set);
    }

    #[test]
    fn rise_and_set_are_whole_seconds() {
        let p = Sgp4Propagator::default()
            .evaluate(&gsat0101(), &traun(galileo_time()))
            .unwrap();
        assert_eq!(p.next_rise.timestamp_subsec_nanos(), 0);
        assert_eq!(p.next_set.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn low_earth_orbit_pass_is_short() {
        let at = Utc.with_ymd_and_hms(2020, 7, 13, 0, 0, 0).unwrap();
        let p = Sgp4Propagator::default().evaluate(&iss(), &traun(at)).unwrap();

        let pass_start = if p.altitude_rad > 0.0 { at } else { p.next_rise };
        assert!(p.next_set - pass_start < Duration::minutes(20));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let observer = traun(galileo_time());
        let propagator = Sgp4Propagator::default();

        let first = propagator.evaluate(&gsat0102(), &observer).unwrap();
        let second = propagator.evaluate(&gsat0102(), &observer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupted_elements_are_malformed_records() {
        let mut record = gsat0101();
        record.line2 = "2 37846  55.1290 106.9440 0003170 316.2710".to_string();

        assert!(matches!(
            Sgp4Propagator::default().evaluate(&record, &traun(galileo_time())),
            Err(TrackerError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn apparent_verbose_run_reports_end_of_current_pass() {
        let tracker = Tracker::new(
            traun(Utc.with_ymd_and_hms(2016, 6, 23, 16, 30, 0).unwrap()),
            Sgp4Propagator::default(),
            RunOptions {
                apparent_only: true,
                verbose: true,
                format: ReportFormat::Text,
            },
        );
        let mut out = Vec::new();
        tracker.run(Cursor::new(GALILEO_FEED), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        let at = lines
            .iter()
            .position(|l| l.starts_with("GSAT0101 (PRN E11), altitude "))
            .unwrap();
        assert!(lines[at + 2].starts_with(" Set time: 2016-06-24T00:"), "{}", lines[at + 2]);
    }

    #[test]
    fn real_feed_runs_end_to_end() {
        let tracker = Tracker::new(
            traun(galileo_time()),
            Sgp4Propagator::default(),
            RunOptions {
                apparent_only: false,
                verbose: true,
                format: ReportFormat::Text,
            },
        );
        let mut out = Vec::new();
        let summary = tracker.run(Cursor::new(GALILEO_FEED), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.records, 2);
        assert_eq!(summary.reported, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("GSAT0101 (PRN E11), altitude "));
        assert!(lines[1].starts_with("Rise time: 2016-"));
        assert!(lines[2].starts_with(" Set time: 2016-"));
        assert!(lines[3].starts_with("GSAT0102 (PRN E12), altitude "));
    }
}
