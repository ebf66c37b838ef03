use award_intervals::adapters::parse_catalogue;
use award_intervals::domain::ports::AwardRepository;
use award_intervals::{compute_producer_intervals, AwardCatalogue, EtlError, WinRecord};

fn wins(entries: &[(&str, i32)]) -> Vec<WinRecord> {
    entries
        .iter()
        .map(|(producer, year)| WinRecord::new(*producer, *year))
        .collect()
}

/// 兩位製作人：最短與最長間隔各有兩筆並列
#[test]
fn test_two_minimum_and_two_maximum_results() {
    let input = wins(&[
        ("Matthew Vaughn", 1980),
        ("Joel Silver", 1990),
        ("Joel Silver", 1991),
        ("Matthew Vaughn", 2002),
        ("Matthew Vaughn", 2003),
        ("Matthew Vaughn", 2015),
        ("Matthew Vaughn", 2037),
    ]);

    let report = compute_producer_intervals(&input).unwrap();

    assert_eq!(report.minimal.len(), 2);
    assert!(report.minimal.iter().all(|i| i.gap_years() == 1));
    assert!(report
        .minimal
        .iter()
        .any(|i| i.producer() == "Joel Silver" && i.earlier_win() == 1990 && i.later_win() == 1991));
    assert!(report
        .minimal
        .iter()
        .any(|i| i.producer() == "Matthew Vaughn" && i.earlier_win() == 2002 && i.later_win() == 2003));

    assert_eq!(report.maximal.len(), 2);
    assert!(report.maximal.iter().all(|i| i.gap_years() == 22));
    assert!(report
        .maximal
        .iter()
        .any(|i| i.earlier_win() == 1980 && i.later_win() == 2002));
    assert!(report
        .maximal
        .iter()
        .any(|i| i.earlier_win() == 2015 && i.later_win() == 2037));
}

#[test]
fn test_report_json_matches_wire_contract() {
    let input = wins(&[
        ("Joel Silver", 1990),
        ("Joel Silver", 1991),
        ("Matthew Vaughn", 2002),
        ("Matthew Vaughn", 2015),
    ]);

    let report = compute_producer_intervals(&input).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "min": [{"producer": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991}],
            "max": [{"producer": "Matthew Vaughn", "interval": 13, "previousWin": 2002, "followingWin": 2015}]
        })
    );
}

#[test]
fn test_empty_input_yields_empty_arrays() {
    let report = compute_producer_intervals(&[]).unwrap();
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({"min": [], "max": []})
    );
}

#[test]
fn test_untrimmed_producer_name_is_a_data_error() {
    let err = compute_producer_intervals(&wins(&[("Joel Silver ", 1990)])).unwrap_err();
    assert!(matches!(err, EtlError::InvalidWinRecord { index: 0, .. }));
    assert_eq!(err.http_status(), 400);
}

#[test]
fn test_catalogue_to_intervals() {
    let data = "year;title;studios;producers;winner
1990;The Adventures of Ford Fairlane;20th Century Fox;Steven Perry and Joel Silver;yes
1991;Hudson Hawk;TriStar Pictures;Joel Silver;yes
1992;Shining Through;20th Century Fox;Carol Baum and Howard Rosenman;
1994;Color of Night;Hollywood Pictures;Buzz Feitshans and David Matalon;yes
1995;Showgirls;MGM, United Artists;Charles Evans and Alan Marshall;yes
";
    let movies = parse_catalogue(data.as_bytes(), b';').unwrap();
    let catalogue = AwardCatalogue::from_movies(movies);

    let report = compute_producer_intervals(&catalogue.winning_producers()).unwrap();

    assert_eq!(report.minimal, report.maximal);
    assert_eq!(report.minimal.len(), 1);
    assert_eq!(report.minimal[0].producer(), "Joel Silver");
}
