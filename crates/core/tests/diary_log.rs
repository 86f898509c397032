use ecosim_core::diary::{parse_diary_log, ParseMode};

#[test]
fn parse_mixed_diary_lines() {
    let input = b"# weekly readings\n\
        2026-06-01 electricity=9.5 water=140 paper=12 waste=0.8\n\
        \n\
        electricity=11 water=155 paper=40 waste=1.2\n";
    let mut r = std::io::Cursor::new(&input[..]);
    let entries = parse_diary_log(&mut r, ParseMode::Strict).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date.as_deref(), Some("2026-06-01"));
    assert_eq!(entries[0].consumption.electricity, 9.5);
    assert_eq!(entries[1].date, None);
    assert_eq!(entries[1].consumption.waste, 1.2);
}

#[test]
fn strict_flags_unrecognized_lines() {
    let input = b"today was fine\n";
    let mut r = std::io::Cursor::new(&input[..]);
    let err = parse_diary_log(&mut r, ParseMode::Strict).unwrap_err();
    assert!(format!("{err:#}").contains("unrecognized diary line"));
}
