use super::*;

#[test]
fn format_report_date_strips_time() {
    assert_eq!(format_report_date("2025-02-20T00:00:00"), "2025-02-20");
    assert_eq!(format_report_date("2025-02-20 13:45:00"), "2025-02-20");
}

#[test]
fn format_report_date_keeps_plain_dates() {
    assert_eq!(format_report_date("2025-02-15"), "2025-02-15");
}

#[test]
fn format_report_date_passes_through_unknown_formats() {
    assert_eq!(format_report_date("yesterday"), "yesterday");
    assert_eq!(format_report_date(""), "");
}
