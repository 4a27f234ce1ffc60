use dirsize::report::Report;
use dirsize::scanner::Scanner;
use dirsize::types::{Divisor, EntryKind, ReportOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Helper function to create a small tree with a known layout:
//
//   base/
//     big.bin           2048 bytes
//     sub/small.bin     1024 bytes
//     link -> sub       (unix only)
fn create_test_structure(base: &Path) {
    fs::write(base.join("big.bin"), vec![0u8; 2048]).unwrap();
    let sub = base.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("small.bin"), vec![0u8; 1024]).unwrap();

    #[cfg(unix)]
    std::os::unix::fs::symlink(&sub, base.join("link")).unwrap();
}

// Five top-level directories of 500, 250, 150, 60 and 40 bytes
fn create_ranked_structure(base: &Path) {
    for (name, size) in [("a", 500), ("b", 250), ("c", 150), ("d", 60), ("e", 40)] {
        let dir = base.join(name);
        fs::create_dir_all(dir.join("inner")).unwrap();
        fs::write(dir.join("inner/data.bin"), vec![1u8; size]).unwrap();
    }
}

#[test]
fn test_integration_scenario() {
    let temp_dir = TempDir::new().unwrap();
    create_test_structure(temp_dir.path());

    let summaries = Scanner::new(16).scan(temp_dir.path()).unwrap();

    assert_eq!(summaries[0].name(), "big.bin");
    assert_eq!(summaries[0].bytes(), 2048);
    assert_eq!(summaries[0].kind, EntryKind::File);
    assert_eq!(summaries[1].name(), "sub");
    assert_eq!(summaries[1].bytes(), 1024);
    assert_eq!(summaries[1].kind, EntryKind::Dir);

    let total: u64 = summaries.iter().map(|s| s.bytes()).sum();
    assert_eq!(total, 3072);

    #[cfg(unix)]
    {
        // The symlink stays in the listing as a zero-byte `@` row on purpose
        assert_eq!(summaries.len(), 3);
        let link = &summaries[2];
        assert_eq!(link.kind, EntryKind::Symlink);
        assert_eq!(link.bytes(), 0);
        assert_eq!(link.totals.skipped, 1);
    }
}

#[test]
fn test_integration_report_output() {
    let temp_dir = TempDir::new().unwrap();
    create_test_structure(temp_dir.path());

    let summaries = Scanner::new(16).scan(temp_dir.path()).unwrap();
    let options = ReportOptions {
        top_n: Some(2),
        ..ReportOptions::default()
    };
    let report = Report::build(&summaries, &options);

    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("2.0k\t 67%\t2.0k\t 67%\tbig.bin"));
    assert!(lines[1].starts_with("1.0k\t 33%\t3.0k\t100%\tsub/"));
    assert_eq!(lines.len(), 2 + usize::from(cfg!(unix)));
}

#[test]
fn test_integration_top_n_cutoff() {
    let temp_dir = TempDir::new().unwrap();
    create_ranked_structure(temp_dir.path());

    let summaries = Scanner::new(16).scan(temp_dir.path()).unwrap();
    assert!(summaries.windows(2).all(|w| w[0].bytes() > w[1].bytes()));

    let options = ReportOptions {
        divisor: Divisor::Bytes,
        top_n: Some(2),
        ..ReportOptions::default()
    };
    let report = Report::build(&summaries, &options);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].name, "a");
    assert_eq!(report.rows[1].name, "b");

    let omitted = report.omitted.unwrap();
    assert_eq!(omitted.count, 3);
    assert_eq!(omitted.bytes, 250);
    assert_eq!(omitted.percent, 25.0);
}

#[test]
fn test_integration_depth_bound() {
    let temp_dir = TempDir::new().unwrap();
    let top = temp_dir.path().join("top");

    // top/ is visited at depth 0, top/l1/ at depth 1, top/l1/l2/ at depth 2
    fs::create_dir_all(top.join("l1/l2")).unwrap();
    fs::write(top.join("l1/at-one.bin"), vec![0u8; 10]).unwrap();
    fs::write(top.join("l1/l2/at-two.bin"), vec![0u8; 100]).unwrap();

    let summaries = Scanner::new(1).scan(temp_dir.path()).unwrap();
    assert_eq!(summaries[0].bytes(), 10);
    assert_eq!(summaries[0].totals.files, 1);
    assert_eq!(summaries[0].totals.skipped, 0);

    let summaries = Scanner::new(2).scan(temp_dir.path()).unwrap();
    assert_eq!(summaries[0].bytes(), 110);
    assert_eq!(summaries[0].totals.files, 2);
}

#[test]
fn test_integration_repeat_scan_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    create_ranked_structure(temp_dir.path());

    let scanner = Scanner::new(16);
    let first = scanner.scan(temp_dir.path()).unwrap();
    let second = scanner.scan(temp_dir.path()).unwrap();
    assert_eq!(first, second);
}
