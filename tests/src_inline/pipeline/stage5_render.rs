use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::category::sorted_categories;
use crate::model::tally::TallyEntry;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("evalqc_stage5_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn zero_tally() -> CategoryTally {
    CategoryTally {
        entries: sorted_categories()
            .into_iter()
            .map(|category| TallyEntry {
                category,
                matched: 0,
                total: 0,
                ratio: 0.0,
            })
            .collect(),
    }
}

fn empty_matrix() -> ConfusionMatrix {
    let rows = sorted_categories();
    let columns: Vec<String> = rows.iter().map(|c| c.name().to_string()).collect();
    ConfusionMatrix {
        counts: vec![vec![0; columns.len()]; rows.len()],
        rows,
        columns,
    }
}

#[test]
fn test_chart_paths_are_fixed_names() {
    let paths = chart_paths(Path::new("out"));
    assert_eq!(paths[0], PathBuf::from("out/1_strict_accuracy.png"));
    assert_eq!(paths[1], PathBuf::from("out/2_loose_accuracy.png"));
    assert_eq!(paths[2], PathBuf::from("out/3_response_distribution.png"));
}

#[test]
fn test_unwritable_output_dir_fails_before_rendering() {
    let dir = make_temp_dir();
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, "file").unwrap();

    let strict = zero_tally();
    let loose = zero_tally();
    let matrix = empty_matrix();
    let input = Stage5Input {
        strict: &strict,
        loose: &loose,
        distribution: &matrix,
    };
    let err = run_stage5(&input, &blocker, &RenderConfig::default_v1()).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}

#[test]
fn test_failed_chart_is_reported_with_its_path() {
    let dir = make_temp_dir();
    // a directory squatting on the first chart name makes the save fail
    let squatter = dir.join(STRICT_CHART_FILE);
    fs::create_dir_all(&squatter).unwrap();

    let strict = zero_tally();
    let loose = zero_tally();
    let matrix = empty_matrix();
    let input = Stage5Input {
        strict: &strict,
        loose: &loose,
        distribution: &matrix,
    };
    let err = run_stage5(&input, &dir, &RenderConfig::default_v1()).unwrap_err();
    match err {
        ReportError::Render { path, .. } => assert_eq!(path, squatter),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.join(LOOSE_CHART_FILE).exists());
    assert!(!dir.join(DISTRIBUTION_CHART_FILE).exists());
}

#[test]
fn test_renders_three_charts_and_overwrites() {
    let dir = make_temp_dir();
    let stale = dir.join(LOOSE_CHART_FILE);
    fs::write(&stale, "stale chart").unwrap();

    let strict = zero_tally();
    let loose = zero_tally();
    let matrix = empty_matrix();
    let input = Stage5Input {
        strict: &strict,
        loose: &loose,
        distribution: &matrix,
    };
    let config = RenderConfig::default_v1();

    for _ in 0..2 {
        let written = run_stage5(&input, &dir, &config).unwrap();
        assert_eq!(written, chart_paths(&dir).to_vec());
        for path in &written {
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
        }
    }
}
