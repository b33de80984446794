//! Integration tests for the end-to-end run.

use lifex_cli::pipeline::{RunConfig, run};

const RAW_TSV: &str = "\
unit\tsex\tage\tgeo\\time\t2019\t2020
YR\tF\tY_GE85\tPT\t81.2\t81.5 e
YR\tF\tY_GE85\tES\t83.0\t83.1
";

#[test]
fn run_cleans_and_saves_the_requested_region() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.tsv");
    let output = dir.path().join("clean.csv");
    std::fs::write(&input, RAW_TSV).unwrap();

    let summary = run(&RunConfig {
        input: input.clone(),
        output: output.clone(),
        region: "PT".to_string(),
    })
    .unwrap();

    assert!(summary.saved());
    assert_eq!(summary.rows_in, 2);
    assert_eq!(summary.year_columns, 2);
    assert_eq!(summary.observations, 2);

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "unit,sex,age,region,year,value\n\
         YR,F,Y_GE85,PT,2019,81.2\n\
         YR,F,Y_GE85,PT,2020,81.5\n"
    );
}

#[test]
fn run_accepts_comma_separated_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let output = dir.path().join("clean.csv");
    std::fs::write(
        &input,
        "unit,sex,age,geo\\time,2020\nYR,F,Y1,PT,80.5\nYR,F,Y1,FR,82.0\n",
    )
    .unwrap();

    let summary = run(&RunConfig {
        input,
        output: output.clone(),
        region: "FR".to_string(),
    })
    .unwrap();

    assert_eq!(summary.observations, 1);
    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("YR,F,Y1,FR,2020,82"));
}

#[test]
fn run_fails_when_the_input_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    let result = run(&RunConfig {
        input: dir.path().join("absent.tsv"),
        output: dir.path().join("clean.csv"),
        region: "PT".to_string(),
    });

    assert!(result.is_err());
}

#[test]
fn run_survives_a_save_failure_and_reports_it() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.tsv");
    std::fs::write(&input, RAW_TSV).unwrap();

    let summary = run(&RunConfig {
        input,
        output: dir.path().join("no-such-dir").join("clean.csv"),
        region: "PT".to_string(),
    })
    .unwrap();

    assert!(!summary.saved());
    assert!(summary.save_error.is_some());
}
