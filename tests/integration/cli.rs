use std::io::Write;
use std::process::Command;

const JOB: &str = r#"{
    "conf": { "specific": "foo" },
    "files": [
        {
            "path": "hdfs://nn/bar",
            "file_schema": "message doc { required binary foo; }",
            "row_groups": [
                { "start_offset": 0, "total_byte_size": 10, "row_count": 2 },
                { "start_offset": 10, "total_byte_size": 10, "row_count": 2 },
                { "start_offset": 20, "total_byte_size": 10, "row_count": 2 },
                { "start_offset": 30, "total_byte_size": 10, "row_count": 2 }
            ],
            "blocks": [
                { "offset": 0, "length": 20, "hosts": ["dn0"] },
                { "offset": 20, "length": 20, "hosts": ["dn1"] }
            ]
        }
    ]
}"#;

fn write_job() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp job file");
    file.write_all(JOB.as_bytes()).expect("write job");
    file
}

fn planner() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_split-planner"));
    cmd.env("SPLIT_PLANNER_CONFIG", "config/planner");
    cmd
}

pub fn plans_job_file() {
    let job = write_job();
    let output = planner()
        .args(["plan", "--input"])
        .arg(job.path())
        .args(["--min-split-size", "0", "--max-split-size", "100", "--summary"])
        .output()
        .expect("run split-planner");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let splits: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json splits");
    let splits = splits.as_array().expect("array of splits");
    assert_eq!(splits.len(), 2);
    assert_eq!(splits[0]["locations"], serde_json::json!(["dn0"]));
    assert_eq!(splits[1]["locations"], serde_json::json!(["dn1"]));
    assert_eq!(splits[1]["start"], 20);
    assert_eq!(splits[1]["length"], 4);
    assert_eq!(splits[0]["read_context"]["metadata"]["specific"], "foo");
    assert_eq!(
        splits[0]["read_context"]["metadata"]["mapred.max.split.size"],
        "100"
    );
}

pub fn reports_invalid_window() {
    let job = write_job();
    let output = planner()
        .args(["plan", "--input"])
        .arg(job.path())
        .args(["--min-split-size", "50", "--max-split-size", "49"])
        .output()
        .expect("run split-planner");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("maxSplitSize = 49; minSplitSize is 50"), "{}", stderr);
}
