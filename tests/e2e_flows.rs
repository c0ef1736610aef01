use assert_cmd::Command;
use serde_json::Value;

fn run_json(args: &[&str]) -> Value {
    let mut cmd = Command::cargo_bin("opsadvisor").unwrap();
    let out = cmd
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

fn recommend_json(size: &str, team: &str, structure: &str, complexity: &str) -> Value {
    run_json(&[
        "recommend",
        "--company-size",
        size,
        "--team-size",
        team,
        "--ops-structure",
        structure,
        "--complexity",
        complexity,
    ])
}

#[test]
fn recommend_reports_model_and_benchmark() {
    let v = recommend_json("scale", "25-49", "design-led", "product-suite");
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["model"], "design-centered");
    assert_eq!(v["data"]["name"], "Design-Centered Operations");
    assert_eq!(v["data"]["benchmark"]["percentage_of_survey"], 28.5);
    assert_eq!(v["data"]["answers"]["design_team_size"], "25-49");
}

#[test]
fn enterprise_priority_order_over_json() {
    let v = recommend_json("enterprise", "200+", "centralized", "complex-ecosystem");
    assert_eq!(v["data"]["model"], "centralized-operations");

    let v = recommend_json("enterprise", "100-199", "centralized", "complex-ecosystem");
    assert_eq!(v["data"]["model"], "distributed-enterprise");

    let v = recommend_json("enterprise", "100-199", "centralized", "single-product");
    assert_eq!(v["data"]["model"], "distributed-with-central");

    let v = recommend_json("enterprise", "10-24", "none", "single-product");
    assert_eq!(v["data"]["model"], "distributed");
}

#[test]
fn chart_edges_reference_existing_nodes() {
    let v = run_json(&["chart", "distributed-with-central"]);
    let nodes: Vec<&str> = v["data"]["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    let edges = v["data"]["edges"].as_array().unwrap();
    assert!(!edges.is_empty());
    for e in edges {
        assert!(nodes.contains(&e["from"].as_str().unwrap()));
        assert!(nodes.contains(&e["to"].as_str().unwrap()));
    }
}

#[test]
fn show_record_carries_full_pros_and_cons() {
    let v = run_json(&["show", "centralized-operations"]);
    assert_eq!(v["data"]["id"], "centralized-operations");
    assert_eq!(v["data"]["pros"].as_array().unwrap().len(), 7);
    assert_eq!(v["data"]["cons"].as_array().unwrap().len(), 7);
}

#[test]
fn benchmark_json_per_bracket() {
    let v = run_json(&["benchmark", "enterprise"]);
    assert_eq!(v["data"]["company_size"], "enterprise");
    assert_eq!(v["data"]["percentage_of_survey"], 45.6);
}

#[test]
fn validate_reports_counts() {
    let v = run_json(&["validate"]);
    assert_eq!(v["data"]["models"], 8);
    assert_eq!(v["data"]["charts"], 8);
    assert_eq!(v["data"]["status"], "valid");
}

#[test]
fn interactive_session_over_piped_stdin() {
    Command::cargo_bin("opsadvisor")
        .unwrap()
        .arg("interactive")
        .write_stdin("growth\n25-49\ndesign-led\nproduct-suite\ndetail\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "recommended model: Design-Centered Operations",
        ))
        .stdout(predicates::str::contains("org chart:"));
}

#[test]
fn every_json_command_uses_the_same_envelope() {
    let outputs = [
        recommend_json("startup", "5-9", "none", "single-product"),
        run_json(&["models"]),
        run_json(&["show", "unified"]),
        run_json(&["chart", "hybrid"]),
        run_json(&["benchmark", "growth"]),
        run_json(&["validate"]),
    ];
    for v in &outputs {
        let obj = v.as_object().expect("top-level object");
        assert_eq!(obj.len(), 2);
        assert_eq!(v["ok"], true);
        assert!(!v["data"].is_null());
    }
}
