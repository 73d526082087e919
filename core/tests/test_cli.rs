use trainlog_core::cli::{print_package, run_demo};

#[test]
fn print_package_ok_for_valid_input() {
    assert!(print_package("RUN", &[15000.0, 1.0, 75.0]).is_ok());
}

#[test]
fn print_package_carries_context_on_failure() {
    let err = print_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("XYZ"), "manglet kontekst: {msg}");
    assert!(msg.contains("ukjent treningskode"), "manglet årsak: {msg}");
}

#[test]
fn run_demo_does_not_panic() {
    // demo-pakkene skal alle bygge
    run_demo();
}
