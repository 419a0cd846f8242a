use std::process::Command;

#[test]
fn reports_last_arrival_in_seconds_for_a_small_transfer() {
    let output = Command::new(env!("CARGO_BIN_EXE_timed_transfer"))
        .args(["--file-size", "10KB", "--duration", "1", "--seed", "7"])
        .output()
        .expect("run timed_transfer");
    assert!(
        output.status.success(),
        "timed_transfer failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let secs: f64 = stdout.trim().parse().expect("stdout is one timestamp");
    assert!(secs > 0.0 && secs < 1.0, "last arrival = {secs}");
}

#[test]
fn unsupported_file_size_unit_is_fatal_with_exit_code_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_timed_transfer"))
        .args(["--file-size", "10GB"])
        .output()
        .expect("run timed_transfer");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not supported"), "stderr: {stderr}");
}

#[test]
fn zero_delivery_run_exits_nonzero_with_no_arrival_report() {
    // 时长短于发送端的启动偏移：没有任何交付事件
    let output = Command::new(env!("CARGO_BIN_EXE_timed_transfer"))
        .args(["--file-size", "10KB", "--duration", "0.005", "--seed", "7"])
        .output()
        .expect("run timed_transfer");

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no delivery event"),
        "stderr: {stderr}"
    );
}

#[test]
fn throughput_binary_prints_bytes_and_mbps() {
    let output = Command::new(env!("CARGO_BIN_EXE_throughput_over_lte"))
        .args(["--duration", "0.05", "--seed", "7"])
        .output()
        .expect("run throughput_over_lte");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Bytes Received: "), "stdout: {stdout}");
    assert!(stdout.contains("Throughput: "), "stdout: {stdout}");
    assert!(stdout.contains(" Mbps"), "stdout: {stdout}");
}
