#![expect(missing_docs, reason = "test")]

use std::io::Read;
use std::net::{SocketAddr, TcpListener};
use std::thread::JoinHandle;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tcp_probe::{FailurePolicy, Payload, Probe, ProbeConfig, ProbeError, ProbeState};

const PAYLOAD: &[u8] = b"TESTING 4821";

fn config(address: SocketAddr) -> ProbeConfig {
    ProbeConfig::default()
        .with_target(address)
        .with_payload(Payload::new("TESTING", 4821))
}

/// Accepts one connection and collects everything until the probe closes it.
fn collecting_listener() -> (SocketAddr, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        stream.read_to_end(&mut received).unwrap();
        received
    });
    (address, server)
}

/// Accepts one connection, reads a single payload and then resets the connection.
fn resetting_listener() -> (SocketAddr, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = vec![0; PAYLOAD.len()];
        stream.read_exact(&mut received).unwrap();
        socket2::SockRef::from(&stream)
            .set_linger(Some(Duration::ZERO))
            .unwrap();
        received
    });
    (address, server)
}

#[test]
fn listener_receives_three_concatenated_payloads() {
    let (address, server) = collecting_listener();
    let mut probe = Probe::new(config(address));

    let report = probe.run().unwrap();
    let received = server.join().unwrap();

    assert_eq!(received, PAYLOAD.repeat(3));
    assert_eq!(report.writes_attempted, 3);
    assert_eq!(report.writes_completed, 3);
    assert_eq!(report.bytes_sent, PAYLOAD.len() * 3);
    assert_eq!(probe.state(), ProbeState::Closed);
}

#[test]
fn send_loop_is_paced_by_two_intervals() {
    let (address, server) = collecting_listener();

    let report = tcp_probe::run(config(address)).unwrap();
    server.join().unwrap();

    assert!(
        report.elapsed >= Duration::from_millis(200),
        "{:?}",
        report.elapsed
    );
    assert!(
        report.elapsed < Duration::from_millis(1200),
        "{:?}",
        report.elapsed
    );
}

#[test]
fn default_payload_carries_the_process_id() {
    let (address, server) = collecting_listener();
    let config = ProbeConfig::default()
        .with_target(address)
        .with_interval(Duration::ZERO);

    tcp_probe::run(config).unwrap();

    let expected = format!("TESTING {}", std::process::id()).repeat(3);
    assert_eq!(String::from_utf8(server.join().unwrap()).unwrap(), expected);
}

#[test]
fn missing_listener_fails_before_any_write() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let mut probe = Probe::new(config(address));
    let error = probe.run().unwrap_err();

    assert!(
        matches!(&error, ProbeError::Connect { address: target, .. } if target.port() == address.port()),
        "{error:?}"
    );
    assert_eq!(error.writes_completed(), 0);
    assert_eq!(probe.state(), ProbeState::Failed);
}

#[test]
fn reset_mid_loop_aborts_with_write_error() {
    let (address, server) = resetting_listener();
    let mut probe = Probe::new(config(address));

    let error = probe.run().unwrap_err();

    assert_eq!(server.join().unwrap(), PAYLOAD);
    assert!(matches!(error, ProbeError::Write { .. }), "{error:?}");
    assert!(error.writes_completed() < 3);
    assert!(error.writes_completed() >= 1);
    assert_eq!(probe.state(), ProbeState::Failed);
}

#[test]
fn reset_mid_loop_is_tolerated_when_best_effort() {
    let (address, server) = resetting_listener();
    let mut probe =
        Probe::new(config(address).with_failure_policy(FailurePolicy::BestEffort));

    let report = probe.run().unwrap();

    assert_eq!(server.join().unwrap(), PAYLOAD);
    assert_eq!(report.writes_attempted, 3);
    assert!(report.writes_completed < 3);
    assert_eq!(probe.state(), ProbeState::Closed);
}
