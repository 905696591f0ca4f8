//! Unit tests for header precedence, address parsing and resolution logs.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use rstest::rstest;
use test_helpers::logs::capture_logs;
use tryout::FaultKind;

use super::{ClientIpResolver, real_ip};
use crate::{ClientIpConfig, RequestParts};

#[rstest]
#[case::plain("203.0.113.7", true)]
#[case::padded("  203.0.113.7 ", true)]
#[case::empty("", false)]
#[case::blank("   ", false)]
#[case::marker("unknown", false)]
#[case::marker_upper("UNKNOWN", false)]
#[case::marker_padded(" Unknown ", false)]
fn usable_values(#[case] value: &str, #[case] usable: bool) {
    let resolver = ClientIpResolver::default();
    assert_eq!(resolver.is_usable(value), usable);
}

#[rstest]
fn takes_first_entry_of_a_proxy_chain() {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new()
        .with_header("x-forwarded-for", " 10.0.0.1 , 10.0.0.2")
        .with_header("X-real-ip", "192.0.2.1");
    assert_eq!(resolver.resolve(&request).optional().as_deref(), Some("10.0.0.1"));
}

#[rstest]
#[case::single_entry("10.0.0.1")]
#[case::unknown_chain("unknown")]
#[case::blank_first_entry(" , 10.0.0.2")]
#[case::unknown_first_entry("unknown, 10.0.0.2")]
fn unusable_forwarded_for_falls_through(#[case] chain: &str) {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new()
        .with_header("X-Forwarded-For", chain)
        .with_header("X-real-ip", "192.0.2.1");
    assert_eq!(resolver.resolve(&request).optional().as_deref(), Some("192.0.2.1"));
}

#[rstest]
fn fallback_headers_are_tried_in_order() {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new()
        .with_header("X-real-ip", "192.0.2.6")
        .with_header("HTTP_CLIENT_IP", "192.0.2.4")
        .with_header("Proxy-Client-IP", "unknown")
        .with_header("WL-Proxy-Client-IP", "");
    assert_eq!(resolver.resolve(&request).optional().as_deref(), Some("192.0.2.4"));
}

#[rstest]
fn falls_back_to_remote_address() {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new()
        .with_header("Proxy-Client-IP", "unknown")
        .with_remote_addr("198.51.100.20");
    assert_eq!(resolver.resolve(&request).optional().as_deref(), Some("198.51.100.20"));
}

#[rstest]
fn fails_without_any_address() {
    let resolver = ClientIpResolver::default();
    let outcome = resolver.resolve(&RequestParts::new());
    assert_eq!(outcome.failure_fault().kind(), FaultKind::NullValue);
}

#[rstest]
#[case::v4("192.0.2.9", IpAddr::V4(Ipv4Addr::new(192, 0, 2, 9)))]
#[case::v4_with_port("192.0.2.9:443", IpAddr::V4(Ipv4Addr::new(192, 0, 2, 9)))]
#[case::v6("::1", IpAddr::V6(Ipv6Addr::LOCALHOST))]
#[case::v6_with_port("[::1]:8080", IpAddr::V6(Ipv6Addr::LOCALHOST))]
fn parses_resolved_addresses(
    #[case] remote: &str,
    #[case] expected: IpAddr,
) {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new().with_remote_addr(remote);
    assert_eq!(resolver.resolve_addr(&request).optional(), Some(expected));
}

#[rstest]
fn unparsable_addresses_are_caught() {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new().with_header("X-real-ip", "not-an-ip");
    let outcome = resolver.resolve_addr(&request);
    let fault = outcome.failure_fault();
    assert_eq!(fault.kind(), FaultKind::Caught);
    assert!(fault.downcast_cause_ref::<std::net::AddrParseError>().is_some());
}

#[rstest]
fn custom_configuration_changes_lookup() {
    let resolver = ClientIpResolver::new(ClientIpConfig {
        forwarded_for_header: "Forwarded-Chain".to_owned(),
        fallback_headers: vec!["CF-Connecting-IP".to_owned()],
        unknown_marker: "n/a".to_owned(),
    });
    let request = RequestParts::new()
        .with_header("X-Forwarded-For", "10.0.0.1, 10.0.0.2")
        .with_header("Forwarded-Chain", "N/A, 10.0.0.3")
        .with_header("CF-Connecting-IP", "192.0.2.77");
    assert_eq!(resolver.resolve(&request).optional().as_deref(), Some("192.0.2.77"));
    assert_eq!(resolver.config().unknown_marker, "n/a");
}

#[rstest]
fn real_ip_uses_defaults() {
    let request = RequestParts::from_iter([("HTTP_X_FORWARDED_FOR", "192.0.2.5")]);
    assert_eq!(real_ip(&request).as_deref(), Some("192.0.2.5"));
    assert_eq!(real_ip(&RequestParts::new()), None);
}

#[rstest]
fn logs_name_the_chosen_and_skipped_headers() {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new()
        .with_header("Proxy-Client-IP", "unknown")
        .with_header("HTTP_CLIENT_IP", "192.0.2.4");
    let (ip, logs) = capture_logs(|| resolver.resolve(&request).optional());
    assert_eq!(ip.as_deref(), Some("192.0.2.4"));
    assert!(logs.contains("skipping header"), "logs: {logs}");
    assert!(logs.contains("Proxy-Client-IP"), "logs: {logs}");
    assert!(logs.contains("resolved client address"), "logs: {logs}");
    assert!(logs.contains("HTTP_CLIENT_IP"), "logs: {logs}");
}

#[rstest]
fn logs_the_remote_address_fallback() {
    let resolver = ClientIpResolver::default();
    let request = RequestParts::new().with_remote_addr("198.51.100.20");
    let (ip, logs) = capture_logs(|| resolver.resolve(&request).optional());
    assert_eq!(ip.as_deref(), Some("198.51.100.20"));
    assert!(logs.contains("falling back to remote address"), "logs: {logs}");
}
