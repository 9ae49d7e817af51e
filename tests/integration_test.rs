//! Integration tests for cidr-aggregate
//!
//! These tests drive the complete workflow from input lines to written output.

use cidr_aggregate::error::RunError;
use cidr_aggregate::output::OutputFormat;
use cidr_aggregate::{parse_line, reduce_all, run, ParseError};
use pretty_assertions::assert_eq;
use std::io::{self, BufRead, BufReader, Read};

fn run_bytes(input: &[u8]) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(input, &mut out, &mut err, OutputFormat::Text).expect("run failed");
    (
        String::from_utf8(out).expect("utf8 output"),
        String::from_utf8(err).expect("utf8 errors"),
    )
}

fn run_text(input: &str) -> (String, String) {
    run_bytes(input.as_bytes())
}

fn aggregate(input: &str) -> String {
    let (out, err) = run_text(input);
    assert_eq!(err, "", "unexpected diagnostics for {input:?}");
    out
}

#[test]
fn test_simple_aggregation() {
    assert_eq!(
        aggregate("192.168.1.0/25\n192.168.1.128/25\n"),
        "192.168.1.0/24\n"
    );
}

#[test]
fn test_eight_hosts_collapse() {
    let input: String = (0..8).map(|i| format!("10.0.0.{i}/32\n")).collect();
    assert_eq!(aggregate(&input), "10.0.0.0/29\n");
}

#[test]
fn test_sixteen_hosts_collapse() {
    let input: String = (0..16).map(|i| format!("10.0.0.{i}\n")).collect();
    assert_eq!(aggregate(&input), "10.0.0.0/28\n");
}

#[test]
fn test_default_route_absorbs_all() {
    assert_eq!(
        aggregate("0.0.0.0/0\n192.168.1.0/24\n10.0.0.0/8\n"),
        "0.0.0.0/0\n"
    );
    assert_eq!(aggregate("::/0\n2001:db8::/32\nfe80::/10\n"), "::/0\n");
}

#[test]
fn test_mixed_families() {
    assert_eq!(
        aggregate("192.168.1.0/25\n2001:db8::/65\n192.168.1.128/25\n2001:db8::8000:0:0:0/65\n"),
        "192.168.1.0/24\n2001:db8::/64\n"
    );
}

#[test]
fn test_plain_ips() {
    assert_eq!(
        aggregate("192.168.1.0\n192.168.1.1\n2001:db8::1\n"),
        "192.168.1.0/31\n2001:db8::1/128\n"
    );
    assert_eq!(
        aggregate("192.168.1.0\n192.168.1.1/32\n192.168.1.2\n192.168.1.3/32\n"),
        "192.168.1.0/30\n"
    );
    assert_eq!(aggregate("10.0.0.0/24\n10.0.0.5\n"), "10.0.0.0/24\n");
    assert_eq!(
        aggregate("192.168.0.1\n192.168.1.1\n"),
        "192.168.0.1/32\n192.168.1.1/32\n"
    );
}

#[test]
fn test_comments_and_whitespace() {
    assert_eq!(
        aggregate("# Header\n  192.168.1.0/24  \n; Another comment\n192.168.2.0/24 ; trailing\n"),
        "192.168.1.0/24\n192.168.2.0/24\n"
    );
    assert_eq!(aggregate("# comment\n; comment\n   \n\n"), "");
    assert_eq!(aggregate(""), "");
}

#[test]
fn test_edges_of_address_space() {
    assert_eq!(aggregate("0.0.0.0/32\n0.0.0.1/32\n"), "0.0.0.0/31\n");
    assert_eq!(
        aggregate("255.255.255.254/32\n255.255.255.255/32\n"),
        "255.255.255.254/31\n"
    );
    assert_eq!(
        aggregate("fe80::1/128\nfe80::2/128\n"),
        "fe80::1/128\nfe80::2/128\n"
    );
}

#[test]
fn test_format_equivalent_inputs_collapse() {
    assert_eq!(
        aggregate("192.168.1.*\n192.168.1.0/24\n192.168.1.0-255\n"),
        "192.168.1.0/24\n"
    );
}

#[test]
fn test_all_formats_aggregate() {
    assert_eq!(
        aggregate(
            "192.168.0.*\n192.168.1.0/24\n192.168.2.0 255.255.255.0\n192.168.3.0-255\n"
        ),
        "192.168.0.0/22\n"
    );
    assert_eq!(
        aggregate("192.168.0.*\n192.168.1.0-192.168.1.255\n"),
        "192.168.0.0/23\n"
    );
}

#[test]
fn test_non_aligned_range() {
    assert_eq!(
        aggregate("192.168.1.1-192.168.1.5\n"),
        "192.168.1.1/32\n192.168.1.2/31\n192.168.1.4/31\n"
    );
}

#[test]
fn test_ipv6_formats() {
    assert_eq!(aggregate("2001:db8::*\n"), "2001:db8::/32\n");
    assert_eq!(aggregate("2001:db8::0-2001:db8::ff\n"), "2001:db8::/120\n");
    assert_eq!(
        aggregate("2001:db8::*\n2001:db8:1::/48\n2001:db9::/32\n"),
        "2001:db8::/31\n"
    );
}

#[test]
fn test_invalid_lines_reported_and_skipped() {
    let (out, err) = run_text("192.168.1.0/24\nnot-valid\n192.168.2.0/24\n");
    assert_eq!(out, "192.168.1.0/24\n192.168.2.0/24\n");
    assert!(err.contains("line 2"), "stderr = {err:?}");
    assert!(err.contains("invalid"), "stderr = {err:?}");
    assert_eq!(err.lines().count(), 1);
}

#[test]
fn test_invalid_format_messages() {
    for (input, expected) in [
        ("192.*.168.0\n", "wildcard"),
        ("192.168.1.255-192.168.1.0\n", "range"),
        ("192.168.1.0 255.255.254.1\n", "not a valid mask"),
    ] {
        let (out, err) = run_text(input);
        assert_eq!(out, "");
        assert!(
            err.to_lowercase().contains(expected),
            "stderr {err:?} should mention {expected:?}"
        );
    }
}

#[test]
fn test_non_contiguous_mask_emits_nothing() {
    assert_eq!(
        parse_line("192.168.1.0 255.255.254.1"),
        Err(ParseError::NonContiguousMask("255.255.254.1".to_string()))
    );
}

#[test]
fn test_latin1_comment_does_not_abort() {
    let (out, err) = run_bytes(b"10.0.0.0/25\n# feed by Caf\xe9\n10.0.0.128/25\n");
    assert_eq!(out, "10.0.0.0/24\n");
    assert_eq!(err, "");

    let (out, err) = run_bytes(b"10.0.0.0/25 ; owner Caf\xe9\n10.0.0.128/25\n");
    assert_eq!(out, "10.0.0.0/24\n");
    assert_eq!(err, "");
}

#[test]
fn test_invalid_utf8_address_rejects_only_its_line() {
    let (out, err) = run_bytes(b"10.0.0.0/25\n10.0.\xff.0/24\n10.0.0.128/25\n");
    assert_eq!(out, "10.0.0.0/24\n");
    assert!(err.contains("line 2"), "stderr = {err:?}");
    assert_eq!(err.lines().count(), 1);
}

#[test]
fn test_crlf_line_endings() {
    let (out, err) = run_bytes(
        b"192.168.0.*\r\n192.168.1.0/24\r\n192.168.2.0 255.255.255.0\r\n192.168.3.0-255\r\n",
    );
    assert_eq!(out, "192.168.0.0/22\n");
    assert_eq!(err, "");

    let (out, err) = run_bytes(b"10.0.0.0/25\r\nbogus\r\n10.0.0.128/25");
    assert_eq!(out, "10.0.0.0/24\n");
    assert!(err.contains("line 2"), "stderr = {err:?}");
}

#[test]
fn test_json_output() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let report = run(
        "10.0.0.0/25\n10.0.0.128/25\n2001:db8::/32\n".as_bytes(),
        &mut out,
        &mut err,
        OutputFormat::Json,
    )
    .expect("run failed");

    let parsed: Vec<String> = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(parsed, ["10.0.0.0/24", "2001:db8::/32"]);
    assert_eq!(report.ipv4_out, 1);
    assert_eq!(report.ipv6_out, 1);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream broke"))
    }
}

#[test]
fn test_reader_error_aborts_run() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(FailingReader));
    let result = run(reader, &mut out, &mut err, OutputFormat::Text);
    assert!(matches!(result, Err(RunError::Io(_))));
    assert!(out.is_empty());
}

#[test]
fn test_library_pipeline_matches_run() {
    let lines = ["10.0.0.0/25", "10.0.0.128-10.0.0.255", "10.0.1.*", "::1"];
    let blocks = lines
        .iter()
        .flat_map(|l| parse_line(l).expect("valid line"))
        .collect();
    let reduced: Vec<String> = reduce_all(blocks).iter().map(|b| b.to_text()).collect();
    assert_eq!(reduced, ["10.0.0.0/23", "::1/128"]);

    let out = aggregate(&lines.join("\n"));
    assert_eq!(out, "10.0.0.0/23\n::1/128\n");
}
