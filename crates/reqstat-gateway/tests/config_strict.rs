#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqstat_gateway::config;
use reqstat_gateway::middleware::FilterMode;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
statsd:
  prefix: "svc"
  global: { enabeld: true } # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
statsd:
  prefix: "svc"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.statsd.address, "127.0.0.1:8125");
    assert_eq!(cfg.statsd.prefix, "svc");
    assert_eq!(cfg.statsd.filter, FilterMode::StripQuery);
    assert!(cfg.statsd.exclude.is_empty());
    assert!(cfg.statsd.global.enabled);
    assert_eq!(cfg.statsd.global.label, "request");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
statsd:
  address: "10.0.0.5:8125"
  prefix: "prod.web"
  filter: passthrough
  exclude: ["/healthz", "/metrics"]
  global:
    enabled: false
    label: "api"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.statsd.filter, FilterMode::Passthrough);
    assert_eq!(cfg.statsd.exclude, vec!["/healthz", "/metrics"]);
    assert!(!cfg.statsd.global.enabled);
    assert_eq!(cfg.statsd.global.label, "api");
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
statsd:
  prefix: "svc"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_invalid_values() {
    let cases = [
        ("empty prefix", "version: 1\nstatsd:\n  prefix: \"\"\n"),
        ("prefix with space", "version: 1\nstatsd:\n  prefix: \"my svc\"\n"),
        ("bad listen", "version: 1\nserver:\n  listen: \"nope\"\nstatsd:\n  prefix: \"svc\"\n"),
        ("relative exclude", "version: 1\nstatsd:\n  prefix: \"svc\"\n  exclude: [\"healthz\"]\n"),
        ("dotted label", "version: 1\nstatsd:\n  prefix: \"svc\"\n  global:\n    label: \".api\"\n"),
        ("unknown filter", "version: 1\nstatsd:\n  prefix: \"svc\"\n  filter: regex\n"),
        ("missing statsd", "version: 1\n"),
    ];

    for (name, yaml) in cases {
        let err = config::load_from_str(yaml).expect_err(name);
        assert_eq!(err.code().as_str(), "INVALID_CONFIG", "case={name}");
    }
}
