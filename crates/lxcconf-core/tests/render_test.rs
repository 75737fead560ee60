//! End-to-end tests for building and rendering LXC configurations.
//!
//! These tests drive the public API the way a caller does:
//! 1. Start from `Config::new()` or `Config::default()`
//! 2. Assign fields directly
//! 3. Render and inspect the produced lines

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use lxcconf_core::{Config, IdMap, MacVlanMode, NetworkType, RenderOptions, registry};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn lines(rendered: &str) -> Vec<&str> {
    rendered.lines().filter(|l| !l.is_empty()).collect()
}

// ── Defaults ─────────────────────────────────────────────────────────

#[test]
fn zero_config_has_no_lines() {
    init_tracing();
    let rendered = Config::default().render();
    assert!(lines(&rendered).is_empty(), "got: {rendered:?}");
}

#[test]
fn default_config_emits_exactly_the_curated_lines() {
    init_tracing();
    let rendered = Config::new().render();
    assert_eq!(
        lines(&rendered),
        vec![
            "lxc.id_map: u 0 100000 100000",
            "lxc.id_map: g 0 100000 100000",
            "lxc.network.type: veth",
            "lxc.network.link: lxcbr0",
            "lxc.aa_profile: unconfined",
            "lxc.arch: x86",
        ]
    );
    assert!(rendered.starts_with('\n'));
    assert!(!rendered.ends_with('\n'));
}

// ── Stability ────────────────────────────────────────────────────────

#[test]
fn rendering_is_idempotent() {
    let mut config = Config::new();
    config.utsname = "db01".into();
    config.tty = 2;
    let _ = config.cgroup.insert("cpu.shares".into(), "256".into());

    let first = config.render();
    let second = config.render();
    assert_eq!(first, second);
}

#[test]
fn scalar_order_follows_registry_across_renders() {
    let mut config = Config::new();
    config.cap_drop = "mac_admin".into();
    config.pts = 1024;
    config.rootfs = PathBuf::from("/mnt/lxc");
    config.network_name = "eth0".into();
    config.network_flags = "up".into();

    let position = |rendered: &str, key: &str| {
        lines(rendered)
            .iter()
            .position(|l| l.starts_with(&format!("{key}: ")))
            .expect(key)
    };

    for _ in 0..3 {
        let rendered = config.render();
        let order: Vec<usize> = registry::FIELDS
            .iter()
            .filter(|spec| rendered.contains(&format!("\n{}: ", spec.key)))
            .map(|spec| position(&rendered, spec.key))
            .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted, "out of order: {rendered}");
    }
}

// ── Zero means unset ─────────────────────────────────────────────────

#[test]
fn resetting_integer_to_zero_suppresses_it() {
    let mut config = Config::new();
    config.tty = 4;
    assert!(config.render().contains("\nlxc.tty: 4"));

    config.tty = 0;
    assert!(!config.render().contains("lxc.tty"));

    config.tty = 4;
    assert!(config.render().contains("\nlxc.tty: 4"));
}

#[test]
fn every_integer_field_renders_and_resets() {
    type Setter = fn(&mut Config, i64);
    let fields: [(&str, Setter); 3] = [
        ("lxc.pts", |c, n| c.pts = n),
        ("lxc.tty", |c, n| c.tty = n),
        ("lxc.mount.entry", |c, n| c.mount_entry = n),
    ];

    for (key, set) in fields {
        let mut config = Config::default();
        set(&mut config, 3);
        assert_eq!(config.render(), format!("\n{key}: 3"));

        set(&mut config, 0);
        assert_eq!(config.render(), "", "{key} should be unset at zero");
    }
}

#[test]
fn clearing_defaults_removes_their_lines() {
    let mut config = Config::new();
    config.id_map.clear();
    config.network_type = None;
    config.network_link.clear();
    config.apparmor_profile.clear();
    config.arch = None;
    assert_eq!(config.render(), "");
}

// ── Mappings and sequences ───────────────────────────────────────────

#[test]
fn cgroup_entries_each_appear_once() {
    let mut config = Config::default();
    let _ = config
        .cgroup
        .insert("memory.limit_in_bytes".into(), "100M".into());
    let _ = config.cgroup.insert("cpu.shares".into(), "512".into());

    let rendered = config.render();
    let all = lines(&rendered);
    assert_eq!(all.len(), 2);
    for expected in [
        "lxc.cgroup.memory.limit_in_bytes: 100M",
        "lxc.cgroup.cpu.shares: 512",
    ] {
        assert_eq!(all.iter().filter(|l| **l == expected).count(), 1, "{expected}");
    }
}

#[test]
fn include_is_suppressed_by_default() {
    let mut config = Config::new();
    config.include = vec![PathBuf::from("/etc/lxc/common.conf")];
    assert!(!config.render().contains("lxc.include"));
}

#[test]
fn include_is_emitted_when_expanded() {
    let mut config = Config::new();
    config.include = vec![PathBuf::from("/etc/lxc/common.conf")];
    let rendered = config.render_with(RenderOptions::expanded());
    assert!(rendered.contains("\nlxc.include: /etc/lxc/common.conf"));
    assert!(rendered.contains("\nlxc.arch: x86"));
}

// ── Typical container ────────────────────────────────────────────────

#[test]
fn macvlan_container_renders_full_network_block() {
    let mut config = Config::new();
    config.id_map = vec![IdMap::user(0, 165_536, 65_536), IdMap::group(0, 165_536, 65_536)];
    config.network_type = Some(NetworkType::Macvlan);
    config.network_link = "eth0".into();
    config.network_flags = "up".into();
    config.network_name = "eth0".into();
    config.network_mac_address = "00:16:3e:12:34:56".into();
    config.macvlan_mode = MacVlanMode::Bridge.into();
    config.address_v4 = vec!["192.168.1.123/24".parse().expect("cidr")];
    config.utsname = "edge".into();

    let expected = "\nlxc.id_map: u 0 165536 65536\
                    \nlxc.id_map: g 0 165536 65536\
                    \nlxc.network.type: macvlan\
                    \nlxc.network.link: eth0\
                    \nlxc.network.flags: up\
                    \nlxc.network.name: eth0\
                    \nlxc.network.hwaddr: 00:16:3e:12:34:56\
                    \nlxc.network.macvlan.mode: bridge\
                    \nlxc.aa_profile: unconfined\
                    \nlxc.utsname: edge\
                    \nlxc.arch: x86";
    assert_eq!(config.render(), expected);

    let expanded = config.render_with(RenderOptions::expanded());
    assert!(expanded.contains(
        "\nlxc.network.hwaddr: 00:16:3e:12:34:56\
         \nlxc.network.ipv4: 192.168.1.123/24\
         \nlxc.network.macvlan.mode: bridge"
    ));
}

#[test]
fn parsed_id_map_matches_constructed_one() {
    let parsed: IdMap = "u 0 100000 100000".parse().expect("valid id map");
    assert_eq!(parsed, Config::new().id_map[0]);
    assert!("u 0 100000".parse::<IdMap>().is_err());
}
