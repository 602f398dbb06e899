//! Report Formatting Tests.

use crate::common::builder::instruction::inst;
use crate::common::harness::TestContext;
use e20_core::config::{CacheConfig, CacheHierarchyConfig};
use e20_core::core::units::cache::{CacheHierarchy, CacheLevel};
use e20_core::sim::report::{cache_banner, cache_config_line, final_state};
use pretty_assertions::assert_eq;

#[test]
fn cache_line_format() {
    assert_eq!(
        cache_config_line(CacheLevel::L1, &CacheConfig::new(64, 1, 16)),
        "Cache L1 has size 64, associativity 1, blocksize 16, rows 4"
    );
    assert_eq!(
        cache_config_line(CacheLevel::L2, &CacheConfig::new(100, 1, 16)),
        "Cache L2 has size 100, associativity 1, blocksize 16, rows 6"
    );
}

#[test]
fn banner_lists_levels_in_order() {
    let caches = CacheHierarchy::new(&CacheHierarchyConfig::two_level(
        CacheConfig::new(16, 2, 2),
        CacheConfig::new(64, 4, 4),
    ))
    .unwrap();
    assert_eq!(
        cache_banner(&caches),
        "Cache L1 has size 16, associativity 2, blocksize 2, rows 4\n\
         Cache L2 has size 64, associativity 4, blocksize 4, rows 4\n"
    );
}

#[test]
fn final_state_layout() {
    let mut ctx = TestContext::new().load_program(&[inst().addi(1, 0, 5), inst().halt(1)]);
    let _ = ctx.run();

    let mut expected = String::from("Final state:\n\tpc=    1\n");
    expected.push_str("\t$0=    0\n\t$1=    5\n");
    for reg in 2..8 {
        expected.push_str(&format!("\t${reg}=    0\n"));
    }
    expected.push_str("2085 4001 0000 0000 0000 0000 0000 0000 \n");
    for _ in 1..16 {
        expected.push_str(&"0000 ".repeat(8));
        expected.push('\n');
    }

    assert_eq!(final_state(ctx.cpu(), 128), expected);
    assert_eq!(ctx.sim.final_state(), expected);
}

#[test]
fn register_values_print_unsigned_and_hex_is_lowercase() {
    let mut ctx = TestContext::new().load_program(&[
        inst().addi(1, 0, -1),
        inst().sw(1, 0, 3),
        inst().halt(2),
    ]);
    let _ = ctx.run();

    let report = final_state(ctx.cpu(), 8);
    assert!(report.contains("\t$1=65535\n"), "{report}");
    assert!(report.ends_with(" 4002 ffff 0000 0000 0000 0000 \n"), "{report}");
}
