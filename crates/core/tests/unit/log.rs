//! Per-Access Log Tests.

use pagesim_core::Simulator;
use pagesim_core::policy::LruPolicy;
use pagesim_core::sim::AccessLog;
use pretty_assertions::assert_eq;

use crate::common::builder::trace_of;
use crate::common::mocks::SharedBuffer;

fn logged_run(capacity: usize, show_cache_limit: usize, accesses: &[(u64, char)]) -> String {
    let buffer = SharedBuffer::new();
    let log = AccessLog::new(Box::new(buffer.clone()), show_cache_limit);
    let mut sim = Simulator::new(Box::new(LruPolicy::new(capacity).unwrap())).with_log(log);
    let _ = sim.run(&trace_of(accesses)).unwrap();
    buffer.contents()
}

#[test]
fn small_cache_lists_residents_after_each_access() {
    let output = logged_run(1, 20, &[(3, 'w'), (5, 'r'), (5, 'r')]);
    let dashes = "-".repeat(30);
    let expected = format!(
        "[Write 3]: MISS. No Eviction\n\
         \x20  Current Cache: [Page(3, Dirty=true)]\n\
         {dashes}\n\
         [Read 5]: MISS. Evicted: Page(3, Dirty=true)\n\
         \x20  Current Cache: [Page(5, Dirty=false)]\n\
         {dashes}\n\
         [Read 5]: HIT. No Eviction\n\
         \x20  Current Cache: [Page(5, Dirty=false)]\n\
         {dashes}\n"
    );
    assert_eq!(output, expected);
}

#[test]
fn large_cache_omits_contents() {
    let output = logged_run(4, 2, &[(1, 'r'), (2, 'w')]);
    assert!(!output.contains("Current Cache"));
    assert_eq!(output.lines().count(), 4);
    assert!(output.starts_with("[Read 1]: MISS. No Eviction\n"));
}
