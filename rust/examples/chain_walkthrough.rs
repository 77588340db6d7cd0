//! Chain layout walkthrough for UnrolledList chunks
//!
//! Pass `trace` as the first argument to log every chunk allocation, split
//! and free, or `debug` for compaction summaries only.

use unrolled_list::UnrolledList;

fn section(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn main() {
    let level = match std::env::args().nth(1).as_deref() {
        Some("trace") => tracing::Level::TRACE,
        Some("debug") => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    section("push_back 1..=7 with capacity 3");
    let mut list = UnrolledList::new(3).unwrap();
    for i in 1..=7 {
        list.push_back(i).unwrap();
    }
    list.print_chain();
    println!("chunk sizes: {:?}", list.chunk_sizes());

    section("insert 100 at index 2 (full chunk splits)");
    list.insert(2, 100).unwrap();
    list.insert(2, 101).unwrap();
    list.print_chain();

    section("remove every other element");
    let mut index = 0;
    while index < list.len() {
        let removed = list.remove(index).unwrap();
        println!("removed {} at {}", removed, index);
        index += 1;
    }
    list.print_chain();
    println!("chunk sizes: {:?}", list.chunk_sizes());

    section("compact");
    let before = list.node_count();
    list.compact();
    list.print_chain();
    println!("chunks: {} -> {}", before, list.node_count());

    let stats = list.arena_stats();
    println!(
        "arena: {} allocated, {} free slots, {:.0}% utilized",
        stats.allocated_count,
        stats.free_count,
        stats.utilization * 100.0
    );

    section("drain");
    let drained: Vec<i32> = list.into_iter().collect();
    println!("{:?}", drained);
}
