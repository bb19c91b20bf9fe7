//! Walks a small pool through admission, eviction, repricing and takes, printing
//! every eviction and the final metrics report.
//!
//! Run with `cargo run --example priced_pool_demo`.

use priced_pool::config::PricedPoolConfig;
use priced_pool::metrics::CacheMetrics;
use priced_pool::{PricedPool, PutOutcome};

fn describe(outcome: &PutOutcome<&str, &str>) -> String {
    match outcome {
        PutOutcome::Pushed => "pushed".to_string(),
        PutOutcome::Admitted => "admitted".to_string(),
        PutOutcome::Replaced(eviction) => {
            format!("admitted, replacing {:?} at {}", eviction.key, eviction.price)
        }
        PutOutcome::RejectedFull => "rejected: stack full".to_string(),
        PutOutcome::RejectedUnderpriced => "rejected: underpriced".to_string(),
    }
}

fn print_pool(pool: &PricedPool<&str, &str>) {
    println!("  pool ({} of {} keys):", pool.count(), pool.cap());
    for (key, price, values) in pool.iter() {
        println!("    {key:>3} @ {price:>3}  {values:?}");
    }
}

fn main() {
    let config = PricedPoolConfig::new(5, 2);
    println!("Priced Pool Demo");
    println!("================");
    println!("{config:?}");

    let mut pool = PricedPool::from_config(config);
    pool.on_evict(|key: &&str, values: &[&str], price: u64| {
        println!("  -> evicted {key:?} at price {price} holding {values:?}");
    });

    let puts = [
        ("2", "b", 2),
        ("3", "c", 1),
        ("5", "e", 5),
        ("7", "a", 1),
        ("4", "d", 4),
        ("6", "f", 3),
        ("1", "aa", 10),
        ("2", "bb", 20),
        ("2", "bbb", 20),
        ("8", "h", 2),
    ];

    for (key, value, price) in puts {
        let outcome = pool.put(key, value, price);
        println!("put({key:?}, {value:?}, {price}): {}", describe(&outcome));
    }
    print_pool(&pool);

    println!();
    println!("take(\"2\"): {:?}", pool.try_take(&"2"));
    println!("take(\"2\"): {:?}", pool.try_take(&"2"));
    println!("take(\"2\"): {:?}", pool.try_take(&"2"));
    println!("\"2\" still resident: {}", pool.contains_key(&"2"));
    print_pool(&pool);

    println!();
    println!("{} metrics:", pool.algorithm_name());
    for (name, value) in CacheMetrics::metrics(&pool) {
        println!("  {name:<24} {value}");
    }
}
