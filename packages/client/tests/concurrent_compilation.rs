use std::sync::{Arc, Barrier};
use std::thread;

use proxygate_client::{BypassCache, BypassMatcher};

const LIST: &str = "localhost, www.example.com, *.wordpress.org, build-*.ci.internal";

#[test]
fn test_threads_compile_once() {
    let cache = Arc::new(BypassCache::new());
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let matcher = BypassMatcher::with_cache(Arc::clone(&cache));
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let bypassed = !matcher.send_through_proxy(
                    &format!("http://site{i}.wordpress.org/"),
                    None,
                    Some(LIST),
                );
                let proxied = matcher.send_through_proxy("http://wordpress.org/", None, Some(LIST));
                bypassed && proxied
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("worker thread should not panic"));
    }

    let stats = cache.stats().snapshot();
    assert_eq!(stats.compilations, 1);
    assert_eq!(stats.hits + stats.misses, threads as u64 * 2);
    assert_eq!(cache.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_blocking_tasks_share_published_rule() {
    let cache = Arc::new(BypassCache::new());

    let mut tasks = Vec::new();
    for i in 0..32 {
        let cache = Arc::clone(&cache);
        tasks.push(tokio::task::spawn_blocking(move || {
            let rule = cache.get_or_compile(LIST);
            (rule, i)
        }));
    }

    let mut rules = Vec::new();
    for task in tasks {
        let (rule, _) = task.await.expect("task should complete");
        rules.push(rule);
    }

    let first = &rules[0];
    assert!(rules.iter().all(|rule| Arc::ptr_eq(rule, first)));
    assert!(first.matches("build-7.ci.internal"));
    assert_eq!(cache.stats().snapshot().compilations, 1);
}
