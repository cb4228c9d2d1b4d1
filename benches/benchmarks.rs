// benches/benchmarks.rs - Performance benchmarks (criterion)
//
//   1. Page normalization - sorting a batch by most recent message
//   2. Page merge - appending pages to a growing session list
//   3. Page decode - parsing a full JSON page

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chatdeck::core::loader::SessionLoader;
use chatdeck::core::types::{sort_by_recent_activity, Message, Sender, Session, SessionPage};

// ─── Helpers ────────────────────────────────────────────────────────────────

fn build_sessions(n: usize, messages_each: usize) -> Vec<Session> {
    (0..n)
        .map(|i| Session {
            id: i as i64,
            name: format!("Session {i}"),
            messages: (0..messages_each)
                .map(|m| Message {
                    id: m as i64,
                    content: format!("message {m} of session {i}"),
                    action: if m % 2 == 0 { Sender::User } else { Sender::Ai },
                    timestamp: format!(
                        "2024-{:02}-{:02}T{:02}:{:02}:00Z",
                        1 + (i * 7) % 12,
                        1 + (i * 13) % 28,
                        m % 24,
                        (i + m) % 60
                    ),
                })
                .collect(),
            message_count: messages_each as u64,
            role: None,
        })
        .collect()
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_sort(c: &mut Criterion) {
    let sessions = build_sessions(20, 50);
    c.bench_function("sort_page_20x50", |b| {
        b.iter(|| {
            let mut batch = sessions.clone();
            sort_by_recent_activity(black_box(&mut batch));
            batch
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    let pages: Vec<SessionPage> = (0..50)
        .map(|_| SessionPage {
            chat_sessions: build_sessions(20, 10),
            total_pages: Some(50),
        })
        .collect();

    c.bench_function("merge_50_pages", |b| {
        b.iter(|| {
            let mut loader = SessionLoader::new();
            for page in pages.iter().cloned() {
                let n = loader.next_page();
                loader.begin(n);
                loader.finish(Ok(page)).expect("merge");
            }
            black_box(loader.sessions().len())
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let page = SessionPage {
        chat_sessions: build_sessions(20, 50),
        total_pages: Some(10),
    };
    let json = serde_json::to_string(&page).expect("encode");
    c.bench_function("decode_page_20x50", |b| {
        b.iter(|| {
            let parsed: SessionPage = serde_json::from_str(black_box(&json)).expect("decode");
            parsed
        })
    });
}

criterion_group!(benches, bench_sort, bench_merge, bench_decode);
criterion_main!(benches);
