use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Country {
    code: String,
    name: String,
}

impl Record for Country {
    type Id = String;

    fn id(&self) -> &String {
        &self.code
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn short_code(&self) -> &str {
        &self.code
    }
}

const WORDS: [&str; 6] = [
    "Atlantis",
    "Borduria",
    "Syldavia",
    "Freedonia",
    "Genovia",
    "Latveria",
];

fn country(name: &str, code: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
    }
}

/// `n` records; each word in `WORDS` is used for every sixth record.
fn dataset(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            let name = std::format!("{} {}", WORDS[i % WORDS.len()], i);
            let code = std::format!("{:03}", i);
            country(&name, &code)
        })
        .collect()
}

fn store(n: usize, page: usize, page_size: usize) -> WindowStore<Country> {
    WindowStore::new(
        Preload::new(dataset(n))
            .with_current_page(page)
            .with_page_size(page_size),
    )
    .unwrap()
}

fn codes<'a>(items: impl Iterator<Item = &'a Country>) -> Vec<String> {
    items.map(|c| c.code.clone()).collect()
}

/// Checks every store invariant against a brute-force recomputation.
fn assert_invariants(s: &WindowStore<Country>) {
    let filtered: Vec<&Country> = filter(s.dataset(), s.query());
    let size = s.page_size();
    let expected_last = filtered.len().div_ceil(size).max(1);

    assert_eq!(s.filtered_len(), filtered.len());
    assert_eq!(s.last_page(), expected_last);
    assert!(1 <= s.current_page() && s.current_page() <= s.last_page());
    assert!(1 <= s.top_anchor());
    assert!(s.top_anchor() <= s.current_page());
    assert!(s.current_page() <= s.bot_anchor());
    assert!(s.bot_anchor() <= s.last_page());

    let prev_start = (s.top_anchor() - 1) * size;
    let prev_end = (s.current_page() - 1) * size;
    let expected_prev: Vec<String> = filtered[prev_start..prev_end]
        .iter()
        .map(|c| c.code.clone())
        .collect();
    assert_eq!(codes(s.previous_window_items()), expected_prev);

    let more_start = (s.current_page() * size).min(filtered.len());
    let more_end = (s.bot_anchor() * size).min(filtered.len());
    let expected_more: Vec<String> = filtered[more_start..more_end]
        .iter()
        .map(|c| c.code.clone())
        .collect();
    assert_eq!(codes(s.more_window_items()), expected_more);

    if s.top_anchor() == s.current_page() {
        assert!(s.previous_window().is_empty());
    }
    if s.bot_anchor() == s.current_page() {
        assert!(s.more_window().is_empty());
    }
}

#[test]
fn filter_is_case_insensitive_and_preserves_order() {
    let data = std::vec![
        country("France", "FRA"),
        country("Finland", "FIN"),
        country("Germany", "DEU"),
        country("Ireland", "IRL"),
    ];

    assert_eq!(filter(&data, "").len(), 4);
    assert_eq!(codes(filter(&data, "LAND").into_iter()), ["FIN", "IRL"]);
    assert_eq!(codes(filter(&data, "deu").into_iter()), ["DEU"]);
    assert!(filter(&data, "atlantis").is_empty());
    assert_eq!(filter_positions(&data, "f"), [0, 1]);
}

#[test]
fn filter_matches_across_name_and_code_boundary() {
    let data = std::vec![country("France", "FRA")];
    assert_eq!(search_key(&data[0]), "francefra");
    assert_eq!(filter(&data, "anceFR").len(), 1);
}

#[test]
fn search_index_agrees_with_filter() {
    let data = dataset(30);
    let index = SearchIndex::new(&data);
    assert_eq!(index.len(), 30);
    for q in ["", "genovia", "GENOVIA 4", "01", "zzz", " 2"] {
        assert_eq!(index.matches(q), filter_positions(&data, q), "query {q:?}");
    }
}

#[test]
fn scenario_a_page_jump_is_clamped() {
    let mut s = store(30, 1, 12);
    assert_eq!(s.last_page(), 3);

    s.set_current_page(5);
    assert_eq!(s.current_page(), 3);
    assert_eq!(s.top_anchor(), 3);
    assert_eq!(s.bot_anchor(), 3);
    assert_invariants(&s);

    s.set_current_page(0);
    assert_eq!(s.current_page(), 1);
    assert_invariants(&s);
}

#[test]
fn scenario_b_bottom_expansion_appends_last_page() {
    let mut s = store(30, 2, 12);
    assert!(s.advance_bot_anchor());
    assert_eq!(s.bot_anchor(), 3);
    assert_eq!(s.more_window(), WindowRange::new(24, 30));
    assert_eq!(s.more_window_items().count(), 6);
    assert_invariants(&s);

    assert!(!s.advance_bot_anchor());
    assert_eq!(s.bot_anchor(), 3);
}

#[test]
fn scenario_c_top_expansion_prepends_and_stops_at_page_one() {
    let mut s = store(30, 2, 12);
    assert_eq!(s.top_anchor(), 2);

    assert!(s.advance_top_anchor());
    assert_eq!(s.top_anchor(), 1);
    assert_eq!(s.previous_window(), WindowRange::new(0, 12));
    let first_page: Vec<String> = dataset(12).into_iter().map(|c| c.code).collect();
    assert_eq!(codes(s.previous_window_items()), first_page);

    let before = s.snapshot();
    assert!(!s.advance_top_anchor());
    assert_eq!(s.snapshot(), before);
    assert_invariants(&s);
}

#[test]
fn scenario_d_narrow_query_collapses_everything() {
    let mut s = store(30, 3, 12);
    s.advance_top_anchor();
    s.advance_top_anchor();

    s.set_query("genovia");
    assert_eq!(s.filtered_len(), 5);
    assert_eq!(s.last_page(), 1);
    assert_eq!(s.current_page(), 1);
    assert_eq!(s.top_anchor(), 1);
    assert_eq!(s.bot_anchor(), 1);
    assert!(s.previous_window().is_empty());
    assert!(s.more_window().is_empty());
    assert_eq!(s.current_window_items().count(), 5);
    assert_invariants(&s);
}

#[test]
fn scenario_e_page_size_change_reclamps_page() {
    let mut s = store(30, 3, 12);
    s.advance_top_anchor();
    assert_eq!(s.last_page(), 3);

    s.set_page_size(24).unwrap();
    assert_eq!(s.last_page(), 2);
    assert_eq!(s.current_page(), 2);
    assert_eq!(s.top_anchor(), 2);
    assert_eq!(s.bot_anchor(), 2);
    assert_eq!(s.current_window(), WindowRange::new(24, 30));
    assert_invariants(&s);
}

#[test]
fn empty_query_result_is_a_single_empty_page() {
    let mut s = store(30, 2, 12);
    s.set_query("no such land");
    assert_eq!(s.filtered_len(), 0);
    assert_eq!(s.last_page(), 1);
    assert_eq!(s.current_page(), 1);
    assert!(!s.can_advance(Direction::Top));
    assert!(!s.can_advance(Direction::Bottom));
    assert_eq!(s.visible_items().count(), 0);
    assert_invariants(&s);
}

#[test]
fn empty_dataset_is_tolerated() {
    let s = WindowStore::<Country>::new(Preload::default().with_current_page(7)).unwrap();
    assert_eq!(s.last_page(), 1);
    assert_eq!(s.current_page(), 1);
    assert_eq!(s.page_size(), DEFAULT_PAGE_SIZE);
    assert_invariants(&s);
}

#[test]
fn zero_page_size_is_rejected_without_side_effects() {
    let err = WindowStore::new(Preload::new(dataset(5)).with_page_size(0)).unwrap_err();
    assert_eq!(err, WindowError::InvalidPageSize { requested: 0 });

    let mut s = store(30, 2, 12);
    s.advance_bot_anchor();
    let before = s.snapshot();
    assert_eq!(
        s.set_page_size(0),
        Err(WindowError::InvalidPageSize { requested: 0 })
    );
    assert_eq!(s.snapshot(), before);
    assert_eq!(s.page_size(), 12);

    assert!(s.initialize(Preload::new(dataset(3)).with_page_size(0)).is_err());
    assert_eq!(s.snapshot(), before);
    assert_eq!(s.dataset().len(), 30);
}

#[test]
fn initialize_replaces_state_and_clamps() {
    let mut s = store(30, 2, 12);
    s.advance_bot_anchor();
    s.initialize(
        Preload::new(dataset(50))
            .with_current_page(9)
            .with_page_size(10)
            .with_query("0"),
    )
    .unwrap();
    assert_eq!(s.query(), "0");
    assert_eq!(s.current_page(), s.last_page());
    assert_eq!(s.top_anchor(), s.current_page());
    assert_eq!(s.bot_anchor(), s.current_page());
    assert_invariants(&s);
}

#[test]
fn query_keeps_current_page_when_it_still_exists() {
    let mut s = store(60, 2, 5);
    s.set_query("a"); // every word contains an "a"
    assert_eq!(s.current_page(), 2);
    s.set_query("syldavia");
    assert_eq!(s.filtered_len(), 10);
    assert_eq!(s.last_page(), 2);
    assert_eq!(s.current_page(), 2);
    assert_invariants(&s);
}

#[test]
fn reset_expansion_is_idempotent() {
    let mut s = store(100, 4, 10);
    s.advance_top_anchor();
    s.advance_bot_anchor();
    s.advance_bot_anchor();
    assert!(s.snapshot().is_expanded());

    s.reset_expansion();
    let once = s.snapshot();
    s.reset_expansion();
    assert_eq!(s.snapshot(), once);
    assert!(!once.is_expanded());
    assert_eq!(once.current_page, 4);
    assert_invariants(&s);
}

#[test]
fn visible_items_are_previous_current_more_in_order() {
    let mut s = store(30, 2, 10);
    s.advance_top_anchor();
    s.advance_bot_anchor();

    let mut expected = codes(s.previous_window_items());
    expected.extend(codes(s.current_window_items()));
    expected.extend(codes(s.more_window_items()));
    assert_eq!(codes(s.visible_items()), expected);
    assert_eq!(expected.len(), 30);
    assert_eq!(s.snapshot().visible(), WindowRange::new(0, 30));
}

#[test]
fn page_items_outside_range_are_empty() {
    let s = store(30, 1, 12);
    assert_eq!(s.page_items(3).count(), 6);
    assert_eq!(s.page_items(4).count(), 0);
    assert_eq!(s.page_items(0).count(), 0);
}

#[test]
fn on_change_fires_once_per_effective_action() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut s = store(30, 2, 12);
    s.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &WindowStore<Country>| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));

    s.advance_bot_anchor();
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    s.advance_bot_anchor();
    s.reset_expansion();
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // No-ops do not notify.
    s.reset_expansion();
    s.set_current_page(2);
    s.set_current_page(2);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    let _ = s.set_page_size(0);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn batch_update_coalesces_notifications() {
    let seen = Arc::new(AtomicUsize::new(0));
    let mut s = store(30, 1, 12);
    s.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |s: &WindowStore<Country>| {
            seen.store(s.page_size() * 100 + s.current_page(), Ordering::Relaxed);
        }
    }));

    s.batch_update(|s| {
        s.set_query("");
        s.set_page_size(6).unwrap();
        s.set_current_page(4);
    });
    assert_eq!(seen.load(Ordering::Relaxed), 604);
}

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 16
    }

    fn gen_range(&mut self, start: usize, end_exclusive: usize) -> usize {
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

#[test]
fn randomized_action_sequences_keep_invariants() {
    const QUERIES: [&str; 6] = ["", "a", "genovia", "1", "atlantis 1", "nothing"];

    for seed in 0..32u64 {
        let mut rng = Lcg(seed);
        let n = rng.gen_range(0, 80);
        let mut s = store(n, rng.gen_range(0, 10), rng.gen_range(1, 15));
        assert_invariants(&s);

        let mut top = s.top_anchor();
        let mut bot = s.bot_anchor();
        for _ in 0..200 {
            match rng.gen_range(0, 7) {
                0 => s.set_current_page(rng.gen_range(0, 12)),
                1 => {
                    let _ = s.set_page_size(rng.gen_range(0, 20));
                }
                2 => s.set_query(QUERIES[rng.gen_range(0, QUERIES.len())]),
                3 | 4 => {
                    s.advance_top_anchor();
                    assert!(s.top_anchor() <= top);
                }
                5 => {
                    s.advance_bot_anchor();
                    assert!(s.bot_anchor() >= bot);
                }
                _ => s.reset_expansion(),
            }
            top = s.top_anchor();
            bot = s.bot_anchor();
            assert_invariants(&s);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn filter_returns_matching_subset(n in 0usize..60, query in "[a-z0-9 ]{0,4}") {
        let data = dataset(n);
        let result = filter(&data, &query);
        prop_assert!(result.len() <= data.len());
        for c in result {
            prop_assert!(search_key(c).contains(query.to_lowercase().as_str()));
        }
    }

    #[test]
    fn last_page_matches_formula(len in 0usize..10_000, size in 1usize..500) {
        let size_nz = core::num::NonZeroUsize::new(size).unwrap();
        let lp = last_page(len, size_nz);
        prop_assert!(lp >= 1);
        prop_assert_eq!(lp, core::cmp::max(len.div_ceil(size), 1));
    }

    #[test]
    fn anchors_are_monotonic_until_bound(
        n in 0usize..120,
        page in 0usize..15,
        size in 1usize..20,
        steps in 0usize..30,
    ) {
        let mut s = store(n, page, size);
        let mut prev_top = s.top_anchor();
        let mut prev_bot = s.bot_anchor();
        for _ in 0..steps {
            s.advance_top_anchor();
            s.advance_bot_anchor();
            prop_assert!(s.top_anchor() <= prev_top && s.top_anchor() >= 1);
            prop_assert!(s.bot_anchor() >= prev_bot && s.bot_anchor() <= s.last_page());
            prev_top = s.top_anchor();
            prev_bot = s.bot_anchor();
        }
        assert_invariants(&s);
        if steps >= s.last_page() {
            prop_assert_eq!(s.top_anchor(), 1);
            prop_assert_eq!(s.bot_anchor(), s.last_page());
            prop_assert_eq!(s.visible_items().count(), s.filtered_len());
        }
    }
}
