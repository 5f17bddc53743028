// Example: minimal usage with a page jump and a search query.
use pagewindow::{Preload, Record, WindowStore};

struct Country {
    code: &'static str,
    name: &'static str,
}

impl Record for Country {
    type Id = &'static str;

    fn id(&self) -> &Self::Id {
        &self.code
    }

    fn display_name(&self) -> &str {
        self.name
    }

    fn short_code(&self) -> &str {
        self.code
    }
}

const COUNTRIES: [(&str, &str); 8] = [
    ("FRA", "France"),
    ("FIN", "Finland"),
    ("DEU", "Germany"),
    ("IRL", "Ireland"),
    ("ISL", "Iceland"),
    ("NLD", "Netherlands"),
    ("POL", "Poland"),
    ("PRT", "Portugal"),
];

fn main() {
    let dataset = COUNTRIES
        .iter()
        .map(|&(code, name)| Country { code, name })
        .collect();

    // The requested page may be out of range (e.g. a stale `?page=30` link).
    let mut store = WindowStore::new(
        Preload::new(dataset)
            .with_current_page(30)
            .with_page_size(3),
    )
    .expect("page size is non-zero");
    println!(
        "page {}/{}: {:?}",
        store.current_page(),
        store.last_page(),
        store.current_window_items().map(|c| c.name).collect::<Vec<_>>()
    );

    store.set_query("land");
    println!(
        "query={:?} page {}/{}: {:?}",
        store.query(),
        store.current_page(),
        store.last_page(),
        store.current_window_items().map(|c| c.name).collect::<Vec<_>>()
    );
}
