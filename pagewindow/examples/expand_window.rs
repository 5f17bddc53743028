// Example: growing the window in both directions, then collapsing it on a page jump.
use pagewindow::{Direction, Preload, Record, WindowStore};

struct Row {
    id: u32,
    name: String,
    code: String,
}

impl Record for Row {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn short_code(&self) -> &str {
        &self.code
    }
}

fn main() {
    let rows = (0..30)
        .map(|i| Row {
            id: i,
            name: format!("Row {i}"),
            code: format!("R{i:02}"),
        })
        .collect();

    let mut store = WindowStore::new(Preload::new(rows).with_current_page(2))
        .expect("default page size is non-zero");
    store.set_on_change(Some(|s: &WindowStore<Row>| {
        println!("changed: {:?}", s.snapshot());
    }));

    for direction in Direction::ALL {
        while store.advance(direction) {}
    }
    let ids: Vec<u32> = store.visible_items().map(|r| r.id).collect();
    println!("visible ids: {}..={}", ids[0], ids[ids.len() - 1]);

    // A discrete page jump collapses the expansion.
    store.set_current_page(1);
    println!("after jump: expanded={}", store.snapshot().is_expanded());
}
