// Example: simulate a narrow viewport whose loader sentinels stay visible across renders.
use pagewindow::{Direction, Preload, Record};
use pagewindow_adapter::{Controller, Presentation, RatioSensor};

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

fn main() {
    let dataset = (0..250)
        .map(|i| Country {
            code: format!("C{i:03}"),
            name: format!("Country {i}"),
        })
        .collect();

    let mut c = Controller::new(
        Preload::new(dataset).with_current_page(5),
        Presentation::Paginated,
    )
    .expect("default page size is non-zero");
    let mut sensor = RatioSensor::new();
    c.connect(&mut sensor);

    // First layout pass: the viewport turns out to be narrow.
    c.on_viewport_width(390);
    println!("presentation={:?}", c.presentation());

    for frame in 0..6 {
        // Both sentinels are on screen for the whole simulation.
        sensor.report(Direction::Top, 1.0);
        sensor.report(Direction::Bottom, 1.0);
        let advanced = c.pump();

        let s = c.store().snapshot();
        println!(
            "frame {frame}: advanced={advanced} top={} bot={} visible={:?}",
            s.top_anchor,
            s.bot_anchor,
            s.visible()
        );

        // The re-render committed; the user keeps scrolling.
        for direction in Direction::ALL {
            c.on_settled(direction);
        }
        c.on_user_scroll();
    }

    // Growing the window back to desktop width collapses the expansion.
    c.on_viewport_width(1280);
    println!("links: {:?}", c.page_links(1));
}
