// Example: attach a grid, scroll it, and apply the changed items.
use squares::{Extent, Grid, GridOptions, Node, Pull};

#[derive(Debug, Default)]
struct Poster {
    title: String,
}

impl Node for Poster {
    fn set_attribute(&mut self, _name: &str, _value: &str) {}
    fn set_style(&mut self, _property: &str, _value: &str) {}
    fn add_class(&mut self, _class: &str) {}
}

fn main() {
    let options = GridOptions::new(
        |req| {
            Pull::Ready(Poster {
                title: format!("poster #{}", req.index()),
            })
        },
        Poster::default,
    )
    .with_size(4)
    .with_max_item_count(Some(200))
    .with_on_edge(Some(|region: squares::EdgeRegion| {
        println!("edge: {}", region.as_str());
    }));

    let mut grid = Grid::new(options);
    let update = grid.attach(Extent::new(800.0, 600.0)).unwrap();
    println!("attached: {update:?} materialized={}", grid.materialized_count());

    for offset in [150.0, 900.0, 2400.0, 0.0] {
        let update = grid.on_scroll(offset).unwrap();
        println!(
            "scroll {offset}: window={:?} materialized={}",
            update.map(|u| u.window),
            grid.materialized_count()
        );
        grid.drain_changes(|item| {
            if let Some(p) = item.placement {
                println!(
                    "  {} at left={}% top={}% scale={}",
                    item.node.title, p.left_percent, p.top_percent, p.scale
                );
            }
        });
    }
}
