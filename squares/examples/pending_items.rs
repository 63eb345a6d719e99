// Example: items that arrive after the request, behind decorated placeholders.
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use squares::{Extent, Grid, GridOptions, Node, PendingId, Resolution};

#[derive(Debug, Default)]
struct Tile {
    label: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
}

impl Node for Tile {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn set_style(&mut self, _property: &str, _value: &str) {}

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_owned());
        }
    }
}

fn main() {
    // Odd items come from a slow backend.
    let in_flight: Arc<Mutex<Vec<PendingId>>> = Arc::default();
    let queue = Arc::clone(&in_flight);
    let options = GridOptions::new(
        move |req| {
            if req.index() % 2 == 1 {
                queue.lock().unwrap().push(req.pending_id());
                return req.defer();
            }
            req.ready(Tile {
                label: format!("tile {}", req.index()),
                ..Tile::default()
            })
        },
        || Tile {
            label: "loading".to_owned(),
            ..Tile::default()
        },
    )
    .with_size(3)
    .with_max_item_count(Some(18));

    let mut grid = Grid::new(options);
    grid.attach(Extent::new(600.0, 400.0)).unwrap();
    println!("pending={}", grid.pending_count());

    grid.add_class(1, "selected");
    grid.set_attribute(1, "data-rank", "1");

    let ids: Vec<PendingId> = in_flight.lock().unwrap().drain(..).collect();
    for id in ids.into_iter().rev() {
        let index = id.index();
        let item = (index != 5).then(|| Tile {
            label: format!("tile {index}"),
            ..Tile::default()
        });
        match grid.resolve(id, item) {
            Resolution::Swapped { index } => {
                let tile = grid.node(index).unwrap();
                println!("swapped {index}: {} {:?}", tile.label, tile.classes);
            }
            Resolution::Vacated { index } => println!("vacated {index}"),
            Resolution::Stale => println!("stale {index}"),
        }
    }

    grid.drain_changes(|item| println!("changed {} ({:?})", item.index, item.kind));
}
