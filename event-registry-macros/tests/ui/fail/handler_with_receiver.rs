#![allow(unused)]
use event_registry_macros::event_source;

struct Source;

#[event_source]
impl Source {
    #[event_handler("Consume")]
    fn consume(self) {}
}

fn main() {}
