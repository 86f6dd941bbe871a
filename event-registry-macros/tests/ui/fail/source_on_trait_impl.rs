#![allow(unused)]
use event_registry_macros::event_source;

struct Source;

#[event_source]
impl Clone for Source {
    fn clone(&self) -> Self {
        Source
    }
}

fn main() {}
