#![allow(unused)]
use event_registry_macros::event_source;

struct Source;

#[event_source]
impl Source {
    #[event_handler("Generic")]
    fn generic<T>() {}
}

fn main() {}
