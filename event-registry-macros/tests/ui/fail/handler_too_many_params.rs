#![allow(unused)]
use event_registry::value::Args;
use event_registry_macros::event_source;

struct Source;

#[event_source]
impl Source {
    #[event_handler("Pair")]
    fn pair(first: &Args, second: &Args) {}
}

fn main() {}
