#![allow(unused)]
use event_registry_macros::event_source;

#[event_source]
struct NotAnImpl;

fn main() {}
