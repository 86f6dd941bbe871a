#![allow(unused)]
use event_registry_macros::event_handler;

#[event_handler("Lonely")]
fn lonely() {}

fn main() {}
