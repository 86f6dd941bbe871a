use event_registry::marker::EventSource;
use event_registry_macros::event_source;

struct Multi;

#[event_source]
impl Multi {
    #[event_handler("Open")]
    #[event_handler("Reopen")]
    #[event_registry_macros::event_handler("")]
    #[inline]
    fn open() {}
}

fn main() {
    let handlers = Multi::handlers();
    let names: Vec<&str> = handlers[0].markers().iter().map(|m| m.event_name()).collect();
    assert_eq!(names, ["Open", "Reopen", ""]);
}
