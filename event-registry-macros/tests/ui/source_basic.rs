use event_registry::marker::EventSource;
use event_registry_macros::event_source;

struct Example;

#[event_source]
impl Example {
    #[event_handler("HelloWorld")]
    fn hello_world() {}

    fn not_a_handler(x: u32) -> u32 {
        x + 1
    }
}

fn main() {
    let handlers = Example::handlers();
    assert_eq!(handlers.len(), 1);
    assert_eq!(handlers[0].function(), "hello_world");
    assert_eq!(handlers[0].markers()[0].event_name(), "HelloWorld");
    assert_eq!(Example::not_a_handler(1), 2);
}
