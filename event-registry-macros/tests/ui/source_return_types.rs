use event_registry::marker::EventSource;
use event_registry::value::{Args, Value};
use event_registry_macros::event_source;

struct Returns;

#[event_source]
impl Returns {
    #[event_handler("Unit")]
    fn unit(_args: &Args) {}

    #[event_handler("Plain")]
    fn plain() -> Value {
        Value::new(1_i32)
    }

    #[event_handler("Maybe")]
    fn maybe(args: &Args) -> Option<Value> {
        args.get(0).map(|_| Value::new("got one"))
    }

    #[event_handler("Fallible")]
    fn fallible(args: &Args) -> anyhow::Result<Option<Value>> {
        let n = args.arg::<i32>(0)?;
        Ok(Some(Value::new(n * 2)))
    }

    #[event_handler("Io")]
    fn io() -> Result<(), std::io::Error> {
        Ok(())
    }
}

fn main() {
    let names: Vec<&str> = Returns::handlers()
        .iter()
        .map(|d| d.markers()[0].event_name())
        .collect();
    assert_eq!(names, ["Unit", "Plain", "Maybe", "Fallible", "Io"]);
}
