//! Todo walkthrough binary
//!
//! Drives the todo module the way a view would and prints what that view
//! would render after every change.

use std::cell::Cell;
use std::rc::Rc;
use todo_module::{DraftField, TodoId, TodoState, TodoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(state: &TodoState) {
    for item in &state.items {
        let status = if item.done { "✓" } else { " " };
        println!("  [{status}] #{} {} - {}", item.id, item.title, item.desc);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_module=debug,module_store_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    module_store_runtime::metrics::describe_metrics();

    println!("=== Todo Example ===\n");

    let mut store = TodoStore::with_samples();
    let renders = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&renders);
    let subscription = store.subscribe(move |_: &TodoState| counter.set(counter.get() + 1));

    println!("Seed items:");
    render(store.state());

    println!("\n>>> New todo \"Write docs\"");
    store.start_new();
    store.set_draft_field("title".parse::<DraftField>()?, "Write docs");
    store.set_draft_field("desc".parse::<DraftField>()?, "README and examples");
    println!("Panel: {:?}, editing {}", store.panel(), store.draft_mode());
    store.submit();
    render(store.state());

    println!("\n>>> Edit #2");
    store.start_edit(TodoId::new(2));
    println!("Panel: {:?}, editing {}", store.panel(), store.draft_mode());
    store.set_draft_field(DraftField::Title, "Sample02 (edited)");
    store.submit();
    render(store.state());

    println!("\n>>> Toggle #2 done, remove #1");
    store.toggle_done(TodoId::new(2), true);
    store.remove(TodoId::new(1));
    render(store.state());

    store.unsubscribe(subscription);
    println!(
        "\nDone: {}/{} after {} renders",
        store.state().completed_count(),
        store.state().count(),
        renders.get()
    );

    println!("\nFinal state:");
    println!("{}", serde_json::to_string_pretty(store.state())?);
    Ok(())
}
