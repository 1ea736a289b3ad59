//! Event scheduler built on an indexed heap
//!
//! Events are ordered by due time, earliest first, so they are wrapped in
//! `Reverse`. Rescheduling moves an event in place with `modify`, and
//! cancelling removes it from the middle of the queue with `remove_at`;
//! neither needs a rebuild.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --example event_scheduler
//! ```

use std::cmp::Reverse;

use indexed_binary_heap::{IndexedBinaryHeap, Prioritized};
use log::{info, warn};

type Event = Reverse<Prioritized<u64, &'static str>>;

struct Scheduler {
    queue: IndexedBinaryHeap<Event>,
    now: u64,
}

impl Scheduler {
    fn new() -> Self {
        Scheduler {
            queue: IndexedBinaryHeap::new(),
            now: 0,
        }
    }

    fn schedule(&mut self, due: u64, name: &'static str) {
        info!("schedule {} at t={}", name, due);
        self.queue.push(Reverse(Prioritized::new(due, name)));
    }

    fn slot_of(&self, name: &str) -> Option<usize> {
        self.queue.iter().position(|Reverse(e)| e.value == name)
    }

    fn reschedule(&mut self, name: &str, due: u64) {
        match self.slot_of(name) {
            Some(slot) => {
                info!("reschedule {} to t={}", name, due);
                self.queue.modify(slot, |Reverse(e)| e.priority = due);
            }
            None => warn!("reschedule: no pending event named {}", name),
        }
    }

    fn cancel(&mut self, name: &str) {
        match self.slot_of(name).and_then(|slot| self.queue.remove_at(slot)) {
            Some(Reverse(e)) => info!("cancel {} (was due t={})", e.value, e.priority),
            None => warn!("cancel: no pending event named {}", name),
        }
    }

    /// Fires every event due at or before `until`
    fn run_until(&mut self, until: u64) {
        while let Some(Reverse(next)) = self.queue.peek() {
            if next.priority > until {
                break;
            }
            if let Some(Reverse(event)) = self.queue.pop() {
                self.now = event.priority;
                info!("t={}: fire {}", self.now, event.value);
            }
        }
        self.now = until;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scheduler = Scheduler::new();
    scheduler.schedule(30, "flush-cache");
    scheduler.schedule(10, "heartbeat");
    scheduler.schedule(50, "rotate-logs");
    scheduler.schedule(20, "compact");

    scheduler.run_until(15);

    scheduler.reschedule("rotate-logs", 25);
    scheduler.cancel("compact");
    scheduler.cancel("compact");

    scheduler.run_until(40);

    scheduler.schedule(60, "heartbeat");
    scheduler.schedule(70, "shutdown");

    // whatever is left fires in order
    let remaining: Vec<_> = scheduler
        .queue
        .drain_sorted()
        .map(|Reverse(e)| e.into_parts())
        .collect();
    info!("drained at shutdown: {:?}", remaining);
}
