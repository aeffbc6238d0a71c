//! # Static table on the embassy clock
//!
//! Firmware usually keeps its timer table in a `static`. This demo places the
//! table in a [`StaticCell`] and polls it against the embassy time driver
//! (the `std` driver on a desktop) until a bounded timer is exhausted.
//!
//! ```bash
//! cargo run --example static_table
//! ```

use slot_timer::{Callback, Clock, EmbassyClock, TimerTable};
use static_cell::StaticCell;

static TIMERS: StaticCell<TimerTable<EmbassyClock>> = StaticCell::new();

fn sample_sensor(channel: u8) {
    println!("   sampling channel {} at {} ms", channel, EmbassyClock.now_ms());
}

fn main() {
    let timers = TIMERS.init(TimerTable::new(EmbassyClock));

    let id = timers
        .register_timer_with_param(50, Callback::Plain(sample_sensor), 5, 3)
        .expect("free slot");

    while timers.is_occupied(id) {
        timers.run();
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    println!("   sampler exhausted, {} timers left", timers.count_occupied());
}
