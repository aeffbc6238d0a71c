//! # Quickstart Example
//!
//! Minimal tour of slot-timer on a simulated clock:
//! - Register periodic, one-shot and bounded timers
//! - Drive the table from a control loop
//! - Pause, reschedule and delete timers
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use slot_timer::{Callback, ManualClock, TimerTable};

fn heartbeat(id: u8) {
    println!("   [heartbeat] timer {}", id);
}

fn beep(marker: u8) {
    println!("   [beep] marker {:#04x}", marker);
}

fn boot_done(_: u8) {
    println!("   [boot] boot sequence complete");
}

/// Re-entrant action: stops the heartbeat (slot 0) on its single run.
fn stop_heartbeat(timers: &mut TimerTable<&ManualClock>, _: u8) {
    println!("   [stop] disabling heartbeat");
    timers.disable(0);
}

fn main() {
    println!("=== slot-timer Quickstart ===\n");

    let clock = ManualClock::new(0);
    let mut timers: TimerTable<&ManualClock> = TimerTable::new(&clock);

    // ======================================================================
    // 1. Register timers
    // ======================================================================
    println!("1. Registering timers");
    let heartbeat_id = timers
        .set_interval(250, Callback::Plain(heartbeat))
        .expect("free slot");
    timers
        .set_timeout(400, Callback::Plain(boot_done))
        .expect("free slot");
    timers
        .register_timer_with_param(100, Callback::Plain(beep), 3, 0xBE)
        .expect("free slot");
    timers
        .set_timeout(1_100, Callback::Table(stop_heartbeat))
        .expect("free slot");
    println!(
        "   {} / {} slots active\n",
        timers.count_active(),
        timers.capacity()
    );

    // ======================================================================
    // 2. Control loop
    // ======================================================================
    println!("2. Running the control loop for 1.5 s (10 ms ticks)");
    for _ in 0..150 {
        clock.advance(10);
        timers.run();
    }
    println!(
        "   heartbeat enabled: {}, {} slots still occupied\n",
        timers.is_enabled(heartbeat_id),
        timers.count_occupied()
    );

    // ======================================================================
    // 3. Reschedule and resume
    // ======================================================================
    println!("3. Resuming the heartbeat at 100 ms");
    timers.reschedule(heartbeat_id, 100);
    timers.enable(heartbeat_id);
    for _ in 0..35 {
        clock.advance(10);
        timers.run();
    }

    timers.delete_slot(heartbeat_id);
    println!("\n   all timers done: {}", timers.count_occupied() == 0);
}
