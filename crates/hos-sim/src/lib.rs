//! `hos-sim` — the Hours-of-Service simulation engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`state`]     | `SimulationState` — the duty clocks as a pure value     |
//! | [`segment`]   | `SegmentSimulator` — chunked advance + trigger checks   |
//! | [`itinerary`] | `ItineraryBuilder` — START/PICKUP/DROPOFF bracketing    |
//!
//! # Simulation model (summary)
//!
//! A leg of known distance and duration is consumed in chunks of at most
//! `max_chunk_hours`.  Each chunk advances every clock proportionally, then
//! trigger checks run in fixed priority order:
//!
//! ```text
//! ① driving_since_break ≥ break_after_hours   → REST   (resets break clock)
//! ② distance ≥ fuel checkpoint (post-pickup)  → FUEL   (advances checkpoint)
//! ③ driving_today ≥ max_driving_hours
//!    or duty_today ≥ max_duty_hours           → OVERNIGHT (resets day clocks)
//! ```
//!
//! Chunk boundaries are additionally clipped to the earliest threshold
//! crossing, so a clock advanced by driving lands *exactly* on its limit —
//! stops appear at the regulation instant, not up to half an hour late.
//!
//! The whole engine is a pure function of `(rules, legs, starting state)`:
//! no I/O, no shared state, deterministic to the bit.  Independent trips may
//! be simulated concurrently without coordination; legs within one trip are
//! strictly sequential because each leg's starting clocks are the previous
//! leg's final clocks.

pub mod itinerary;
pub mod segment;
pub mod state;


pub use itinerary::ItineraryBuilder;
pub use segment::SegmentSimulator;
pub use state::SimulationState;
