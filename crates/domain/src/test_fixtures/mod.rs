//! Test doubles for the host game.

mod fake_thing;

pub use fake_thing::FakeThing;
