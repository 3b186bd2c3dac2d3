#![cfg(test)]

pub mod common;
pub mod roundtrip_tests;
pub mod scenario_tests;
