//! Typed dashboard documents
//!
//! `kinds` holds the record shapes of each document kind together with their
//! JSON codec. `roundtrip` checks that a document survives decode and encode.

pub mod kinds;
pub mod roundtrip;
