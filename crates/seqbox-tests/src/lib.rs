//! Integration test crate for SeqBox.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the operator end to end against a scripted in-memory host.


#[cfg(test)]
mod select;


#[cfg(test)]
mod keymap;
