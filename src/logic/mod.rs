// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boolean logic tables for the circuits posts.

pub mod gates;

pub use gates::{bits_to_id, boolean_gates, id_to_bits, BooleanGate, GateDesc};
