//! # Ports Layer
//!
//! - **Inbound (Driving)**: API the transport layer calls

pub mod inbound;
