#![deny(unsafe_code)]

//! Static benchmark tables, one module per sport.
//!
//! These tables are checked-in domain policy taken from the sport research
//! documents. Nothing here is computed: eligibility and synthesis live in
//! `pdp-core` and only read from these tables.

pub mod athletics;
pub mod irish_dancing;
pub mod rugby;
