//! # Unit Components
//!
//! This module organizes the unit tests by simulator component: the core
//! (architectural state, execution units, CPU loop), the ISA definitions,
//! configuration, loading and reporting, and statistics.




/// Image loader, simulator façade, and report formatting.
pub mod sim;
