//! Cellular frequency band identification from raw channel numbers.
//!
//! A modem reports the channel it is tuned to as a bare integer (an
//! ARFCN). This module turns that integer into something human-meaningful:
//! the downlink frequency, plus the 3GPP band number and frequency class
//! where the band tables allow.
//!
//! Band definitions overlap, so resolution is best effort by design.
//! See [`nr::resolve`] for the tie-break cascade used for NR.

pub mod nr;
pub mod representation;

pub use representation::BandNr;
