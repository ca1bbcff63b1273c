//! nrband - NR (5G) frequency band resolution from ARFCN values.
//!
//! Resolves a raw NR-ARFCN, as reported by a device's modem, into the
//! downlink frequency, the 3GPP band number and an approximate frequency
//! class. Obtaining the ARFCN from a device and presenting the result
//! are left to the caller; this crate only implements the lookup.
//!
//! ```
//! use nrband::resolve;
//!
//! let band = resolve(630_000, &[]);
//! assert_eq!(band.number, Some(78));
//! assert_eq!(band.name, Some("3500"));
//! assert_eq!(band.downlink_frequency, 3_450_000);
//! ```

pub mod bands;

// Re-export commonly used items
pub use bands::nr::{downlink_frequency, resolve};
pub use bands::representation::BandNr;
